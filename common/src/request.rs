//! 送信ペイロードの組み立て
//!
//! 複数履歴書モードは必要なフィールドだけを手組みし、
//! 単一履歴書モードはフォーム全体をそのまま送る。

/// 複数履歴書モードのファイルフィールド名
pub const RESUMES_FIELD: &str = "resumes";
pub const SKILLS_FIELD: &str = "skills";
pub const EXPERIENCE_FIELD: &str = "experience";

/// マルチパートの値
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<F> {
    File(F),
    Text(String),
}

/// マルチパートの1フィールド
#[derive(Debug, Clone, PartialEq)]
pub struct Field<F> {
    pub name: &'static str,
    pub value: FieldValue<F>,
}

impl<F> Field<F> {
    pub fn file(name: &'static str, file: F) -> Self {
        Self { name, value: FieldValue::File(file) }
    }

    pub fn text(name: &'static str, text: impl Into<String>) -> Self {
        Self { name, value: FieldValue::Text(text.into()) }
    }
}

/// 送信ペイロード
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<F> {
    /// フォーム要素全体（ホスト側でネイティブに直列化する）
    NativeForm,
    /// 手組みのフィールド列（順序を保持）
    Multipart(Vec<Field<F>>),
}

impl<F> Payload<F> {
    /// 指定名のフィールド数（NativeFormは常に0）
    pub fn count_fields(&self, name: &str) -> usize {
        match self {
            Payload::NativeForm => 0,
            Payload::Multipart(fields) => fields.iter().filter(|f| f.name == name).count(),
        }
    }
}

/// 複数履歴書モードのペイロードを組み立てる
///
/// ファイルは選択順に `resumes` を繰り返し、`skills` / `experience` は入力値をそのまま付ける。
/// トリムや検証はしない（サーバー側の責務）。
pub fn build_batch_payload<F>(files: Vec<F>, skills: &str, experience: &str) -> Payload<F> {
    let mut fields: Vec<Field<F>> = files
        .into_iter()
        .map(|file| Field::file(RESUMES_FIELD, file))
        .collect();

    fields.push(Field::text(SKILLS_FIELD, skills));
    fields.push(Field::text(EXPERIENCE_FIELD, experience));

    Payload::Multipart(fields)
}
