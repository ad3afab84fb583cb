//! 送信・解析結果の型定義
//!
//! ブラウザ側(WASM)とネイティブテストで共有される型:
//! - SubmissionContext: フォーム送信1回分の入力
//! - RankResult: /rank（複数履歴書）の出力1件
//! - AnalysisResult: /analyze（単一履歴書）の出力
//!
//! 表示するだけの項目は `Scalar` で受け、欠けていても "undefined" として描画する。
//! 文字列操作が必要な `domain` とスキル配列だけは必須。

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// フォーム送信1回分の状態
///
/// `F` はホスト側のファイルハンドル型（ブラウザでは `web_sys::File`）。
/// 送信時に生成され、リクエスト完了後に破棄される。
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionContext<F> {
    pub files: Vec<F>,
    pub skills_text: String,
    pub experience_text: String,
}

impl<F> SubmissionContext<F> {
    pub fn new(files: Vec<F>, skills_text: impl Into<String>, experience_text: impl Into<String>) -> Self {
        Self {
            files,
            skills_text: skills_text.into(),
            experience_text: experience_text.into(),
        }
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// 表示用の値
///
/// `None` はフィールド欠落（"undefined"）、`Some(Value::Null)` は明示的な null。
/// 文字列化はブラウザの String() と同じ規則（82.0 は "82"）。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scalar(Option<Value>);

impl Scalar {
    pub fn undefined() -> Self {
        Scalar(None)
    }

    pub fn from_f64(value: f64) -> Self {
        Scalar(Some(serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number)))
    }

    pub fn is_undefined(&self) -> bool {
        self.0.is_none()
    }

    /// 配列の join 用。null は空文字になる
    pub fn to_join_string(&self) -> String {
        match &self.0 {
            Some(Value::Null) => String::new(),
            _ => self.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|v| Scalar(Some(v)))
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar(Some(Value::String(value.to_string())))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar(Some(Value::from(value)))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => f.write_str("undefined"),
            Some(value) => write_value(f, value),
        }
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{}", b),
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(x) => write!(f, "{}", x),
            None => write!(f, "{}", n),
        },
        Value::Number(n) => write!(f, "{}", n),
        Value::String(s) => f.write_str(s),
        Value::Array(items) => {
            let joined: Vec<String> = items
                .iter()
                .map(|v| Scalar(Some(v.clone())).to_join_string())
                .collect();
            f.write_str(&joined.join(","))
        }
        Value::Object(_) => f.write_str("[object Object]"),
    }
}

/// 複数履歴書ランキングの1件
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RankResult {
    #[serde(default)]
    pub rank: Scalar,
    #[serde(default)]
    pub resume: Scalar,
    pub domain: String,
    #[serde(default)]
    pub score: Scalar,
    #[serde(default)]
    pub decision: Scalar,
}

/// 単一履歴書の解析結果
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub decision: Scalar,
    #[serde(default)]
    pub score: Scalar,
    pub matched_skills: Vec<Scalar>,
    pub detected_skills: Vec<Scalar>,
    pub domain: String,        // 例: "cyber_forensics"
}

/// サーバーのエラーレスポンス（{"error": "..."}）
#[derive(Debug, Clone, Deserialize)]
pub struct ServerError {
    pub error: String,
}
