//! 送信モード判定
//!
//! 選択ファイル数で単一解析(/analyze)と複数ランキング(/rank)を切り替える。
//! 判定は送信ごとに1回だけ行い、以降はバリアントが自分のペイロードと
//! レスポンス形式を持つ。

use crate::error::{Error, Result};
use crate::request::{build_batch_payload, Payload};
use crate::types::{AnalysisResult, RankResult, ServerError, SubmissionContext};

/// ワークフロー種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    /// 単一履歴書の解析
    Single,
    /// 複数履歴書のランキング
    Batch,
}

impl Workflow {
    /// ファイル数から判定（0件もSingle。検証はサーバー側）
    pub fn for_file_count(count: usize) -> Self {
        if count > 1 {
            Workflow::Batch
        } else {
            Workflow::Single
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            Workflow::Single => "analyze",
            Workflow::Batch => "rank",
        }
    }

    /// レスポンス本文をワークフローの形式でデコード
    ///
    /// 表示するだけの項目は欠けていても通す。`domain` とスキル配列が無い、
    /// または複数モードで配列でない場合はエラー。
    pub fn decode(&self, body: &str) -> Result<Outcome> {
        match self {
            Workflow::Single => Ok(Outcome::Analyzed(serde_json::from_str(body)?)),
            Workflow::Batch => Ok(Outcome::Ranked(serde_json::from_str(body)?)),
        }
    }
}

/// 単一履歴書リクエスト（フォーム全体を転送するので中身を持たない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SingleRequest;

/// 複数履歴書リクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRequest<F> {
    pub files: Vec<F>,
    pub skills: String,
    pub experience: String,
}

/// 送信1回分のリクエスト
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<F> {
    Single(SingleRequest),
    Batch(BatchRequest<F>),
}

impl<F> Submission<F> {
    /// SubmissionContextからワークフローを選択
    pub fn dispatch(context: SubmissionContext<F>) -> Self {
        match Workflow::for_file_count(context.file_count()) {
            Workflow::Single => Submission::Single(SingleRequest),
            Workflow::Batch => Submission::Batch(BatchRequest {
                files: context.files,
                skills: context.skills_text,
                experience: context.experience_text,
            }),
        }
    }

    pub fn workflow(&self) -> Workflow {
        match self {
            Submission::Single(_) => Workflow::Single,
            Submission::Batch(_) => Workflow::Batch,
        }
    }

    pub fn into_payload(self) -> Payload<F> {
        match self {
            Submission::Single(SingleRequest) => Payload::NativeForm,
            Submission::Batch(req) => build_batch_payload(req.files, &req.skills, &req.experience),
        }
    }
}

/// 成功レスポンスのデコード結果
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Ranked(Vec<RankResult>),
    Analyzed(AnalysisResult),
}

/// トランスポート非依存のHTTP応答
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 2xx以外はエラー。本文が {"error": "..."} ならメッセージを拾う
    pub fn into_outcome(self, workflow: Workflow) -> Result<Outcome> {
        if !self.is_success() {
            let message = serde_json::from_str::<ServerError>(&self.body)
                .ok()
                .map(|e| e.error);
            return Err(Error::Status { status: self.status, message });
        }

        workflow.decode(&self.body)
    }
}
