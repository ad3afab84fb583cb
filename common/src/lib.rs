//! Resume Scanner Common Library
//!
//! ブラウザ側(WASM)クライアントの送信モード判定・ペイロード組み立て・
//! 結果描画・表示状態制御。DOMに依存しないのでネイティブでテストできる。

pub mod types;
pub mod error;
pub mod config;
pub mod request;
pub mod dispatcher;
pub mod render;
pub mod presentation;
pub mod submit;

pub use types::{AnalysisResult, RankResult, Scalar, SubmissionContext};
pub use error::{Error, Result};
pub use config::{ClientConfig, ElementIds, CONFIG_ELEMENT_ID};
pub use request::{Field, FieldValue, Payload};
pub use dispatcher::{HttpReply, Outcome, Submission, Workflow};
pub use render::{AnalysisView, BadgeView, RankTable};
pub use presentation::{DomainBadge, PresentationState, Presenter, ResultView, FAILURE_ALERT};
pub use submit::{submit, Backend};
