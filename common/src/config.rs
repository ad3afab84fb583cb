//! クライアント設定
//!
//! ホストページの `<script type="application/json" id="resume-scanner-config">`
//! から読み込む。項目が無ければデフォルト値を使う。

use crate::dispatcher::Workflow;
use crate::error::{Error, Result};
use crate::render::BADGE_BASE_CLASS;
use serde::{Deserialize, Serialize};

/// 設定を埋め込む要素のID
pub const CONFIG_ELEMENT_ID: &str = "resume-scanner-config";

/// ページ内の要素ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementIds {
    pub form: String,
    pub output: String,
    pub loader: String,
    pub rank_table: String,
    pub decision: String,
    pub score: String,
    pub matched: String,
    pub detected: String,
    pub domain_badge: String,
    pub file_input_selector: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            form: "form".into(),
            output: "output".into(),
            loader: "loader".into(),
            rank_table: "rankTable".into(),
            decision: "decision".into(),
            score: "score".into(),
            matched: "matched".into(),
            detected: "l3".into(),
            domain_badge: "domainBadge".into(),
            file_input_selector: r#"input[type="file"]"#.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    /// APIのベースURL（空ならページと同一オリジンの相対パス）
    pub base_url: String,
    pub elements: ElementIds,
    pub hidden_class: String,
    pub badge_class: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            elements: ElementIds::default(),
            hidden_class: "hidden".into(),
            badge_class: BADGE_BASE_CLASS.into(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// ワークフローの送信先URL
    pub fn endpoint_url(&self, workflow: Workflow) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), workflow.endpoint())
    }
}
