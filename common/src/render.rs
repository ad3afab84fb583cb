//! 結果表示用ビューモデル
//!
//! DOMに依存しない文字列だけを組み立てる。実際の書き込みは
//! `presentation::ResultView` の実装側が行う。

use crate::dispatcher::Outcome;
use crate::types::{AnalysisResult, RankResult, Scalar};

/// ランキング表のヘッダー
pub const RANK_TABLE_HEADER: [&str; 5] = ["Rank", "Resume", "Domain", "Score", "Decision"];

/// スキル一覧が空のときの表示
pub const EMPTY_SKILLS: &str = "None";

/// バッジの基本クラス
pub const BADGE_BASE_CLASS: &str = "domain-badge";

/// ランキング表（ヘッダー + サーバー順の行）
#[derive(Debug, Clone, PartialEq)]
pub struct RankTable {
    pub header: [&'static str; 5],
    pub rows: Vec<[String; 5]>,
}

impl RankTable {
    /// ヘッダー行を含む行数
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }
}

/// ドメインバッジ
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeView {
    pub text: String,
    pub class_name: String,
}

/// 単一解析結果の表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub decision: String,
    pub score: String,
    pub matched: String,
    pub detected: String,
    pub badge: BadgeView,
}

/// レンダリング結果
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Table(RankTable),
    Analysis(AnalysisView),
}

impl Outcome {
    pub fn render(&self, badge_class: &str) -> Rendered {
        match self {
            Outcome::Ranked(results) => Rendered::Table(render_rank_table(results)),
            Outcome::Analyzed(result) => Rendered::Analysis(render_analysis(result, badge_class)),
        }
    }
}

pub fn render_rank_table(results: &[RankResult]) -> RankTable {
    let rows = results
        .iter()
        .map(|r| {
            [
                r.rank.to_string(),
                r.resume.to_string(),
                r.domain.to_uppercase(),
                format!("{}%", r.score),
                r.decision.to_string(),
            ]
        })
        .collect();

    RankTable {
        header: RANK_TABLE_HEADER,
        rows,
    }
}

pub fn render_analysis(result: &AnalysisResult, badge_class: &str) -> AnalysisView {
    AnalysisView {
        decision: format!("Decision: {}", result.decision),
        score: format!("{}%", result.score),
        matched: join_skills(&result.matched_skills),
        detected: join_skills(&result.detected_skills),
        badge: render_badge(&result.domain, badge_class),
    }
}

/// スキル一覧を ", " で連結（空なら "None"）
pub fn join_skills(skills: &[Scalar]) -> String {
    if skills.is_empty() {
        EMPTY_SKILLS.to_string()
    } else {
        skills
            .iter()
            .map(Scalar::to_join_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// "machine_learning" -> "MACHINE LEARNING"（アンダースコアはすべて空白にする）
pub fn domain_label(domain: &str) -> String {
    domain.replace('_', " ").to_uppercase()
}

/// クラスには置換前のドメインをそのまま付ける
pub fn render_badge(domain: &str, badge_class: &str) -> BadgeView {
    BadgeView {
        text: domain_label(domain),
        class_name: format!("{} {}", badge_class, domain),
    }
}
