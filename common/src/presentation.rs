//! 表示状態の制御
//!
//! Idle -> Loading -> Populated / Idle の状態遷移と、ローダー・出力欄・
//! ランキング表の表示切替を受け持つ。DOM操作は `ResultView` 越しに行う。

use crate::dispatcher::Outcome;
use crate::error::{Error, Result};
use crate::render::{AnalysisView, BadgeView, RankTable, Rendered, BADGE_BASE_CLASS};

/// 失敗時にユーザーへ出す通知
pub const FAILURE_ALERT: &str = "Error analyzing resume. Check server logs.";

/// 表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationState {
    #[default]
    Idle,
    Loading,
    Populated,
}

/// ドメインバッジ（ページに無い場合もある）
pub trait DomainBadge {
    /// テキストとクラスを書き換えて表示する
    fn show(&mut self, badge: &BadgeView);
}

/// 結果表示先
///
/// 書き込み先の要素が無い等で描画できない場合は `Err` を返す。
pub trait ResultView {
    type Badge: DomainBadge;

    fn set_loader_visible(&mut self, visible: bool);
    fn set_output_visible(&mut self, visible: bool);
    fn clear_rank_table(&mut self);
    fn write_rank_table(&mut self, table: &RankTable) -> Result<()>;
    fn write_analysis(&mut self, view: &AnalysisView) -> Result<()>;
    fn badge(&mut self) -> Option<&mut Self::Badge>;
    fn alert(&mut self, message: &str);
    fn log_error(&mut self, error: &Error);
}

/// 送信1回分の表示コントローラ
pub struct Presenter<V> {
    view: V,
    state: PresentationState,
    badge_class: String,
}

impl<V: ResultView> Presenter<V> {
    pub fn new(view: V) -> Self {
        Self::with_badge_class(view, BADGE_BASE_CLASS)
    }

    pub fn with_badge_class(view: V, badge_class: impl Into<String>) -> Self {
        Self {
            view,
            state: PresentationState::Idle,
            badge_class: badge_class.into(),
        }
    }

    pub fn state(&self) -> PresentationState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// 送信開始（リクエスト前）
    pub fn begin(&mut self) {
        self.view.set_loader_visible(true);
        self.view.set_output_visible(false);
        self.view.clear_rank_table();
        self.state = PresentationState::Loading;
    }

    /// 成功レスポンスを描画。描画に失敗したら失敗経路へ
    pub fn populate(&mut self, outcome: &Outcome) {
        self.view.set_loader_visible(false);

        match self.render(outcome) {
            Ok(()) => self.state = PresentationState::Populated,
            Err(error) => self.fail(&error),
        }
    }

    fn render(&mut self, outcome: &Outcome) -> Result<()> {
        match outcome.render(&self.badge_class) {
            // 複数モードは表だけを更新し、出力欄は閉じたまま
            Rendered::Table(table) => self.view.write_rank_table(&table),
            Rendered::Analysis(analysis) => {
                self.view.write_analysis(&analysis)?;
                if let Some(badge) = self.view.badge() {
                    badge.show(&analysis.badge);
                }
                self.view.set_output_visible(true);
                Ok(())
            }
        }
    }

    /// 失敗時はIdleへ戻し、通知は1回だけ
    pub fn fail(&mut self, error: &Error) {
        self.view.set_loader_visible(false);
        self.view.alert(FAILURE_ALERT);
        self.view.log_error(error);
        self.state = PresentationState::Idle;
    }
}
