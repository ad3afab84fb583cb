//! 送信フローテスト
//!
//! モード判定 -> 送信 -> 描画 / 失敗通知 の一連の流れを、記録用ビューと
//! 応答を固定したバックエンドで検証

use futures::executor::block_on;
use resume_scanner_common::request::{EXPERIENCE_FIELD, RESUMES_FIELD, SKILLS_FIELD};
use resume_scanner_common::{
    submit, AnalysisView, Backend, BadgeView, DomainBadge, Error, FieldValue, HttpReply, Payload,
    PresentationState, Presenter, RankTable, Result, ResultView, SubmissionContext, Workflow,
    FAILURE_ALERT,
};
use std::cell::RefCell;

#[derive(Default)]
struct Badge {
    text: String,
    class_name: String,
    visible: bool,
}

impl DomainBadge for Badge {
    fn show(&mut self, badge: &BadgeView) {
        self.text = badge.text.clone();
        self.class_name = badge.class_name.clone();
        self.visible = true;
    }
}

/// ページの状態を模したビュー
#[derive(Default)]
struct PageView {
    loader_visible: bool,
    output_visible: bool,
    rows: Vec<Vec<String>>,
    decision: String,
    score: String,
    matched: String,
    detected: String,
    badge: Option<Badge>,
    alerts: Vec<String>,
    logged: Vec<String>,
}

impl ResultView for PageView {
    type Badge = Badge;

    fn set_loader_visible(&mut self, visible: bool) {
        self.loader_visible = visible;
    }

    fn set_output_visible(&mut self, visible: bool) {
        self.output_visible = visible;
    }

    fn clear_rank_table(&mut self) {
        self.rows.clear();
    }

    fn write_rank_table(&mut self, table: &RankTable) -> Result<()> {
        self.rows.clear();
        self.rows.push(table.header.iter().map(|h| h.to_string()).collect());
        self.rows.extend(table.rows.iter().map(|r| r.to_vec()));
        Ok(())
    }

    fn write_analysis(&mut self, view: &AnalysisView) -> Result<()> {
        self.decision = view.decision.clone();
        self.score = view.score.clone();
        self.matched = view.matched.clone();
        self.detected = view.detected.clone();
        Ok(())
    }

    fn badge(&mut self) -> Option<&mut Badge> {
        self.badge.as_mut()
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn log_error(&mut self, error: &Error) {
        self.logged.push(error.to_string());
    }
}

/// 固定応答のバックエンド
struct FixedBackend {
    reply: fn() -> Result<HttpReply>,
    seen: RefCell<Vec<(Workflow, Payload<String>)>>,
}

impl FixedBackend {
    fn new(reply: fn() -> Result<HttpReply>) -> Self {
        Self { reply, seen: RefCell::new(Vec::new()) }
    }
}

impl Backend for FixedBackend {
    type File = String;

    async fn post(&self, workflow: Workflow, payload: Payload<String>) -> Result<HttpReply> {
        self.seen.borrow_mut().push((workflow, payload));
        (self.reply)()
    }
}

fn files(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn run(backend: &FixedBackend, view: PageView, ctx: SubmissionContext<String>) -> Presenter<PageView> {
    block_on(submit(backend, Presenter::new(view), Ok(ctx)))
}

/// 複数ファイル: /rank にresumesを選択順で送り、表を描画
#[test]
fn test_batch_submission_renders_table() {
    let backend = FixedBackend::new(|| {
        Ok(HttpReply::new(
            200,
            r#"[
                {"rank": 1, "resume": "a.pdf", "domain": "finance", "score": 82, "decision": "Shortlist"},
                {"rank": 2, "resume": "b.docx", "domain": "cyber_forensics", "score": 41.5, "decision": "CONDITIONAL"}
            ]"#,
        ))
    });
    let ctx = SubmissionContext::new(files(&["a.pdf", "b.docx"]), "python, sql", "2");

    let presenter = run(&backend, PageView::default(), ctx);
    assert_eq!(presenter.state(), PresentationState::Populated);

    let seen = backend.seen.borrow();
    let (workflow, payload) = &seen[0];
    assert_eq!(*workflow, Workflow::Batch);

    let Payload::Multipart(fields) = payload else {
        panic!("Multipartであるべき");
    };
    let names: Vec<_> = fields.iter().map(|f| f.name).collect();
    assert_eq!(names, vec![RESUMES_FIELD, RESUMES_FIELD, SKILLS_FIELD, EXPERIENCE_FIELD]);
    assert_eq!(fields[0].value, FieldValue::File("a.pdf".to_string()));
    assert_eq!(fields[2].value, FieldValue::Text("python, sql".to_string()));

    let view = presenter.into_view();
    assert_eq!(view.rows.len(), 3);
    assert_eq!(view.rows[0], vec!["Rank", "Resume", "Domain", "Score", "Decision"]);
    assert_eq!(view.rows[1], vec!["1", "a.pdf", "FINANCE", "82%", "Shortlist"]);
    assert_eq!(view.rows[2][2], "CYBER_FORENSICS");
    assert_eq!(view.rows[2][3], "41.5%");
    assert!(!view.loader_visible);
    assert!(view.alerts.is_empty());
}

/// 単一ファイル: /analyze にフォーム全体を送り、各欄とバッジを更新
#[test]
fn test_single_submission_renders_fields() {
    let backend = FixedBackend::new(|| {
        Ok(HttpReply::new(
            200,
            r#"{
                "decision": "SUITABLE",
                "score": 88,
                "matchedSkills": ["python", "aws"],
                "detectedSkills": [],
                "domain": "machine_learning"
            }"#,
        ))
    });
    let view = PageView { badge: Some(Badge::default()), ..Default::default() };
    let ctx = SubmissionContext::new(files(&["cv.pdf"]), "python, aws", "4");

    let presenter = run(&backend, view, ctx);
    assert_eq!(presenter.state(), PresentationState::Populated);
    assert_eq!(backend.seen.borrow()[0], (Workflow::Single, Payload::NativeForm));

    let view = presenter.into_view();
    assert_eq!(view.decision, "Decision: SUITABLE");
    assert_eq!(view.score, "88%");
    assert_eq!(view.matched, "python, aws");
    assert_eq!(view.detected, "None");
    assert!(view.output_visible);

    let badge = view.badge.expect("バッジがない");
    assert!(badge.visible);
    assert_eq!(badge.text, "MACHINE LEARNING");
    assert_eq!(badge.class_name, "domain-badge machine_learning");
}

/// ファイル0件もSingle扱い。サーバーの検証エラーは失敗経路で通知
#[test]
fn test_zero_files_server_rejects() {
    let backend = FixedBackend::new(|| {
        Ok(HttpReply::new(400, r#"{"error": "No resume uploaded"}"#))
    });
    let ctx = SubmissionContext::new(Vec::new(), "", "");

    let presenter = run(&backend, PageView::default(), ctx);
    assert_eq!(presenter.state(), PresentationState::Idle);
    assert_eq!(backend.seen.borrow()[0].0, Workflow::Single);

    let view = presenter.into_view();
    assert_eq!(view.alerts, vec![FAILURE_ALERT.to_string()]);
    assert_eq!(view.logged, vec!["Server returned 400: No resume uploaded".to_string()]);
    assert!(!view.output_visible);
}

/// 通信失敗: Idleに戻り、アラートは1回だけ
#[test]
fn test_transport_failure() {
    let backend = FixedBackend::new(|| Err(Error::Transport("TypeError: Failed to fetch".to_string())));
    let ctx = SubmissionContext::new(files(&["a.pdf"]), "", "");

    let presenter = run(&backend, PageView::default(), ctx);
    assert_eq!(presenter.state(), PresentationState::Idle);

    let view = presenter.into_view();
    assert!(!view.loader_visible);
    assert!(!view.output_visible);
    assert_eq!(view.alerts.len(), 1);
    assert!(view.logged[0].contains("Failed to fetch"));
}

/// 成功ステータスでも形式が違えば失敗扱い
#[test]
fn test_malformed_success_body() {
    let backend = FixedBackend::new(|| Ok(HttpReply::new(200, r#"{"decision": "SUITABLE"}"#)));
    let ctx = SubmissionContext::new(files(&["a.pdf"]), "", "");

    let presenter = run(&backend, PageView::default(), ctx);
    assert_eq!(presenter.state(), PresentationState::Idle);

    let view = presenter.into_view();
    assert_eq!(view.alerts.len(), 1);
    assert!(view.logged[0].starts_with("JSON error"));
    assert!(view.decision.is_empty());
}

/// 表示専用の項目が欠けた行は "undefined" として描画し、Populatedになる
#[test]
fn test_batch_row_missing_decision_still_populates() {
    let backend = FixedBackend::new(|| {
        Ok(HttpReply::new(200, r#"[{"rank":1,"resume":"a.pdf","domain":"finance","score":82.0}]"#))
    });
    let ctx = SubmissionContext::new(files(&["a.pdf", "b.pdf"]), "", "");

    let presenter = run(&backend, PageView::default(), ctx);
    assert_eq!(presenter.state(), PresentationState::Populated);

    let view = presenter.into_view();
    assert_eq!(view.rows[1], vec!["1", "a.pdf", "FINANCE", "82%", "undefined"]);
    assert!(view.alerts.is_empty());
}

/// 単一モードで decision が無くても各欄は描画される
#[test]
fn test_single_missing_decision_still_populates() {
    let backend = FixedBackend::new(|| {
        Ok(HttpReply::new(
            200,
            r#"{"score": 30, "matchedSkills": [], "detectedSkills": ["excel"], "domain": "finance"}"#,
        ))
    });
    let ctx = SubmissionContext::new(files(&["cv.pdf"]), "", "");

    let presenter = run(&backend, PageView::default(), ctx);
    assert_eq!(presenter.state(), PresentationState::Populated);

    let view = presenter.into_view();
    assert_eq!(view.decision, "Decision: undefined");
    assert_eq!(view.score, "30%");
    assert_eq!(view.detected, "excel");
    assert!(view.output_visible);
}

/// 前回の表は送信開始時に消える
#[test]
fn test_previous_table_cleared_on_failure() {
    let backend = FixedBackend::new(|| Err(Error::Transport("offline".to_string())));
    let view = PageView {
        rows: vec![vec!["Rank".to_string()], vec!["1".to_string()]],
        output_visible: true,
        ..Default::default()
    };
    let ctx = SubmissionContext::new(files(&["a.pdf", "b.pdf"]), "", "");

    let view = run(&backend, view, ctx).into_view();
    assert!(view.rows.is_empty());
    assert!(!view.output_visible);
}
