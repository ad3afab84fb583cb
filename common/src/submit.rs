//! 送信フロー
//!
//! Loading表示 -> ペイロード組み立て -> 送信 -> 描画 / 失敗通知 までを1回分行う。
//! リトライ・タイムアウトはなし。

use crate::dispatcher::{HttpReply, Submission, Workflow};
use crate::error::Result;
use crate::presentation::{PresentationState, Presenter, ResultView};
use crate::request::Payload;
use crate::types::SubmissionContext;
use std::future::Future;

/// 送信先バックエンド
pub trait Backend {
    /// ホスト側のファイルハンドル
    type File;

    fn post(
        &self,
        workflow: Workflow,
        payload: Payload<Self::File>,
    ) -> impl Future<Output = Result<HttpReply>>;
}

/// 1回分の送信を実行し、最終状態のPresenterを返す
///
/// `context` はフォーム読み取りの結果。読み取り失敗も通常の失敗経路で通知する。
/// エラーは呼び出し元へは返さない。
pub async fn submit<B, V>(
    backend: &B,
    mut presenter: Presenter<V>,
    context: Result<SubmissionContext<B::File>>,
) -> Presenter<V>
where
    B: Backend,
    V: ResultView,
{
    presenter.begin();

    let result = async {
        let submission = Submission::dispatch(context?);
        let workflow = submission.workflow();
        let reply = backend.post(workflow, submission.into_payload()).await?;
        reply.into_outcome(workflow)
    }
    .await;

    match result {
        Ok(outcome) => presenter.populate(&outcome),
        Err(error) => presenter.fail(&error),
    }

    debug_assert_ne!(presenter.state(), PresentationState::Loading);
    presenter
}
