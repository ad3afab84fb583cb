//! 起動とsubmitハンドラ

use crate::api::FetchBackend;
use crate::dom::DomView;
use crate::form::read_submission;
use gloo::console;
use resume_scanner_common::{
    submit, ClientConfig, PresentationState, Presenter, Workflow, CONFIG_ELEMENT_ID, FAILURE_ALERT,
};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlFormElement};

/// 設定を読み込み、フォームのsubmitにハンドラを登録する
pub fn start() -> Result<(), JsValue> {
    let document = gloo::utils::document();
    let config = Rc::new(load_config(&document));

    let form: HtmlFormElement = document
        .get_element_by_id(&config.elements.form)
        .ok_or_else(|| JsValue::from_str(&format!("#{} が見つかりません", config.elements.form)))?
        .dyn_into()?;

    let handler_form = form.clone();
    let closure = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();

        let config = config.clone();
        let form = handler_form.clone();
        spawn_local(async move {
            handle_submit(config, form).await;
        });
    }) as Box<dyn FnMut(_)>);

    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}

/// ページに埋め込まれた設定JSONを読む。無ければデフォルト
fn load_config(document: &Document) -> ClientConfig {
    let json = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|e| e.text_content())
        .unwrap_or_default();

    ClientConfig::from_json(&json).unwrap_or_else(|e| {
        console::error!(format!("{} (デフォルト設定を使用)", e));
        ClientConfig::default()
    })
}

/// 送信1回分。エラーはここで握りつぶし、通知とログだけ行う
async fn handle_submit(config: Rc<ClientConfig>, form: HtmlFormElement) {
    let document = gloo::utils::document();
    let view = match DomView::locate(&document, &config) {
        Ok(view) => view,
        Err(e) => {
            gloo::dialogs::alert(FAILURE_ALERT);
            console::error!(e.to_string());
            return;
        }
    };

    let context = read_submission(&form, &config);
    if let Ok(ctx) = &context {
        let workflow = Workflow::for_file_count(ctx.file_count());
        console::log!(format!("{}: {} file(s)", workflow.endpoint(), ctx.file_count()));
    }

    let backend = FetchBackend::new(form, config.clone());
    let presenter = Presenter::with_badge_class(view, config.badge_class.clone());
    let presenter = submit(&backend, presenter, context).await;

    if presenter.state() == PresentationState::Populated {
        console::log!("results rendered");
    }
}
