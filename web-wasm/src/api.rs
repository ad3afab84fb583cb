//! バックエンド送信（fetch + FormData）

use gloo::console;
use resume_scanner_common::{
    Backend, ClientConfig, Error, FieldValue, HttpReply, Payload, Result, Workflow,
};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, HtmlFormElement, Request, RequestInit, Response};

/// ブラウザのfetchで送るバックエンド
pub struct FetchBackend {
    form: HtmlFormElement,
    config: Rc<ClientConfig>,
}

impl FetchBackend {
    pub fn new(form: HtmlFormElement, config: Rc<ClientConfig>) -> Self {
        Self { form, config }
    }
}

impl Backend for FetchBackend {
    type File = File;

    async fn post(&self, workflow: Workflow, payload: Payload<File>) -> Result<HttpReply> {
        let url = self.config.endpoint_url(workflow);
        let body = to_form_data(&self.form, payload).map_err(transport_error)?;

        console::log!(format!("POST {}", url));
        post_form(&url, &body).await.map_err(transport_error)
    }
}

/// PayloadをFormDataへ変換
///
/// NativeFormはフォーム要素からそのまま作る。
pub fn to_form_data(form: &HtmlFormElement, payload: Payload<File>) -> std::result::Result<FormData, JsValue> {
    match payload {
        Payload::NativeForm => FormData::new_with_form(form),
        Payload::Multipart(fields) => {
            let data = FormData::new()?;
            for field in fields {
                match field.value {
                    FieldValue::File(file) => data.append_with_blob(field.name, &file)?,
                    FieldValue::Text(text) => data.append_with_str(field.name, &text)?,
                }
            }
            Ok(data)
        }
    }
}

/// multipartでPOSTし、ステータスと本文を返す（リトライなし）
async fn post_form(url: &str, body: &FormData) -> std::result::Result<HttpReply, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(body.as_ref());

    // Content-Typeはboundary付きでブラウザが設定する
    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window がありません"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok(HttpReply::new(resp.status(), text.as_string().unwrap_or_default()))
}

fn transport_error(value: JsValue) -> Error {
    Error::Transport(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
