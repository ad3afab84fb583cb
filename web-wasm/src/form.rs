//! フォーム読み取り

use resume_scanner_common::request::{EXPERIENCE_FIELD, SKILLS_FIELD};
use resume_scanner_common::{ClientConfig, Error, Result, SubmissionContext, Workflow};
use wasm_bindgen::prelude::*;
use web_sys::{File, HtmlFormElement, HtmlInputElement};

/// 送信時点のフォーム状態を読み取る
///
/// ファイル入力が無い場合は0件として扱う（サーバー側で検証される）。
pub fn read_submission(form: &HtmlFormElement, config: &ClientConfig) -> Result<SubmissionContext<File>> {
    let files = selected_files(form, &config.elements.file_input_selector);
    context_for(form, files)
}

/// skills / experience は複数モードのときだけ読む。単一モードはフォーム全体を送る
fn context_for(form: &HtmlFormElement, files: Vec<File>) -> Result<SubmissionContext<File>> {
    match Workflow::for_file_count(files.len()) {
        Workflow::Single => Ok(SubmissionContext::new(files, "", "")),
        Workflow::Batch => {
            let skills = field_value(form, SKILLS_FIELD)?;
            let experience = field_value(form, EXPERIENCE_FIELD)?;
            Ok(SubmissionContext::new(files, skills, experience))
        }
    }
}

fn selected_files(form: &HtmlFormElement, selector: &str) -> Vec<File> {
    let Some(input) = form
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
    else {
        return Vec::new();
    };

    let Some(list) = input.files() else {
        return Vec::new();
    };

    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// name属性で入力欄の値を読む（input / textarea / select を問わない）
fn field_value(form: &HtmlFormElement, name: &str) -> Result<String> {
    let element = form
        .query_selector(&format!(r#"[name="{}"]"#, name))
        .map_err(|e| Error::Form(format!("{:?}", e)))?
        .ok_or_else(|| Error::Form(format!("{} 欄が見つかりません", name)))?;

    let value = js_sys::Reflect::get(&element, &JsValue::from_str("value"))
        .map_err(|e| Error::Form(format!("{:?}", e)))?;

    Ok(value.as_string().unwrap_or_default())
}
