//! Resume Scanner Web Client (WASM)

mod app;
mod api;
mod dom;
mod form;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    app::start()
}
