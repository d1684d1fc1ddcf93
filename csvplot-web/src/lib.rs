mod console;
mod dom;
mod fetch;
mod handler;
mod ready;
mod utils;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

pub use console::WebConsole;
pub use dom::{PageDocument, PageElement};
pub use fetch::{Fetcher, WebFetcher};
pub use handler::{
    fetch_and_report, load_data_set, render_placeholder, PageLoadHandler, CONTAINER_ID, DATA_PATH,
    PLACEHOLDER_HTML,
};
pub use ready::{DomContentLoaded, ReadyHandler, ReadySignal};

use utils::set_panic_hook;

/// Module entry point: wires the page handlers to the real document.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_panic_hook();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    let handler = PageLoadHandler::new(
        Rc::new(document.clone()),
        Rc::new(WebFetcher::new(window)),
        Rc::new(WebConsole),
    );
    handler.register(&DomContentLoaded::new(document));

    Ok(())
}
