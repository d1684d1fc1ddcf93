use common::{Console, DataSet, LoadError};
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Developer console of the current page.
pub struct WebConsole;

impl Console for WebConsole {
    fn info(&self, message: &str) {
        console::log_1(&message.into());
    }

    fn data(&self, message: &str, data: &DataSet) {
        console::log_2(&message.into(), &data_set_to_js(data));
    }

    fn warn(&self, message: &str) {
        console::warn_1(&message.into());
    }

    fn error(&self, message: &str, error: &LoadError) {
        let error: JsValue = js_sys::Error::new(&error.to_string()).into();
        console::error_2(&message.into(), &error);
    }
}

/// Array of plain objects, one per row, with the header attached as
/// `columns`.
fn data_set_to_js(data: &DataSet) -> JsValue {
    let rows: Array = data
        .iter()
        .map(|row| {
            let obj = Object::new();
            for (column, value) in row.iter() {
                // Setting a fresh data property on a plain object cannot fail
                let _ = Reflect::set(&obj, &column.into(), &value.into());
            }
            obj
        })
        .collect();

    let columns: Array = data.columns().iter().map(|c| JsValue::from_str(c)).collect();
    let _ = Reflect::set(&rows, &"columns".into(), &columns);

    rows.into()
}
