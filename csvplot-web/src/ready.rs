use futures::future::LocalBoxFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Document;

/// Work to run once the page is ready. Synchronous handlers return an
/// already-completed future.
pub type ReadyHandler = Box<dyn FnOnce() -> LocalBoxFuture<'static, ()>>;

/// Single registration point for "the page is ready". Each call adds an
/// independent subscriber.
pub trait ReadySignal {
    fn on_ready(&self, handler: ReadyHandler);
}

/// `DOMContentLoaded` on a real document.
pub struct DomContentLoaded {
    document: Document,
}

impl DomContentLoaded {
    pub fn new(document: Document) -> DomContentLoaded {
        DomContentLoaded { document }
    }
}

impl ReadySignal for DomContentLoaded {
    fn on_ready(&self, handler: ReadyHandler) {
        // The wasm module can finish loading after the event already fired
        if self.document.ready_state() != "loading" {
            wasm_bindgen_futures::spawn_local(handler());
            return;
        }

        let callback: JsValue = Closure::once_into_js(move || {
            wasm_bindgen_futures::spawn_local(handler());
        });

        if let Err(err) = self
            .document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        {
            web_sys::console::error_2(&"Failed to subscribe to DOMContentLoaded:".into(), &err);
        }
    }
}
