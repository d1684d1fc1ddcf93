use common::LoadError;
use futures::future::{FutureExt, LocalBoxFuture};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

pub trait Fetcher {
    /// Resolves `path` relative to the page and returns the response body.
    fn fetch_text(&self, path: &str) -> LocalBoxFuture<'_, Result<String, LoadError>>;
}

pub struct WebFetcher {
    window: Window,
}

impl WebFetcher {
    pub fn new(window: Window) -> WebFetcher {
        WebFetcher { window }
    }
}

impl Fetcher for WebFetcher {
    fn fetch_text(&self, path: &str) -> LocalBoxFuture<'_, Result<String, LoadError>> {
        let request = self.window.fetch_with_str(path);

        async move {
            let resp_value = JsFuture::from(request).await.map_err(network_error)?;
            let resp: Response = resp_value.dyn_into().map_err(network_error)?;

            if !resp.ok() {
                return Err(LoadError::Status {
                    status: resp.status(),
                    status_text: resp.status_text(),
                });
            }

            JsFuture::from(resp.text().map_err(network_error)?)
                .await
                .map_err(network_error)?
                .as_string()
                .ok_or_else(|| LoadError::Network("response body is not text".into()))
        }
        .boxed_local()
    }
}

fn network_error(value: JsValue) -> LoadError {
    let msg = match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
    };
    LoadError::Network(msg)
}
