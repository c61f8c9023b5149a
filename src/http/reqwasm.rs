use std::{cell::Cell, rc::Rc, time::Duration};

use reqwasm::http::Request;
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    config::ClientConfig,
    error::{HttpError, TransportError},
    http::transport::{HttpRequest, HttpResponse, Method, Transport},
};

/// Browser transport backed by `fetch` through `reqwasm`.
///
/// `fetch` has no timeout of its own, so each request gets an `AbortController` that is
/// triggered by a `setTimeout` once the configured timeout elapses.
#[derive(Clone, Debug)]
pub struct ReqwasmTransport {
    timeout: Duration,
}

impl ReqwasmTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        Ok(Self {
            timeout: config.request_timeout,
        })
    }

    fn url_with_query(request: &HttpRequest) -> String {
        if request.query.is_empty() {
            return request.url.clone();
        }

        let query = request
            .query
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    String::from(js_sys::encode_uri_component(key)),
                    String::from(js_sys::encode_uri_component(value))
                )
            })
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", request.url, query)
    }
}

impl Transport for ReqwasmTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let timeout_ms = self.timeout.as_millis() as u64;
        // `setTimeout` takes an i32 delay
        let delay_ms = i32::try_from(timeout_ms).unwrap_or(i32::MAX);

        let window = web_sys::window()
            .ok_or_else(|| TransportError::Setup("no window object".to_string()))?;
        let controller = web_sys::AbortController::new()
            .map_err(|e| TransportError::Setup(format!("{:?}", e)))?;

        let timed_out = Rc::new(Cell::new(false));
        let on_timeout = {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            Closure::once(move || {
                timed_out.set(true);
                controller.abort();
            })
        };
        let timer = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                on_timeout.as_ref().unchecked_ref(),
                delay_ms,
            )
            .map_err(|e| TransportError::Setup(format!("{:?}", e)))?;

        let method = match request.method {
            Method::Get => reqwasm::http::Method::GET,
            Method::Post => reqwasm::http::Method::POST,
            Method::Put => reqwasm::http::Method::PUT,
            Method::Delete => reqwasm::http::Method::DELETE,
        };

        let signal = controller.signal();
        let mut builder = Request::new(&Self::url_with_query(request))
            .method(method)
            .abort_signal(Some(&signal));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let result = builder.send().await;
        window.clear_timeout_with_handle(timer);
        drop(on_timeout);

        let response = result.map_err(|e| {
            if timed_out.get() {
                TransportError::Timeout(timeout_ms)
            } else {
                TransportError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
