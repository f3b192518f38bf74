//! Seams to the hosting experiment page: the live message channel and the page form.

use serde_json::Value;
use tracing::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::error::LiveError;
use crate::protocol::Outbound;

/// Bidirectional live channel provided by the page.
pub trait LiveChannel {
    fn send(&self, message: &Outbound) -> Result<(), LiveError>;

    /// Installs `handler` for inbound deliveries (one message or an array of them).
    /// The handler stays installed until the returned subscription is dropped.
    fn subscribe(&self, handler: Box<dyn FnMut(Value)>) -> Result<Subscription, LiveError>;
}

/// Finalises the enclosing page when the round ends.
pub trait RoundFinisher {
    fn finish(&mut self);
}

/// Disposer for a channel subscription; runs its cleanup exactly once.
#[must_use = "dropping the subscription uninstalls the handler"]
pub struct Subscription {
    dispose: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(dispose: impl FnOnce() + 'static) -> Self {
        Self {
            dispose: Some(Box::new(dispose)),
        }
    }

    pub fn dispose(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(f) = self.dispose.take() {
            f();
        }
    }
}

fn window() -> Result<web_sys::Window, LiveError> {
    web_sys::window().ok_or(LiveError::Unavailable("window"))
}

fn js_err(e: JsValue) -> LiveError {
    LiveError::Js(format!("{e:?}"))
}

/// oTree live pages: outbound through `window.liveSend`, inbound through `window.liveRecv`.
#[derive(Clone, Debug, Default)]
pub struct OtreeLive;

const SEND_FN: &str = "liveSend";
const RECV_FN: &str = "liveRecv";

impl LiveChannel for OtreeLive {
    fn send(&self, message: &Outbound) -> Result<(), LiveError> {
        let win = window()?;
        let send = js_sys::Reflect::get(&win, &JsValue::from_str(SEND_FN))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .ok_or(LiveError::Unavailable(SEND_FN))?;
        let raw = serde_json::to_string(message)?;
        let payload = js_sys::JSON::parse(&raw).map_err(js_err)?;
        send.call1(&JsValue::NULL, &payload).map_err(js_err)?;
        Ok(())
    }

    fn subscribe(&self, mut handler: Box<dyn FnMut(Value)>) -> Result<Subscription, LiveError> {
        let win = window()?;
        let recv = Closure::<dyn FnMut(JsValue)>::new(move |delivery: JsValue| {
            let raw = js_sys::JSON::stringify(&delivery)
                .ok()
                .and_then(|s| s.as_string());
            match raw.as_deref().map(serde_json::from_str::<Value>) {
                Some(Ok(value)) => handler(value),
                Some(Err(e)) => error!("dropping undecodable live delivery: {e}"),
                None => error!("dropping live delivery that is not JSON"),
            }
        });
        js_sys::Reflect::set(&win, &JsValue::from_str(RECV_FN), recv.as_ref()).map_err(js_err)?;
        Ok(Subscription::new(move || {
            if let Err(e) = js_sys::Reflect::delete_property(&win, &JsValue::from_str(RECV_FN)) {
                error!("failed to uninstall {RECV_FN}: {e:?}");
            }
            drop(recv);
        }))
    }
}

/// Submits the page form, advancing the experiment to its next page.
#[derive(Clone, Debug)]
pub struct FormSubmitter {
    form_id: String,
}

impl FormSubmitter {
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
        }
    }

    fn submit(&self) -> Result<(), LiveError> {
        let form = window()?
            .document()
            .and_then(|d| d.get_element_by_id(&self.form_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok())
            .ok_or(LiveError::Unavailable("form"))?;
        form.request_submit().map_err(js_err)
    }
}

impl Default for FormSubmitter {
    fn default() -> Self {
        Self::new("form")
    }
}

impl RoundFinisher for FormSubmitter {
    fn finish(&mut self) {
        info!(form = %self.form_id, "submitting page form");
        if let Err(e) = self.submit() {
            error!("could not submit page form: {e}");
        }
    }
}
