use thiserror::Error;

/// Failures surfaced by the page glue.
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("server answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("DOM error: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, FrontendError>;

impl From<wasm_bindgen::JsValue> for FrontendError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        FrontendError::Dom(format!("{value:?}"))
    }
}
