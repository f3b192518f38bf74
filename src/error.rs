use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("page does not expose `{0}`")]
    Missing(&'static str),
    #[error("invalid page configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("unrecognized message type `{kind}`")]
    Unrecognized { kind: String },
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("message is not an object with a `type` tag")]
    NotAnObject,
}

#[derive(Debug, Error)]
pub enum LiveError {
    #[error("hosting page does not provide `{0}`")]
    Unavailable(&'static str),
    #[error("javascript call failed: {0}")]
    Js(String),
    #[error("could not encode message: {0}")]
    Encode(#[from] serde_json::Error),
}
