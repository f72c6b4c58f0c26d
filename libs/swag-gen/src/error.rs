//! Errors raised while assembling an `OpenAPI` document.

/// Document generation error
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("HTTP method '{method}' on '{path}' cannot be expressed in OpenAPI")]
    UnsupportedMethod { method: String, path: String },
    #[error("path '{path}' must start with '/'")]
    InvalidPath { path: String },
}
