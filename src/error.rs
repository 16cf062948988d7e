//! Error types for startup and configuration

use std::fmt;

/// Errors raised while setting up the world or its drawing surface
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Settings failed validation
    InvalidSettings(String),
    /// Settings JSON could not be parsed
    Parse(String),
    /// Browser environment missing a required object (window, document, ...)
    MissingEnvironment(&'static str),
    /// Canvas element not found or not a canvas
    CanvasNotFound(String),
    /// Canvas did not provide a 2D context
    ContextUnavailable,
    /// A JS call failed
    Js(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidSettings(msg) => write!(f, "Invalid settings: {}", msg),
            AppError::Parse(msg) => write!(f, "Failed to parse settings: {}", msg),
            AppError::MissingEnvironment(what) => write!(f, "No {} available", what),
            AppError::CanvasNotFound(id) => write!(f, "Canvas element '{}' not found", id),
            AppError::ContextUnavailable => write!(f, "Canvas 2D context unavailable"),
            AppError::Js(msg) => write!(f, "JS error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Parse(e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for AppError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        AppError::Js(format!("{:?}", value))
    }
}
