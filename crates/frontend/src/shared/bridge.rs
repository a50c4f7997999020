//! Command bridge to the backend process.
//!
//! Every backend feature is reached through Tauri's `invoke`: a command name
//! plus a JSON-like argument object, answered with a value or a rejection.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], js_name = invoke, catch)]
    async fn tauri_invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// The backend rejected the command.
    #[error("{0}")]
    Rejected(String),
    /// The backend answered with a value of the wrong kind.
    #[error("{0}")]
    Unexpected(String),
    #[error("Invalid data: {0}")]
    Serde(String),
}

impl BridgeError {
    /// Classify a JS rejection: an `Error` contributes its message, a string
    /// is used as is, anything else is unknown.
    pub fn from_js(value: &JsValue) -> Self {
        let error_message = value
            .dyn_ref::<js_sys::Error>()
            .map(|error| String::from(error.message()));
        Self::from_rejection(error_message, value.as_string())
    }

    /// `error_message` is set when the rejection was a JS `Error`; `text`
    /// when it was a plain string.
    pub fn from_rejection(error_message: Option<String>, text: Option<String>) -> Self {
        BridgeError::Rejected(describe_rejection(error_message.or(text)))
    }
}

/// Message for a rejection that may or may not carry text.
pub fn describe_rejection(text: Option<String>) -> String {
    match text {
        Some(text) if !text.is_empty() => text,
        _ => UNKNOWN_ERROR.to_string(),
    }
}

/// Call a backend command with arguments and decode its result.
pub async fn invoke<A, R>(cmd: &str, args: &A) -> Result<R, BridgeError>
where
    A: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let args = serde_wasm_bindgen::to_value(args).map_err(|e| BridgeError::Serde(e.to_string()))?;
    invoke_raw(cmd, args).await
}

/// Call a backend command that takes no arguments.
pub async fn invoke_no_args<R>(cmd: &str) -> Result<R, BridgeError>
where
    R: DeserializeOwned,
{
    invoke_raw(cmd, JsValue::UNDEFINED).await
}

async fn invoke_raw<R>(cmd: &str, args: JsValue) -> Result<R, BridgeError>
where
    R: DeserializeOwned,
{
    log::debug!("invoke {}", cmd);
    match tauri_invoke(cmd, args).await {
        Ok(value) => serde_wasm_bindgen::from_value(value).map_err(|e| {
            log::error!("{}: unexpected response: {}", cmd, e);
            BridgeError::Unexpected(format!("Unexpected response from {}", cmd))
        }),
        Err(err) => {
            let err = BridgeError::from_js(&err);
            log::warn!("{} failed: {}", cmd, err);
            Err(err)
        }
    }
}

/// The backend answers some commands with `true`; `false` is a failure.
pub fn expect_true(cmd: &str, value: bool) -> Result<(), BridgeError> {
    if value {
        Ok(())
    } else {
        Err(BridgeError::Unexpected(format!("{} returned false", cmd)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_rejection() {
        assert_eq!(
            describe_rejection(Some("No active database connection.".into())),
            "No active database connection."
        );
        assert_eq!(describe_rejection(Some(String::new())), UNKNOWN_ERROR);
        assert_eq!(describe_rejection(None), UNKNOWN_ERROR);
    }

    #[test]
    fn test_rejection_classification() {
        assert_eq!(
            BridgeError::from_rejection(Some("Already connected to the database.".into()), None),
            BridgeError::Rejected("Already connected to the database.".into())
        );
        assert_eq!(
            BridgeError::from_rejection(Some(String::new()), None),
            BridgeError::Rejected(UNKNOWN_ERROR.into())
        );
        assert_eq!(
            BridgeError::from_rejection(None, Some("File not found".into())),
            BridgeError::Rejected("File not found".into())
        );
        assert_eq!(
            BridgeError::from_rejection(None, None),
            BridgeError::Rejected(UNKNOWN_ERROR.into())
        );
    }

    #[test]
    fn test_error_display_is_the_message() {
        assert_eq!(
            BridgeError::Rejected("Database configuration not found".into()).to_string(),
            "Database configuration not found"
        );
        assert_eq!(
            BridgeError::Serde("bad".into()).to_string(),
            "Invalid data: bad"
        );
    }

    #[test]
    fn test_expect_true() {
        assert!(expect_true("disconnect_from_database", true).is_ok());
        assert_eq!(
            expect_true("disconnect_from_database", false),
            Err(BridgeError::Unexpected(
                "disconnect_from_database returned false".into()
            ))
        );
    }
}
