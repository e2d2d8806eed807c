use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum APIErrorCode {
    #[error("Invalid inputs.")]
    InvalidRequest,
    #[error("An error occured during the execution of this API call.")]
    InternalError,
    #[error("The request was denied. The wallet may be disconnected.")]
    Refused,
    /// If this error happens we might need to re-authenticate.
    #[error("The account has changed.")]
    AccountChange,
    #[error("Unknown error code `{0}'")]
    Unknown(i64),
}

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error, serde::Deserialize,
)]
#[error("{code}. {info}.")]
pub struct APIError {
    pub code: APIErrorCode,
    pub info: String,
}

impl APIError {
    /// decode the rejection value of a CIP30 promise
    ///
    /// Wallets reject with `{ code, info }` objects. Anything else is
    /// reported as an [`APIErrorCode::InternalError`].
    pub(crate) fn from_js(error: JsValue) -> Self {
        serde_wasm_bindgen::from_value(error.clone()).unwrap_or_else(|decode_error| APIError {
            code: APIErrorCode::InternalError,
            info: format!("Couldn't decode the error content: {decode_error} ({error:?})"),
        })
    }

    pub(crate) fn internal(info: impl Into<String>) -> Self {
        APIError {
            code: APIErrorCode::InternalError,
            info: info.into(),
        }
    }
}

/// Errors returned by the wallet flows and hooks of this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The wallet library loaded in the page does not provide a function
    /// this flow needs.
    #[error("{capability} is not available in this version of the wallet library")]
    CapabilityUnavailable { capability: &'static str },

    #[error(transparent)]
    Api(#[from] APIError),

    /// A call into the JavaScript wallet library was rejected.
    #[error("Wallet library call `{call}' failed: {info}")]
    Js { call: &'static str, info: String },

    #[error("Couldn't derive the wallet: {0}")]
    Derivation(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid asset unit `{unit}': {reason}")]
    InvalidUnit { unit: String, reason: String },

    #[error("Invalid quantity `{0}', expecting a decimal number")]
    InvalidQuantity(String),

    #[error("Secret storage error: {0}")]
    Storage(String),

    #[error("Couldn't generate a mnemonic: {0}")]
    Mnemonic(String),

    /// Another wallet creation flow is still running on this context.
    #[error("A wallet flow is already in progress")]
    FlowInProgress,
}

impl Error {
    pub(crate) fn js(call: &'static str, error: JsValue) -> Self {
        Error::Js {
            call,
            info: js_message(&error),
        }
    }

    /// the wallet library refused to derive a wallet from the given secret
    pub(crate) fn derivation(call: &'static str, info: impl std::fmt::Display) -> Self {
        Error::Derivation(format!("`{call}' rejected the secret: {info}"))
    }
}

/// the message of a JavaScript rejection: a string, or an `Error` object
pub(crate) fn js_message(error: &JsValue) -> String {
    error
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(error, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| format!("{error:?}"))
}

impl<'de> serde::Deserialize<'de> for APIErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl serde::de::Visitor<'_> for Visitor {
            type Value = APIErrorCode;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "Expecting an integer APIErrorCode")
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match v {
                    -1 => Ok(APIErrorCode::InvalidRequest),
                    -2 => Ok(APIErrorCode::InternalError),
                    -3 => Ok(APIErrorCode::Refused),
                    -4 => Ok(APIErrorCode::AccountChange),
                    unknown => Ok(APIErrorCode::Unknown(unknown)),
                }
            }
        }

        deserializer.deserialize_i64(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn api_error_code_json() {
        assert_eq!(
            serde_json::from_value::<APIErrorCode>(json! { -1 }).unwrap(),
            APIErrorCode::InvalidRequest
        );
        assert_eq!(
            serde_json::from_value::<APIErrorCode>(json! { -2 }).unwrap(),
            APIErrorCode::InternalError
        );
        assert_eq!(
            serde_json::from_value::<APIErrorCode>(json! { -3 }).unwrap(),
            APIErrorCode::Refused
        );
        assert_eq!(
            serde_json::from_value::<APIErrorCode>(json! { -4 }).unwrap(),
            APIErrorCode::AccountChange
        );
        assert_eq!(
            serde_json::from_value::<APIErrorCode>(json! { -42 }).unwrap(),
            APIErrorCode::Unknown(-42)
        );
    }

    #[test]
    fn api_error_json() {
        assert_eq!(
            serde_json::from_value::<APIError>(json! { {
                "code": -1,
                "info": "Parameter malformed.",
            }})
            .unwrap(),
            APIError {
                code: APIErrorCode::InvalidRequest,
                info: "Parameter malformed.".to_owned()
            }
        );

        assert_eq!(
            serde_json::from_value::<APIError>(json! { {
                "code": -2,
                "info": "Internal Error.",
            }})
            .unwrap(),
            APIError {
                code: APIErrorCode::InternalError,
                info: "Internal Error.".to_owned()
            }
        );

        assert_eq!(
            serde_json::from_value::<APIError>(json! { {
                "code": -3,
                "info": "Access Denied.",
            }})
            .unwrap(),
            APIError {
                code: APIErrorCode::Refused,
                info: "Access Denied.".to_owned()
            }
        );

        assert_eq!(
            serde_json::from_value::<APIError>(json! { {
                "code": -4,
                "info": "Account has changed.",
            }})
            .unwrap(),
            APIError {
                code: APIErrorCode::AccountChange,
                info: "Account has changed.".to_owned()
            }
        );
    }

    #[test]
    fn error_display() {
        let error = Error::CapabilityUnavailable {
            capability: "WebAuthn connect",
        };
        assert_eq!(
            error.to_string(),
            "WebAuthn connect is not available in this version of the wallet library"
        );

        let error = Error::from(APIError {
            code: APIErrorCode::Refused,
            info: "Access Denied".to_owned(),
        });
        assert_eq!(
            error.to_string(),
            "The request was denied. The wallet may be disconnected.. Access Denied."
        );
    }

    #[test]
    fn derivation_rejection_names_the_call() {
        let error = Error::derivation("fromBip32Root", "invalid bech32 string");
        assert!(matches!(&error, Error::Derivation(_)));
        assert_eq!(
            error.to_string(),
            "Couldn't derive the wallet: `fromBip32Root' rejected the secret: invalid bech32 string"
        );
    }
}
