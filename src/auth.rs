use crate::error::Error;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub server_url: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub wallet: Option<AuthWallet>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthWallet {
    pub bech32_private_key: String,
}

impl AuthResponse {
    /// the root key of a successful authentication
    pub fn into_root_key(self) -> Result<String, Error> {
        match self {
            AuthResponse {
                success: true,
                wallet: Some(wallet),
                ..
            } => Ok(wallet.bech32_private_key),
            AuthResponse {
                success: true,
                wallet: None,
                ..
            } => Err(Error::Authentication(
                "the server did not return a wallet".to_owned(),
            )),
            AuthResponse { error, .. } => Err(Error::Authentication(
                error.unwrap_or_else(|| "rejected by the server".to_owned()),
            )),
        }
    }
}

/// The WebAuthn authentication endpoint of the wallet library.
///
/// Not every version of the library ships it, see
/// [`HeadlessSdk::authenticator`](crate::sdk::HeadlessSdk::authenticator).
#[async_trait(?Send)]
pub trait Authenticator {
    async fn connect(&self, request: &AuthRequest<'_>) -> Result<AuthResponse, Error>;
}
