use core::fmt;

/// storage key of the burner wallet secret
pub const BURNER_STORAGE_KEY: &str = "mesh-burnerwallet";

/// shortest username accepted by the WebAuthn connect action
pub const MIN_USERNAME_LENGTH: usize = 6;

#[derive(
    Debug, Default, PartialEq, Eq, Hash, Clone, Copy, serde::Deserialize, serde::Serialize,
)]
#[serde(from = "u8", into = "u8")]
pub enum NetworkId {
    PreProduction,
    Preview,
    #[default]
    Mainnet,
    Unknown(u8),
}

impl From<NetworkId> for u8 {
    fn from(network_id: NetworkId) -> Self {
        match network_id {
            NetworkId::PreProduction => 0,
            NetworkId::Preview => 0,
            NetworkId::Mainnet => 1,
            NetworkId::Unknown(n) => n,
        }
    }
}

impl From<u8> for NetworkId {
    fn from(id: u8) -> Self {
        match id {
            0 => NetworkId::PreProduction,
            1 => NetworkId::Mainnet,
            unknown => NetworkId::Unknown(unknown),
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkId::PreProduction => write!(f, "pre-production"),
            NetworkId::Preview => write!(f, "preview"),
            NetworkId::Mainnet => write!(f, "mainnet"),
            NetworkId::Unknown(id) => write!(f, "unknown-network-id({id:#02x})"),
        }
    }
}

/// Settings shared by the wallet screens.
///
/// Can be decoded from a JavaScript object with [`SessionConfig::from_js`]:
///
/// ```js
/// { networkId: 0, authServerUrl: "https://auth.example.com" }
/// ```
///
/// Missing fields take their [`Default`] value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    pub network_id: NetworkId,
    pub storage_key: String,
    pub min_username_length: usize,
    pub auth_server_url: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            network_id: NetworkId::default(),
            storage_key: BURNER_STORAGE_KEY.to_owned(),
            min_username_length: MIN_USERNAME_LENGTH,
            auth_server_url: None,
        }
    }
}

impl SessionConfig {
    pub fn from_js(value: wasm_bindgen::JsValue) -> Result<Self, serde_wasm_bindgen::Error> {
        serde_wasm_bindgen::from_value(value)
    }
}
