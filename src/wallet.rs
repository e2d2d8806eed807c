use crate::{ConnectedWallet, error::APIError, ffi};
use wasm_bindgen::{JsCast as _, JsValue};

/// A wallet offered to the user when choosing how to connect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct WalletDescriptor {
    /// key of the wallet under `window.cardano` (e.g. `"lace"`)
    pub id: String,
    pub name: String,
    /// HTML ready icon (usually a data URI)
    pub icon: String,
}

/// Lists the wallets available to the page.
pub trait WalletSource {
    fn installed_wallets(&self) -> Vec<WalletDescriptor>;
}

/// The CIP30 wallets injected by browser extensions in `window.cardano`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cip30Environment;

impl WalletSource for Cip30Environment {
    fn installed_wallets(&self) -> Vec<WalletDescriptor> {
        wallets().iter().map(Wallet::descriptor).collect()
    }
}

#[derive(Clone, PartialEq)]
pub struct Wallet {
    id: String,
    cip30_wallet: ffi::Cip30Wallet,
}

/// attempt to find the wallet by its `window.cardano` key
///
/// This function is equivalent to
///
/// `wallets().into_iter().find(|wallet| wallet.id() == id)`
///
pub fn wallet(id: &str) -> Option<Wallet> {
    let wallets = wallets();

    wallets.into_iter().find(|wallet| wallet.id() == id)
}

/// List the wallets that may be available.
///
/// If the list is empty it means we didn't detect any wallets that we support
/// and support CIP30. However it is possible we are simply missing this wallet
/// and wallets are welcomed to add support.
///
///
/// Alternatively, it is also possible the wallets were not injected yet by the
/// extensions. You should make sure the page is loaded fully before calling this
/// function (or do refresh the value from time to time).
///
pub fn wallets() -> Vec<Wallet> {
    ffi::cip30::WALLETS.with(|wallets| {
        let mut vec = Vec::new();

        // window.cardano may have been injected after the initial lookup
        let fresh_wallets = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("window"))
            .ok()
            .and_then(|win| js_sys::Reflect::get(&win, &JsValue::from_str("cardano")).ok())
            .unwrap_or_else(|| wallets.clone().into());

        if fresh_wallets.is_object() {
            let fresh_wallets_obj: js_sys::Object = fresh_wallets.unchecked_into();
            for entry in js_sys::Object::entries(&fresh_wallets_obj) {
                let entry: js_sys::Array = entry.unchecked_into();
                let (Some(id), element) = (entry.get(0).as_string(), entry.get(1)) else {
                    continue;
                };
                if !looks_like_cip30_wallet(&element) {
                    continue;
                }

                vec.push(Wallet {
                    id,
                    cip30_wallet: ffi::Cip30Wallet::from(element),
                })
            }
        }

        log::debug!("found {} CIP30 wallet(s)", vec.len());
        vec
    })
}

fn looks_like_cip30_wallet(value: &JsValue) -> bool {
    if !value.is_object() {
        return false;
    }

    let has_string_property = |prop: &str| {
        js_sys::Reflect::get(value, &JsValue::from_str(prop))
            .ok()
            .and_then(|v| v.as_string())
            .is_some()
    };

    let has_function_property = |prop: &str| {
        js_sys::Reflect::get(value, &JsValue::from_str(prop))
            .ok()
            .map(|v| v.is_function())
            .unwrap_or(false)
    };

    has_string_property("name")
        && has_string_property("apiVersion")
        && has_string_property("icon")
        && has_function_property("enable")
        && has_function_property("isEnabled")
}

impl Wallet {
    /// get the key of the wallet in `window.cardano`
    pub fn id(&self) -> &str {
        &self.id
    }

    /// get the name of the wallet connector application
    ///
    /// This can be `"lace"` for example.
    pub fn name(&self) -> String {
        self.cip30_wallet.name()
    }

    /// get the version of the wallet connector application
    ///
    /// Can be `"0.1.0"`
    pub fn version(&self) -> String {
        self.cip30_wallet.version()
    }

    /// get the HTML ready icon for this wallet connector application
    ///
    pub fn icon(&self) -> String {
        self.cip30_wallet.icon()
    }

    pub fn descriptor(&self) -> WalletDescriptor {
        WalletDescriptor {
            id: self.id.clone(),
            name: self.name(),
            icon: self.icon(),
        }
    }

    /// Check if the wallet is already connected or not: i.e. if the users have
    /// already approved for the webapp to use connect with the wallet.
    ///
    /// If this returns `true` then calling [`Wallet::enable`] will returns the
    /// [`ConnectedWallet`] without prompting the user.
    ///
    pub async fn enabled(&self) -> Result<bool, APIError> {
        let obj = self
            .cip30_wallet
            .enabled()
            .await
            .map_err(APIError::from_js)?;

        obj.as_bool().ok_or_else(|| {
            APIError::internal(format!("Unexpected returned JSON Object: {obj:?}"))
        })
    }

    /// Returns the [`ConnectedWallet`] after prompting the user to authorise your
    /// webapp. If the application is already authorised calling this function will
    /// return the [`ConnectedWallet`] without prompting the user.
    ///
    pub async fn enable(&self) -> Result<ConnectedWallet, APIError> {
        let cip30_api = self
            .cip30_wallet
            .enable(JsValue::undefined())
            .await
            .map_err(APIError::from_js)?;

        log::info!("CIP30 wallet `{}' enabled", self.id);
        Ok(ConnectedWallet::new(self.clone(), cip30_api))
    }
}
