//! Bindings of the JavaScript wallet library used for headless wallets.
//!
//! The library is handed over as its module namespace object, e.g.:
//!
//! ```js
//! import * as walletLib from "@meshsdk/wallet";
//! ```
//!
//! Which functions the loaded version provides is checked once, in
//! [`HeadlessSdk::from_module`]. The WebAuthn `connect` function was dropped
//! from some versions of the library: it is exposed as the optional
//! [`HeadlessSdk::authenticator`].

use crate::{
    auth::{AuthRequest, AuthResponse, Authenticator},
    cardano::Asset,
    config::NetworkId,
    error::{APIError, Error, js_message},
    ffi::headless::{HeadlessWallet, HeadlessWalletClass},
    wallet_handle::{WalletDeriver, WalletHandle},
};
use async_trait::async_trait;
use std::rc::Rc;
use wasm_bindgen::{JsCast as _, JsValue};
use wasm_bindgen_futures::JsFuture;

const HEADLESS_WALLET_CLASS: &str = "MeshCardanoHeadlessWallet";
const ADDRESS_TYPE: &str = "AddressType";
const CONNECT: &str = "connect";

/// read `name` from `target`, `undefined` and `null` being absent
fn property(target: &JsValue, name: &str) -> Option<JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn set(target: &js_sys::Object, name: &str, value: &JsValue) -> Result<(), Error> {
    js_sys::Reflect::set(target, &JsValue::from_str(name), value)
        .map(|_| ())
        .map_err(|error| Error::js("Reflect.set", error))
}

pub struct HeadlessSdk {
    class: HeadlessWalletClass,
    base_address_type: JsValue,
    provider: JsValue,
    authenticator: Option<Rc<SdkAuthenticator>>,
}

impl HeadlessSdk {
    /// `provider` is used as both the fetcher and the submitter of the
    /// derived wallets.
    pub fn from_module(module: &JsValue, provider: JsValue) -> Result<Self, Error> {
        let class = property(module, HEADLESS_WALLET_CLASS)
            .filter(JsValue::is_function)
            .ok_or(Error::CapabilityUnavailable {
                capability: HEADLESS_WALLET_CLASS,
            })?;

        let base_address_type = property(module, ADDRESS_TYPE)
            .and_then(|address_type| property(&address_type, "Base"))
            .ok_or(Error::CapabilityUnavailable {
                capability: "AddressType.Base",
            })?;

        let authenticator = property(module, CONNECT)
            .and_then(|connect| connect.dyn_into::<js_sys::Function>().ok())
            .map(|connect| Rc::new(SdkAuthenticator { connect }));
        if authenticator.is_none() {
            log::warn!("WebAuthn connect is not available in this version of the wallet library");
        }

        Ok(Self {
            class: class.unchecked_into(),
            base_address_type,
            provider,
            authenticator,
        })
    }

    /// the WebAuthn endpoint, if the loaded library has one
    pub fn authenticator(&self) -> Option<Rc<dyn Authenticator>> {
        self.authenticator
            .clone()
            .map(|authenticator| authenticator as Rc<dyn Authenticator>)
    }

    fn options(
        &self,
        secret_name: &str,
        secret: &JsValue,
        network_id: NetworkId,
    ) -> Result<js_sys::Object, Error> {
        let options = js_sys::Object::new();
        set(&options, secret_name, secret)?;
        set(&options, "networkId", &JsValue::from(u8::from(network_id)))?;
        set(&options, "walletAddressType", &self.base_address_type)?;
        set(&options, "fetcher", &self.provider)?;
        set(&options, "submitter", &self.provider)?;
        Ok(options)
    }
}

#[async_trait(?Send)]
impl WalletDeriver for HeadlessSdk {
    async fn from_mnemonic(
        &self,
        words: &[String],
        network_id: NetworkId,
    ) -> Result<Rc<dyn WalletHandle>, Error> {
        let words: js_sys::Array = words.iter().map(|word| JsValue::from_str(word)).collect();
        let options = self.options("mnemonic", &words, network_id)?;

        let wallet = self
            .class
            .from_mnemonic(&options)
            .await
            .map_err(|error| Error::derivation("fromMnemonic", js_message(&error)))?;

        Ok(Rc::new(HeadlessWalletHandle { wallet }))
    }

    async fn from_root_key(
        &self,
        bech32: &str,
        network_id: NetworkId,
    ) -> Result<Rc<dyn WalletHandle>, Error> {
        let options = self.options("bech32", &JsValue::from_str(bech32), network_id)?;

        let wallet = self
            .class
            .from_bip32_root(&options)
            .await
            .map_err(|error| Error::derivation("fromBip32Root", js_message(&error)))?;

        Ok(Rc::new(HeadlessWalletHandle { wallet }))
    }
}

/// A wallet derived by the JavaScript library.
#[derive(Clone)]
pub struct HeadlessWalletHandle {
    wallet: HeadlessWallet,
}

#[async_trait(?Send)]
impl WalletHandle for HeadlessWalletHandle {
    async fn balance(&self) -> Result<Vec<Asset>, Error> {
        let balance = self
            .wallet
            .balance()
            .await
            .map_err(|error| Error::js("getBalanceMesh", error))?;

        serde_wasm_bindgen::from_value(balance).map_err(|error| {
            APIError::internal(format!("Couldn't decode the balance: {error}")).into()
        })
    }
}

/// The library's `connect({ username, password, serverUrl })` function.
pub struct SdkAuthenticator {
    connect: js_sys::Function,
}

#[async_trait(?Send)]
impl Authenticator for SdkAuthenticator {
    async fn connect(&self, request: &AuthRequest<'_>) -> Result<AuthResponse, Error> {
        let request = serde_wasm_bindgen::to_value(request)
            .map_err(|error| Error::InvalidInput(error.to_string()))?;

        let returned = self
            .connect
            .call1(&JsValue::NULL, &request)
            .map_err(|error| Error::js(CONNECT, error))?;
        let response = JsFuture::from(js_sys::Promise::resolve(&returned))
            .await
            .map_err(|error| Error::js(CONNECT, error))?;

        serde_wasm_bindgen::from_value(response)
            .map_err(|error| Error::Authentication(format!("unexpected response: {error}")))
    }
}
