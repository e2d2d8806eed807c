/*!

# Cardano wallet session for web applications

This library is meant to be used for web applications that let their users
connect a Cardano wallet. It covers the three ways of getting one:

- Connect a CIP30 browser extension wallet
- Create (or restore) a "burner" wallet kept in the browser's local storage
- Derive a wallet from a username and a code through a WebAuthn server

and reading the basic state of the connected wallet (lovelace balance and
native assets).

Key derivation and chain access are done by the JavaScript wallet library,
see [`sdk::HeadlessSdk`].

## Usage

Create one [`WalletContext`] when the application mounts and share it with
the screens and hooks:

```no_run
use cardano_wallet_session::{WalletContext, hooks::UseLovelace, wallets};

# async fn test() -> anyhow::Result<()> {
let context = WalletContext::new();

let wallet = wallets().pop().unwrap();
let connected_wallet = wallet.enable().await?;
context.set_wallet(std::rc::Rc::new(connected_wallet), wallet.name());

let mut lovelace = UseLovelace::new(context.clone());
if let Some(lovelace) = lovelace.refresh().await? {
    println!("balance: {lovelace} lovelace");
}
# Ok(()) }
```

Burner wallets need a [`storage::SecretStore`] and a
[`WalletDeriver`]:

```no_run
use cardano_wallet_session::{
    SessionConfig, WalletContext, screens::BurnerScreen, sdk::HeadlessSdk,
    storage::LocalStorage,
};
use std::rc::Rc;

# async fn test(module: wasm_bindgen::JsValue, provider: wasm_bindgen::JsValue) -> anyhow::Result<()> {
let context = WalletContext::new();
let sdk = Rc::new(HeadlessSdk::from_module(&module, provider)?);
let screen = BurnerScreen::new(
    context.clone(),
    Rc::new(LocalStorage::new()?),
    sdk,
    &SessionConfig::default(),
);

if screen.has_key_in_storage() {
    screen.restore_wallet().await?;
} else {
    screen.create_wallet().await?;
}
# Ok(()) }
```

*/

pub mod auth;
pub mod cardano;
pub mod config;
mod connected_wallet;
pub mod context;
pub mod error;
pub mod ffi;
pub mod hooks;
pub mod screens;
pub mod sdk;
pub mod storage;
mod wallet;
mod wallet_handle;

#[cfg(test)]
mod test_utils;

pub use self::{
    cardano::{Asset, AssetExtended, Quantity},
    config::{NetworkId, SessionConfig},
    connected_wallet::ConnectedWallet,
    context::WalletContext,
    error::Error,
    wallet::{Cip30Environment, Wallet, WalletDescriptor, WalletSource, wallet, wallets},
    wallet_handle::{WalletDeriver, WalletHandle},
};

/// send `log` records to the browser console and report panics there
///
/// To be called once, when the application starts.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(level));
}
