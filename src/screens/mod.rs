//! Wallet creation flows.
//!
//! Each screen holds the state a front-end renders (a `loading` flag and
//! the form inputs) and publishes the wallet it produces into the shared
//! [`WalletContext`](crate::WalletContext). Screens take `&self` so the
//! host can keep reading their state while a flow is running.

mod burner;
mod webauthn;

pub use self::{
    burner::{BURNER_WALLET_NAME, BurnerScreen, BurnerState},
    webauthn::{WEBAUTHN_WALLET_NAME, WebauthnScreen, WebauthnState},
};
