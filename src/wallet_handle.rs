use crate::{cardano::Asset, config::NetworkId, error::Error};
use async_trait::async_trait;
use std::rc::Rc;

/// A wallet the application is connected to.
///
/// Handles are created by enabling a CIP30 extension
/// ([`Wallet::enable`](crate::Wallet::enable)) or by a [`WalletDeriver`].
/// They are never mutated once created: a reconnection produces a new
/// handle.
#[async_trait(?Send)]
pub trait WalletHandle {
    /// the full balance of the wallet, lovelace included
    async fn balance(&self) -> Result<Vec<Asset>, Error>;
}

/// Creates headless wallets from secret material.
///
/// The derivation itself (keys, Base addresses) is done by the wallet
/// library, see [`HeadlessSdk`](crate::sdk::HeadlessSdk).
#[async_trait(?Send)]
pub trait WalletDeriver {
    async fn from_mnemonic(
        &self,
        words: &[String],
        network_id: NetworkId,
    ) -> Result<Rc<dyn WalletHandle>, Error>;

    /// derive from a bech32 encoded BIP32 root private key (`xprv1...`)
    async fn from_root_key(
        &self,
        bech32: &str,
        network_id: NetworkId,
    ) -> Result<Rc<dyn WalletHandle>, Error>;
}
