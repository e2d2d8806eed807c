//! State holders reading from the connected wallet.
//!
//! A front-end keeps one of these per component and calls its `refresh`
//! method from its effects. Each holder fetches at most once per
//! connection: after a successful fetch, further calls return the cached
//! value until the [`WalletContext`] gets a new wallet.

mod assets;
mod lovelace;
mod wallet_list;

pub use self::{assets::UseAssets, lovelace::UseLovelace, wallet_list::UseWalletList};

use crate::context::{ActiveWallet, WalletContext};

/// remembers which connection was already fetched
#[derive(Debug, Default)]
struct ConnectionLatch {
    fetched: Option<u64>,
}

impl ConnectionLatch {
    /// the connected wallet, if it was not fetched yet
    fn pending(&self, context: &WalletContext) -> Option<ActiveWallet> {
        context
            .connected_wallet()
            .filter(|active| self.fetched != Some(active.generation))
    }

    fn done(&mut self, active: &ActiveWallet) {
        self.fetched = Some(active.generation);
    }
}
