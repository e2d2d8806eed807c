use super::ConnectionLatch;
use crate::{
    cardano::{Quantity, lovelace_of},
    context::WalletContext,
    error::Error,
};

/// Lovelace balance of the connected wallet.
pub struct UseLovelace {
    context: WalletContext,
    latch: ConnectionLatch,
    lovelace: Option<Quantity>,
}

impl UseLovelace {
    pub fn new(context: WalletContext) -> Self {
        Self {
            context,
            latch: ConnectionLatch::default(),
            lovelace: None,
        }
    }

    /// `None` until a balance was fetched
    pub fn lovelace(&self) -> Option<&Quantity> {
        self.lovelace.as_ref()
    }

    /// fetch the balance if the connected wallet was not fetched yet
    ///
    /// A wallet reporting no lovelace entry has a balance of `0`.
    pub async fn refresh(&mut self) -> Result<Option<&Quantity>, Error> {
        if let Some(active) = self.latch.pending(&self.context) {
            log::debug!("fetching lovelace of `{}'", active.name);
            let balance = active.handle.balance().await?;
            self.lovelace = Some(lovelace_of(&balance));
            self.latch.done(&active);
        }

        Ok(self.lovelace.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cardano::{Asset, LOVELACE},
        test_utils::FixedWallet,
    };
    use futures::executor::block_on;

    const UNIT: &str = "7eae28af2208be856f7a119668ae52a49b73725e326dc16579dcc373504154415445";

    #[test]
    fn nothing_without_wallet() {
        let mut hook = UseLovelace::new(WalletContext::new());
        assert_eq!(block_on(hook.refresh()).unwrap(), None);
    }

    #[test]
    fn lovelace_of_connected_wallet() {
        let context = WalletContext::new();
        let wallet = FixedWallet::new(vec![
            Asset::new(UNIT, 1),
            Asset::new(LOVELACE, 5_000_000),
        ]);
        context.set_wallet(wallet.clone(), "test");

        let mut hook = UseLovelace::new(context);
        let lovelace = block_on(hook.refresh()).unwrap().cloned();
        assert_eq!(lovelace.unwrap().as_str(), "5000000");
    }

    #[test]
    fn zero_without_lovelace_entry() {
        let context = WalletContext::new();
        context.set_wallet(FixedWallet::new(vec![Asset::new(UNIT, 1)]), "test");

        let mut hook = UseLovelace::new(context);
        block_on(hook.refresh()).unwrap();
        assert_eq!(hook.lovelace(), Some(&Quantity::zero()));
    }

    #[test]
    fn fetch_once_per_connection() {
        let context = WalletContext::new();
        let wallet = FixedWallet::new(vec![Asset::new(LOVELACE, 1)]);
        context.set_wallet(wallet.clone(), "test");

        let mut hook = UseLovelace::new(context.clone());
        block_on(hook.refresh()).unwrap();
        block_on(hook.refresh()).unwrap();
        assert_eq!(wallet.fetches.get(), 1);

        let other = FixedWallet::new(vec![Asset::new(LOVELACE, 2)]);
        context.set_wallet(other.clone(), "other");
        let lovelace = block_on(hook.refresh()).unwrap().cloned();
        assert_eq!(lovelace.unwrap().as_str(), "2");
        assert_eq!(other.fetches.get(), 1);
    }

    #[test]
    fn failed_fetch_propagates() {
        let context = WalletContext::new();
        let wallet = FixedWallet::failing();
        context.set_wallet(wallet.clone(), "test");

        let mut hook = UseLovelace::new(context);
        assert!(matches!(block_on(hook.refresh()), Err(Error::Js { .. })));
        assert_eq!(hook.lovelace(), None);
    }
}
