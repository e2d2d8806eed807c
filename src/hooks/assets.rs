use super::ConnectionLatch;
use crate::{
    cardano::{AssetExtended, assets_of},
    context::WalletContext,
    error::Error,
};

/// Native assets held by the connected wallet, in the order the wallet
/// reports them.
pub struct UseAssets {
    context: WalletContext,
    latch: ConnectionLatch,
    assets: Option<Vec<AssetExtended>>,
}

impl UseAssets {
    pub fn new(context: WalletContext) -> Self {
        Self {
            context,
            latch: ConnectionLatch::default(),
            assets: None,
        }
    }

    pub fn assets(&self) -> Option<&[AssetExtended]> {
        self.assets.as_deref()
    }

    pub async fn refresh(&mut self) -> Result<Option<&[AssetExtended]>, Error> {
        if let Some(active) = self.latch.pending(&self.context) {
            log::debug!("fetching assets of `{}'", active.name);
            let balance = active.handle.balance().await?;
            self.assets = Some(assets_of(&balance)?);
            self.latch.done(&active);
        }

        Ok(self.assets.as_deref())
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

    const POLICY: &str = "7eae28af2208be856f7a119668ae52a49b73725e326dc16579dcc373";

    #[test]
    fn assets_of_connected_wallet() {
        let context = WalletContext::new();
        context.set_wallet(
            FixedWallet::new(vec![
                Asset::new(LOVELACE, 10),
                Asset::new(format!("{POLICY}504154415445"), 3),
                Asset::new(POLICY, 1),
            ]),
            "test",
        );

        let mut hook = UseAssets::new(context);
        let assets = block_on(hook.refresh()).unwrap().unwrap().to_vec();

        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].policy_id, POLICY);
        assert_eq!(assets[0].asset_name, "504154415445");
        assert_eq!(
            assets[0].fingerprint,
            "asset13n25uv0yaf5kus35fm2k86cqy60z58d9xmde92"
        );
        assert_eq!(assets[0].quantity.as_str(), "3");
        assert_eq!(assets[1].asset_name, "");
        assert_eq!(
            assets[1].fingerprint,
            "asset1rjklcrnsdzqp65wjgrg55sy9723kw09mlgvlc3"
        );
    }

    #[test]
    fn second_refresh_does_not_fetch() {
        let context = WalletContext::new();
        let wallet = FixedWallet::new(vec![Asset::new(POLICY, 1)]);
        context.set_wallet(wallet.clone(), "test");

        let mut hook = UseAssets::new(context);
        block_on(hook.refresh()).unwrap();
        block_on(hook.refresh()).unwrap();

        assert_eq!(wallet.fetches.get(), 1);
    }

    #[test]
    fn no_assets_before_connection() {
        let mut hook = UseAssets::new(WalletContext::new());
        assert!(block_on(hook.refresh()).unwrap().is_none());
        assert!(hook.assets().is_none());
    }

    #[test]
    fn invalid_unit_is_an_error() {
        let context = WalletContext::new();
        context.set_wallet(FixedWallet::new(vec![Asset::new("abc", 1)]), "test");

        let mut hook = UseAssets::new(context);
        assert!(matches!(
            block_on(hook.refresh()),
            Err(Error::InvalidUnit { .. })
        ));
    }
}
