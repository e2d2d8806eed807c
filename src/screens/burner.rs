use crate::{
    config::{NetworkId, SessionConfig},
    context::WalletContext,
    error::Error,
    storage::{SecretStore, StoredSecret, generate_mnemonic},
    wallet_handle::{WalletDeriver, WalletHandle},
};
use std::{cell::Cell, rc::Rc};

/// name under which burner wallets are published
pub const BURNER_WALLET_NAME: &str = "Burner Wallet";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BurnerState {
    #[default]
    Idle,
    Creating,
    Restoring,
    Done,
}

/// Creates a throw-away wallet, or restores the one created previously on
/// this device.
///
/// The secret of the first wallet created is kept in the [`SecretStore`]
/// and never replaced afterward.
pub struct BurnerScreen {
    context: WalletContext,
    store: Rc<dyn SecretStore>,
    deriver: Rc<dyn WalletDeriver>,
    network_id: NetworkId,
    storage_key: String,
    on_close: Box<dyn Fn()>,
    state: Cell<BurnerState>,
    has_key_in_storage: Cell<bool>,
}

impl BurnerScreen {
    pub fn new(
        context: WalletContext,
        store: Rc<dyn SecretStore>,
        deriver: Rc<dyn WalletDeriver>,
        config: &SessionConfig,
    ) -> Self {
        let has_key_in_storage = match store.get(&config.storage_key) {
            Ok(stored) => stored.is_some_and(|stored| !stored.is_empty()),
            Err(error) => {
                log::warn!("{error}");
                false
            }
        };

        Self {
            context,
            store,
            deriver,
            network_id: config.network_id,
            storage_key: config.storage_key.clone(),
            on_close: Box::new(|| ()),
            state: Cell::new(BurnerState::Idle),
            has_key_in_storage: Cell::new(has_key_in_storage),
        }
    }

    /// called once a wallet was published, to close the dialog
    pub fn on_close(mut self, on_close: impl Fn() + 'static) -> Self {
        self.on_close = Box::new(on_close);
        self
    }

    pub fn state(&self) -> BurnerState {
        self.state.get()
    }

    pub fn loading(&self) -> bool {
        matches!(
            self.state.get(),
            BurnerState::Creating | BurnerState::Restoring
        )
    }

    /// whether a wallet can be restored (the restore action is offered)
    pub fn has_key_in_storage(&self) -> bool {
        self.has_key_in_storage.get()
    }

    /// create a wallet from a fresh 24 words mnemonic
    pub async fn create_wallet(&self) -> Result<(), Error> {
        let _flow = self.context.try_begin_flow()?;

        self.run(BurnerState::Creating, async {
            let words = generate_mnemonic()?;
            self.open_mnemonic(words).await
        })
        .await
    }

    /// restore the wallet of the stored secret, does nothing if there is
    /// none
    pub async fn restore_wallet(&self) -> Result<(), Error> {
        let Some(secret) = self.stored_secret()? else {
            log::debug!("no burner wallet to restore");
            return Ok(());
        };

        let _flow = self.context.try_begin_flow()?;

        self.run(BurnerState::Restoring, async {
            match secret {
                StoredSecret::Mnemonic(words) => self.open_mnemonic(words).await,
                StoredSecret::LegacyRootKey(key) => {
                    let handle = self.deriver.from_root_key(&key, self.network_id).await?;
                    self.publish(handle);
                    Ok(())
                }
            }
        })
        .await
    }

    fn stored_secret(&self) -> Result<Option<StoredSecret>, Error> {
        Ok(self
            .store
            .get(&self.storage_key)?
            .as_deref()
            .and_then(StoredSecret::parse))
    }

    async fn open_mnemonic(&self, words: Vec<String>) -> Result<(), Error> {
        let handle = self.deriver.from_mnemonic(&words, self.network_id).await?;

        if self.stored_secret()?.is_none() {
            let secret = StoredSecret::Mnemonic(words);
            self.store.set(&self.storage_key, &secret.encode())?;
            self.has_key_in_storage.set(true);
        }

        self.publish(handle);
        Ok(())
    }

    fn publish(&self, handle: Rc<dyn WalletHandle>) {
        self.context.set_wallet(handle, BURNER_WALLET_NAME);
    }

    async fn run(
        &self,
        state: BurnerState,
        flow: impl Future<Output = Result<(), Error>>,
    ) -> Result<(), Error> {
        self.state.set(state);

        match flow.await {
            Ok(()) => {
                self.state.set(BurnerState::Done);
                (self.on_close)();
                Ok(())
            }
            Err(error) => {
                self.state.set(BurnerState::Idle);
                Err(error)
            }
        }
    }
}
