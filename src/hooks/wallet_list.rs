use crate::wallet::{WalletDescriptor, WalletSource};

/// Snapshot of the wallets installed in the page.
///
/// The list is read once, on the first activation, and is not updated
/// afterward.
pub struct UseWalletList<S> {
    source: S,
    wallets: Option<Vec<WalletDescriptor>>,
}

impl<S: WalletSource> UseWalletList<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            wallets: None,
        }
    }

    /// empty until activated
    pub fn wallets(&self) -> &[WalletDescriptor] {
        self.wallets.as_deref().unwrap_or_default()
    }

    pub async fn activate(&mut self) -> &[WalletDescriptor] {
        self.activate_with(|| async {}).await
    }

    /// like [`activate`](Self::activate), awaiting `inject` first
    ///
    /// `inject` typically registers a bridge wallet into `window.cardano`.
    /// It only runs on the first activation.
    pub async fn activate_with<F, Fut>(&mut self, inject: F) -> &[WalletDescriptor]
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.wallets.is_none() {
            inject().await;
            self.wallets = Some(self.source.installed_wallets());
        }

        self.wallets()
    }
}
