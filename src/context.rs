//! The connected wallet of the page.
//!
//! A [`WalletContext`] is created once when the application mounts and is
//! cloned (it is reference counted) into every screen and hook that needs
//! it. Only one wallet is active at a time: [`WalletContext::set_wallet`]
//! replaces the handle and its name in a single step, the last call wins.

use crate::{error::Error, wallet_handle::WalletHandle};
use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

#[derive(Clone)]
pub struct ActiveWallet {
    pub handle: Rc<dyn WalletHandle>,
    pub name: String,
    /// increases on every [`WalletContext::set_wallet`]
    pub generation: u64,
}

impl fmt::Debug for ActiveWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveWallet")
            .field("name", &self.name)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
struct Inner {
    active: RefCell<Option<ActiveWallet>>,
    generation: Cell<u64>,
    flow_in_progress: Cell<bool>,
}

#[derive(Clone, Default)]
pub struct WalletContext {
    inner: Rc<Inner>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// make `handle` the connected wallet, replacing any previous one
    pub fn set_wallet(&self, handle: Rc<dyn WalletHandle>, name: impl Into<String>) {
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);

        let name = name.into();
        log::info!("wallet `{name}' connected");

        *self.inner.active.borrow_mut() = Some(ActiveWallet {
            handle,
            name,
            generation,
        });
    }

    /// disconnect the current wallet, if any
    pub fn clear(&self) {
        if let Some(previous) = self.inner.active.borrow_mut().take() {
            log::info!("wallet `{}' disconnected", previous.name);
        }
    }

    pub fn has_connected_wallet(&self) -> bool {
        self.inner.active.borrow().is_some()
    }

    pub fn connected_wallet(&self) -> Option<ActiveWallet> {
        self.inner.active.borrow().clone()
    }

    pub fn wallet_name(&self) -> Option<String> {
        self.inner
            .active
            .borrow()
            .as_ref()
            .map(|active| active.name.clone())
    }

    /// reserve the context for a wallet creation flow
    ///
    /// Fails with [`Error::FlowInProgress`] while another [`FlowGuard`] is
    /// alive. The reservation ends when the guard is dropped.
    pub fn try_begin_flow(&self) -> Result<FlowGuard, Error> {
        if self.inner.flow_in_progress.replace(true) {
            return Err(Error::FlowInProgress);
        }

        Ok(FlowGuard {
            inner: Rc::clone(&self.inner),
        })
    }
}

pub struct FlowGuard {
    inner: Rc<Inner>,
}

impl Drop for FlowGuard {
    fn drop(&mut self) {
        self.inner.flow_in_progress.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FixedWallet;

    #[test]
    fn empty_context() {
        let context = WalletContext::new();
        assert!(!context.has_connected_wallet());
        assert!(context.connected_wallet().is_none());
        assert!(context.wallet_name().is_none());
    }

    #[test]
    fn set_and_clear() {
        let context = WalletContext::new();
        context.set_wallet(FixedWallet::new(Vec::new()), "Burner Wallet");

        assert!(context.has_connected_wallet());
        assert_eq!(context.wallet_name().as_deref(), Some("Burner Wallet"));

        context.clear();
        assert!(!context.has_connected_wallet());
        assert!(context.wallet_name().is_none());
    }

    #[test]
    fn last_writer_wins() {
        let context = WalletContext::new();
        let shared = context.clone();

        context.set_wallet(FixedWallet::new(Vec::new()), "first");
        let first = context.connected_wallet().unwrap().generation;
        shared.set_wallet(FixedWallet::new(Vec::new()), "second");

        let active = context.connected_wallet().unwrap();
        assert_eq!(active.name, "second");
        assert!(active.generation > first);
    }

    #[test]
    fn one_flow_at_a_time() {
        let context = WalletContext::new();

        let guard = context.try_begin_flow().unwrap();
        assert!(matches!(
            context.try_begin_flow(),
            Err(Error::FlowInProgress)
        ));

        drop(guard);
        assert!(context.try_begin_flow().is_ok());
    }
}
