//! In memory collaborators for the unit tests.

use crate::{
    auth::{AuthRequest, AuthResponse, Authenticator},
    cardano::{Asset, LOVELACE},
    config::NetworkId,
    error::Error,
    wallet_handle::{WalletDeriver, WalletHandle},
};
use async_trait::async_trait;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

/// wallet handle returning a fixed balance, counting the fetches
#[derive(Default)]
pub struct FixedWallet {
    pub balance: Vec<Asset>,
    pub fetches: Cell<usize>,
    pub fail: bool,
}

impl FixedWallet {
    pub fn new(balance: Vec<Asset>) -> Rc<Self> {
        Rc::new(Self {
            balance,
            ..Self::default()
        })
    }

    pub fn failing() -> Rc<Self> {
        Rc::new(Self {
            fail: true,
            ..Self::default()
        })
    }
}

#[async_trait(?Send)]
impl WalletHandle for FixedWallet {
    async fn balance(&self) -> Result<Vec<Asset>, Error> {
        self.fetches.set(self.fetches.get() + 1);
        if self.fail {
            return Err(Error::Js {
                call: "getBalanceMesh",
                info: "network unreachable".to_owned(),
            });
        }
        Ok(self.balance.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Derivation {
    Mnemonic(Vec<String>, NetworkId),
    RootKey(String, NetworkId),
}

/// records every derivation and returns empty wallets
#[derive(Default)]
pub struct RecordingDeriver {
    pub derivations: RefCell<Vec<Derivation>>,
    pub fail: bool,
}

impl RecordingDeriver {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn failing() -> Rc<Self> {
        Rc::new(Self {
            fail: true,
            ..Self::default()
        })
    }

    fn record(
        &self,
        call: &'static str,
        derivation: Derivation,
    ) -> Result<Rc<dyn WalletHandle>, Error> {
        self.derivations.borrow_mut().push(derivation);
        if self.fail {
            return Err(Error::derivation(call, "invalid secret"));
        }
        Ok(FixedWallet::new(vec![Asset::new(LOVELACE, 0)]))
    }
}

#[async_trait(?Send)]
impl WalletDeriver for RecordingDeriver {
    async fn from_mnemonic(
        &self,
        words: &[String],
        network_id: NetworkId,
    ) -> Result<Rc<dyn WalletHandle>, Error> {
        self.record("fromMnemonic", Derivation::Mnemonic(words.to_vec(), network_id))
    }

    async fn from_root_key(
        &self,
        bech32: &str,
        network_id: NetworkId,
    ) -> Result<Rc<dyn WalletHandle>, Error> {
        self.record("fromBip32Root", Derivation::RootKey(bech32.to_owned(), network_id))
    }
}

/// authentication endpoint answering with a canned response
pub struct CannedAuthenticator {
    pub response: AuthResponse,
    pub requests: RefCell<Vec<(String, String, String)>>,
}

impl CannedAuthenticator {
    pub fn new(response: AuthResponse) -> Rc<Self> {
        Rc::new(Self {
            response,
            requests: RefCell::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl Authenticator for CannedAuthenticator {
    async fn connect(&self, request: &AuthRequest<'_>) -> Result<AuthResponse, Error> {
        self.requests.borrow_mut().push((
            request.username.to_owned(),
            request.password.to_owned(),
            request.server_url.to_owned(),
        ));
        Ok(self.response.clone())
    }
}
