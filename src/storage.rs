//! Local persistence of the burner wallet secret.

use crate::error::Error;
use std::{cell::RefCell, collections::HashMap};

/// Key/value storage of the page (`window.localStorage` in browsers).
pub trait SecretStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
}

/// [`SecretStore`] backed by `window.localStorage`.
#[derive(Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn new() -> Result<Self, Error> {
        let window =
            web_sys::window().ok_or_else(|| Error::Storage("No window object".to_owned()))?;
        let storage = window
            .local_storage()
            .map_err(|error| Error::Storage(format!("localStorage is not accessible: {error:?}")))?
            .ok_or_else(|| Error::Storage("localStorage is not available".to_owned()))?;

        Ok(Self { storage })
    }
}

impl SecretStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        self.storage
            .get_item(key)
            .map_err(|error| Error::Storage(format!("Couldn't read `{key}': {error:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.storage
            .set_item(key, value)
            .map_err(|error| Error::Storage(format!("Couldn't write `{key}': {error:?}")))
    }
}

/// In memory [`SecretStore`], nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SecretStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// The secret a burner wallet is restored from.
///
/// Two encodings were written over time under the same storage key: the
/// current space separated mnemonic, and an older single bech32 root key.
/// They are told apart by the presence of a space.
#[derive(Clone, PartialEq, Eq)]
pub enum StoredSecret {
    Mnemonic(Vec<String>),
    LegacyRootKey(String),
}

impl StoredSecret {
    /// `None` for an empty value
    pub fn parse(stored: &str) -> Option<Self> {
        if stored.is_empty() {
            None
        } else if stored.contains(' ') {
            Some(Self::Mnemonic(
                stored.split(' ').map(str::to_owned).collect(),
            ))
        } else {
            Some(Self::LegacyRootKey(stored.to_owned()))
        }
    }

    pub fn encode(&self) -> String {
        match self {
            Self::Mnemonic(words) => words.join(" "),
            Self::LegacyRootKey(key) => key.clone(),
        }
    }
}

// never print the secret itself
impl std::fmt::Debug for StoredSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mnemonic(words) => write!(f, "Mnemonic({} words)", words.len()),
            Self::LegacyRootKey(_) => f.write_str("LegacyRootKey(..)"),
        }
    }
}

/// generate a fresh 24 words (256 bits of entropy) english mnemonic
pub fn generate_mnemonic() -> Result<Vec<String>, Error> {
    let mut entropy = [0u8; 32];
    getrandom::getrandom(&mut entropy).map_err(|error| Error::Mnemonic(error.to_string()))?;

    let mnemonic =
        bip39::Mnemonic::from_entropy(&entropy).map_err(|error| Error::Mnemonic(error.to_string()))?;

    Ok(mnemonic
        .to_string()
        .split(' ')
        .map(str::to_owned)
        .collect())
}
