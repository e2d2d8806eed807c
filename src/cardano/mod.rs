//! Balance entries and native asset decoding.
//!
//! Wallets report their balance as a list of `(unit, quantity)` pairs. The
//! unit is either [`LOVELACE`] or the hex encoded policy id (always
//! [`POLICY_ID_LENGTH`] characters) directly followed by the hex encoded
//! asset name.

use crate::error::Error;
use bech32::{Bech32, Hrp};
use blake2::{Blake2b, Digest, digest::consts::U20};
pub use pallas_primitives::conway::Value;
use std::fmt;

/// unit of the native currency in a balance list
pub const LOVELACE: &str = "lovelace";

/// number of hexadecimal characters of a policy id (28 bytes)
pub const POLICY_ID_LENGTH: usize = 56;

const FINGERPRINT_HRP: Hrp = Hrp::parse_unchecked("asset");

/// Arbitrary precision, non negative, decimal quantity.
///
/// Token quantities may exceed what fits in a `u64` once summed by a
/// wallet, so they are kept as their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Quantity(String);

impl Quantity {
    pub fn zero() -> Self {
        Self("0".to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.bytes().all(|b| b == b'0')
    }
}

impl TryFrom<String> for Quantity {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidQuantity(value));
        }
        Ok(Self(value))
    }
}

impl std::str::FromStr for Quantity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<Quantity> for String {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of a wallet balance.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Asset {
    pub unit: String,
    pub quantity: Quantity,
}

impl Asset {
    pub fn new(unit: impl Into<String>, quantity: u64) -> Self {
        Self {
            unit: unit.into(),
            quantity: Quantity::from(quantity),
        }
    }

    pub fn is_lovelace(&self) -> bool {
        self.unit == LOVELACE
    }
}

/// A native asset with its unit decoded.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetExtended {
    pub unit: String,
    pub policy_id: String,
    pub asset_name: String,
    pub fingerprint: String,
    pub quantity: Quantity,
}

impl AssetExtended {
    pub fn from_asset(asset: &Asset) -> Result<Self, Error> {
        let (policy_id, asset_name) = split_unit(&asset.unit)?;
        let fingerprint = fingerprint(policy_id, asset_name)?;

        Ok(Self {
            unit: asset.unit.clone(),
            policy_id: policy_id.to_owned(),
            asset_name: asset_name.to_owned(),
            fingerprint,
            quantity: asset.quantity.clone(),
        })
    }
}

/// split a native asset unit into its policy id and asset name
///
/// Concatenating the two returned parts gives back `unit`.
pub fn split_unit(unit: &str) -> Result<(&str, &str), Error> {
    if unit == LOVELACE {
        return Err(Error::InvalidUnit {
            unit: unit.to_owned(),
            reason: "lovelace has no policy id".to_owned(),
        });
    }

    match (unit.get(..POLICY_ID_LENGTH), unit.get(POLICY_ID_LENGTH..)) {
        (Some(policy_id), Some(asset_name)) => Ok((policy_id, asset_name)),
        _ => Err(Error::InvalidUnit {
            unit: unit.to_owned(),
            reason: format!("expecting at least {POLICY_ID_LENGTH} characters of policy id"),
        }),
    }
}

/// compute the [CIP-14] fingerprint of a native asset
///
/// [CIP-14]: https://cips.cardano.org/cip/CIP-0014
pub fn fingerprint(policy_id: &str, asset_name: &str) -> Result<String, Error> {
    let invalid = |reason: String| Error::InvalidUnit {
        unit: format!("{policy_id}{asset_name}"),
        reason,
    };

    let mut bytes = hex::decode(policy_id).map_err(|error| invalid(format!("policy id: {error}")))?;
    bytes.extend(hex::decode(asset_name).map_err(|error| invalid(format!("asset name: {error}")))?);

    let mut hasher = Blake2b::<U20>::new();
    hasher.update(&bytes);
    let hash = hasher.finalize();

    bech32::encode::<Bech32>(FINGERPRINT_HRP, &hash).map_err(|error| invalid(error.to_string()))
}

/// the lovelace quantity of a balance, `0` if the wallet reported none
pub fn lovelace_of(balance: &[Asset]) -> Quantity {
    balance
        .iter()
        .find(|asset| asset.is_lovelace())
        .map(|asset| asset.quantity.clone())
        .unwrap_or_else(Quantity::zero)
}

/// decode every native asset of a balance, keeping the balance order
pub fn assets_of(balance: &[Asset]) -> Result<Vec<AssetExtended>, Error> {
    balance
        .iter()
        .filter(|asset| !asset.is_lovelace())
        .map(AssetExtended::from_asset)
        .collect()
}

/// flatten a CBOR [`Value`] (as returned by CIP30 `getBalance`) into balance
/// entries
pub fn balance_from_value(value: &Value) -> Vec<Asset> {
    match value {
        Value::Coin(coin) => vec![Asset::new(LOVELACE, *coin)],
        Value::Multiasset(coin, multiasset) => {
            let mut balance = vec![Asset::new(LOVELACE, *coin)];

            for (policy_id, assets) in multiasset.iter() {
                for (asset_name, amount) in assets.iter() {
                    let unit = format!("{policy_id}{}", hex::encode(asset_name.as_slice()));
                    balance.push(Asset::new(unit, u64::from(*amount)));
                }
            }

            balance
        }
    }
}
