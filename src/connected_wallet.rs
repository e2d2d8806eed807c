use crate::{
    Wallet,
    cardano::{self, Asset, Value},
    config::NetworkId,
    error::{APIError, Error},
    ffi::cip30_api,
    wallet_handle::WalletHandle,
};
use async_trait::async_trait;

/// A CIP30 wallet the user authorised the application to use.
#[derive(Clone, PartialEq)]
pub struct ConnectedWallet {
    wallet: Wallet,
    cip30_api: cip30_api::Cip30Api,
}

impl ConnectedWallet {
    pub(crate) fn new(wallet: Wallet, cip30_api: cip30_api::Cip30Api) -> Self {
        Self { wallet, cip30_api }
    }

    /// return the name of the wallet connector application
    pub fn name(&self) -> String {
        self.wallet.name()
    }

    /// returns the HTML ready Icon for this wallet connector application
    pub fn icon(&self) -> String {
        self.wallet.icon()
    }

    /// re-enable the connection to the wallet
    ///
    /// This is particularly useful is we received an [`APIErrorCode::AccountChange`]
    ///
    /// [`APIErrorCode::AccountChange`]: crate::error::APIErrorCode::AccountChange
    ///
    pub async fn enable(&mut self) -> Result<(), APIError> {
        self.cip30_api = self.wallet.enable().await?.cip30_api;
        Ok(())
    }

    /// returns the network identifier. It allows us to at least detect if we are
    /// using a testing environment or a production environment. We won't have
    /// much information about which specific network identifier we are connected
    /// to.
    pub async fn network_id(&self) -> Result<NetworkId, APIError> {
        let id = self
            .cip30_api
            .network_id()
            .await
            .map_err(APIError::from_js)?;

        match id.as_f64() {
            Some(number) => network_id_from_number(number),
            None => Err(APIError::internal(format!("Unknown network id: {id:?}"))),
        }
    }

    /// get the [`Value`] held by this wallet
    pub async fn value(&self) -> Result<Value, APIError> {
        let balance = self.cip30_api.balance().await.map_err(APIError::from_js)?;

        let Some(balance_hex) = balance.as_string() else {
            return Err(APIError::internal(format!("Unknown balance: {balance:?}")));
        };

        decode_value(&balance_hex)
    }
}

/// network ids are a single byte, anything else is reported as an error
fn network_id_from_number(number: f64) -> Result<NetworkId, APIError> {
    if number.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&number) {
        Ok(NetworkId::from(number as u8))
    } else {
        Err(APIError::internal(format!("Unknown network id: {number}")))
    }
}

fn decode_value(balance_hex: &str) -> Result<Value, APIError> {
    let balance_cbor = hex::decode(balance_hex).map_err(|error| {
        APIError::internal(format!("Invalid balance `{balance_hex:?}': {error}"))
    })?;

    pallas_codec::minicbor::decode(&balance_cbor).map_err(|error| {
        APIError::internal(format!("Invalid balance `{balance_cbor:?}': {error}"))
    })
}

#[async_trait(?Send)]
impl WalletHandle for ConnectedWallet {
    async fn balance(&self) -> Result<Vec<Asset>, Error> {
        let value = self.value().await?;
        Ok(cardano::balance_from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cardano::LOVELACE, error::APIErrorCode};

    #[test]
    fn decode_coin_balance() {
        let value = decode_value("1a001e8480").unwrap();
        assert_eq!(
            cardano::balance_from_value(&value),
            vec![Asset::new(LOVELACE, 2_000_000)]
        );
    }

    #[test]
    fn network_id_of_number() {
        assert_eq!(network_id_from_number(0.0).unwrap(), NetworkId::PreProduction);
        assert_eq!(network_id_from_number(1.0).unwrap(), NetworkId::Mainnet);
        assert_eq!(network_id_from_number(255.0).unwrap(), NetworkId::Unknown(255));

        for number in [256.0, -1.0, 1.5, f64::NAN] {
            let error = network_id_from_number(number).unwrap_err();
            assert_eq!(error.code, APIErrorCode::InternalError);
        }
    }

    #[test]
    fn decode_invalid_balance() {
        let error = decode_value("zz").unwrap_err();
        assert_eq!(error.code, APIErrorCode::InternalError);

        let error = decode_value("ff").unwrap_err();
        assert_eq!(error.code, APIErrorCode::InternalError);
    }
}
