use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone, PartialEq)]
    pub type Cip30Api;

    /// Returns the network id of the currently connected account.
    /// 0 is testnet and 1 is mainnet but other networks can possibly be
    /// returned by wallets. Those other network ID values are not
    /// governed by this document. This result will stay the same unless
    /// the connected account has changed
    #[wasm_bindgen(method, catch, js_name = "getNetworkId")]
    pub async fn network_id(this: &Cip30Api) -> Result<JsValue, JsValue>;

    /// Returns the total balance available of the wallet. This is the same as
    /// summing the results of api.getUtxos(), but it is both useful to dApps
    /// and likely already maintained by the implementing wallet in a more
    /// efficient manner so it has been included in the API as well.
    ///
    /// Hexadecimal string of the cbor encoded Value
    #[wasm_bindgen(method, catch, js_name = "getBalance")]
    pub async fn balance(this: &Cip30Api) -> Result<JsValue, JsValue>;
}
