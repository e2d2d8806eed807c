use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// The headless wallet class exported by the wallet library. Its static
    /// constructors are bound as methods of the class object.
    #[derive(Clone)]
    pub type HeadlessWalletClass;

    /// Derives a wallet from a list of mnemonic words.
    #[wasm_bindgen(method, catch, js_name = "fromMnemonic")]
    pub async fn from_mnemonic(
        this: &HeadlessWalletClass,
        options: &js_sys::Object,
    ) -> Result<HeadlessWallet, JsValue>;

    /// Derives a wallet from a bech32 encoded BIP32 root private key.
    #[wasm_bindgen(method, catch, js_name = "fromBip32Root")]
    pub async fn from_bip32_root(
        this: &HeadlessWalletClass,
        options: &js_sys::Object,
    ) -> Result<HeadlessWallet, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    pub type HeadlessWallet;

    /// Returns the balance as a list of `{ unit, quantity }` objects, the
    /// quantities being decimal strings.
    #[wasm_bindgen(method, catch, js_name = "getBalanceMesh")]
    pub async fn balance(this: &HeadlessWallet) -> Result<JsValue, JsValue>;
}
