pub mod cip30;
pub mod cip30_api;
pub mod headless;

pub use self::{cip30::Cip30Wallet, cip30_api::Cip30Api, headless::HeadlessWallet};
