use crate::{
    auth::{AuthRequest, Authenticator},
    config::{NetworkId, SessionConfig},
    context::WalletContext,
    error::Error,
    wallet_handle::WalletDeriver,
};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

/// name under which WebAuthn wallets are published
pub const WEBAUTHN_WALLET_NAME: &str = "Use Passkey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WebauthnState {
    #[default]
    Idle,
    Connecting,
    Done,
}

/// Connects a wallet derived from a username and a code through the
/// WebAuthn authentication server.
pub struct WebauthnScreen {
    context: WalletContext,
    deriver: Rc<dyn WalletDeriver>,
    authenticator: Option<Rc<dyn Authenticator>>,
    server_url: Option<String>,
    network_id: NetworkId,
    min_username_length: usize,
    username: RefCell<String>,
    password: RefCell<String>,
    on_close: Box<dyn Fn()>,
    state: Cell<WebauthnState>,
}

impl WebauthnScreen {
    /// `authenticator` is `None` when the loaded wallet library has no
    /// WebAuthn support, connecting will then always fail.
    ///
    /// The authentication server is [`SessionConfig::auth_server_url`].
    pub fn new(
        context: WalletContext,
        deriver: Rc<dyn WalletDeriver>,
        authenticator: Option<Rc<dyn Authenticator>>,
        config: &SessionConfig,
    ) -> Self {
        Self {
            context,
            deriver,
            authenticator,
            server_url: config
                .auth_server_url
                .clone()
                .filter(|url| !url.is_empty()),
            network_id: config.network_id,
            min_username_length: config.min_username_length,
            username: RefCell::new(String::new()),
            password: RefCell::new(String::new()),
            on_close: Box::new(|| ()),
            state: Cell::new(WebauthnState::Idle),
        }
    }

    pub fn on_close(mut self, on_close: impl Fn() + 'static) -> Self {
        self.on_close = Box::new(on_close);
        self
    }

    pub fn set_username(&self, username: &str) {
        *self.username.borrow_mut() = username.to_owned();
    }

    pub fn set_password(&self, password: &str) {
        *self.password.borrow_mut() = password.to_owned();
    }

    pub fn state(&self) -> WebauthnState {
        self.state.get()
    }

    pub fn loading(&self) -> bool {
        self.state.get() == WebauthnState::Connecting
    }

    /// whether the connect action is enabled
    pub fn can_connect(&self) -> bool {
        let username = self.username.borrow();
        !username.is_empty() && username.chars().count() >= self.min_username_length
    }

    pub async fn connect(&self) -> Result<(), Error> {
        if !self.can_connect() {
            return Err(Error::InvalidInput(format!(
                "the username needs at least {} characters",
                self.min_username_length.max(1)
            )));
        }
        let Some(server_url) = self.server_url.as_deref() else {
            return Err(Error::InvalidInput(
                "no authentication server configured".to_owned(),
            ));
        };

        let _flow = self.context.try_begin_flow()?;
        self.state.set(WebauthnState::Connecting);

        match self.authenticate_and_open(server_url).await {
            Ok(()) => {
                self.state.set(WebauthnState::Done);
                (self.on_close)();
                Ok(())
            }
            Err(error) => {
                self.state.set(WebauthnState::Idle);
                Err(error)
            }
        }
    }

    async fn authenticate_and_open(&self, server_url: &str) -> Result<(), Error> {
        let Some(authenticator) = &self.authenticator else {
            log::error!("WebAuthn connect is not available in this version of the wallet library");
            return Err(Error::CapabilityUnavailable {
                capability: "WebAuthn connect",
            });
        };

        let username = self.username.borrow().clone();
        let password = self.password.borrow().clone();
        let request = AuthRequest {
            username: &username,
            password: &password,
            server_url,
        };

        let root_key = authenticator.connect(&request).await?.into_root_key()?;
        let handle = self
            .deriver
            .from_root_key(&root_key, self.network_id)
            .await?;

        self.context.set_wallet(handle, WEBAUTHN_WALLET_NAME);
        Ok(())
    }
}
