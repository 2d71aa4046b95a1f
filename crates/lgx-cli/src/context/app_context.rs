use anyhow::Context;
use lgx_auth::Session;
use lgx_client::ApiClient;
use lgx_config::LogixConfig;

/// Shared resources for one command invocation.
pub struct AppContext {
    pub config: LogixConfig,
    pub client: ApiClient,
    pub session: Session,
}

impl AppContext {
    /// Bootstrap the session from the stored token and build the API client.
    ///
    /// Every non-auth command needs a live session.
    pub fn init(config: LogixConfig) -> anyhow::Result<Self> {
        let session = lgx_auth::require_session()?;
        tracing::debug!(user_id = %session.identity.user_id, "session restored");
        let client = ApiClient::new(&config.api, Some(session.token.clone()))
            .context("failed to build API client")?;
        Ok(Self {
            config,
            client,
            session,
        })
    }

    /// Hub used when a command does not name one: config default, then the
    /// operator's own hub.
    #[must_use]
    pub fn default_hub(&self) -> Option<&str> {
        self.config
            .general
            .default_hub()
            .or(self.session.identity.hub.as_deref())
    }

    #[must_use]
    pub const fn default_limit(&self) -> u32 {
        self.config.general.default_limit
    }
}
