use std::time::Duration;


pub mod reqwest;

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Settings for the bundled transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Verify server certificates.
    pub ssl_check: bool,
    /// Upper bound for a whole request. A context deadline that comes
    /// sooner takes precedence.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            ssl_check: true,
            timeout: None,
            user_agent: String::from(DEFAULT_USER_AGENT),
        }
    }
}

impl ClientConfig {
    pub fn new(ssl_check: bool) -> Self {
        Self {
            ssl_check,
            ..Self::default()
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
