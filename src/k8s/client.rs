// Client creation with custom user-agent support for kube 2.x
use crate::error::Result;
use hyper::http::{HeaderName, HeaderValue};
use kube::config::KubeConfigOptions;
use kube::{Client, Config};
use tracing::{debug, warn};

use super::USER_AGENT;

/// Environment variable that overrides the configured user agent
pub const USER_AGENT_ENV: &str = "KUBEASSERT_USER_AGENT";

/// How to reach the cluster under test
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Kubeconfig context to use; `None` infers from the environment
    /// (in-cluster config, then the current kubeconfig context)
    pub context: Option<String>,
    /// User agent sent with every request; defaults to [`USER_AGENT`]
    pub user_agent: Option<String>,
}

impl ClientOptions {
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Create a new k8s client to interact with the cluster under test
///
/// # Errors
///
/// Will return `Err` if no kubernetes configuration can be loaded or the
/// client cannot be built from it
pub async fn new(options: &ClientOptions) -> Result<Client> {
    let mut config = match &options.context {
        Some(context) => {
            debug!("loading kubeconfig context '{}'", context);
            Config::from_kubeconfig(&KubeConfigOptions {
                context: Some(context.clone()),
                ..KubeConfigOptions::default()
            })
            .await?
        }
        None => {
            debug!("inferring kubernetes configuration");
            Config::infer().await?
        }
    };

    let user_agent = resolve_user_agent(
        std::env::var(USER_AGENT_ENV).ok(),
        options.user_agent.as_deref(),
    );
    add_user_agent_header(&mut config, &user_agent);

    Ok(Client::try_from(config)?)
}

/// Environment override first, then the configured value, then the default
pub(crate) fn resolve_user_agent(from_env: Option<String>, configured: Option<&str>) -> String {
    from_env
        .filter(|value| !value.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| USER_AGENT.to_string())
}

/// Append a user-agent header; invalid values are skipped with a warning
pub(crate) fn add_user_agent_header(config: &mut Config, user_agent: &str) {
    match HeaderValue::from_str(user_agent) {
        Ok(value) => config
            .headers
            .push((HeaderName::from_static("user-agent"), value)),
        Err(e) => warn!("ignoring invalid user agent '{}': {}", user_agent, e),
    }
}
