use k8s_openapi::serde_json;

pub type Result<T> = core::result::Result<T, Error>;

/// Failures that mean the test environment or the test itself is broken.
///
/// These are never reported as assertion failures. A check that hits one
/// returns it without recording an outcome, so the calling test stops.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("kubernetes api request failed: {0}")]
    Kube(#[from] kube::Error),

    #[error("unable to infer kubernetes configuration: {0}")]
    InferConfig(#[from] kube::config::InferConfigError),

    #[error("unable to load kubeconfig: {0}")]
    Kubeconfig(#[from] kube::config::KubeconfigError),

    #[error("invalid annotation pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The conditions list has no entry of the requested type
    #[error("no condition of type '{condition_type}' found")]
    ConditionNotFound { condition_type: String },

    #[error("unreadable creation timestamp: {0}")]
    InvalidTimestamp(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
