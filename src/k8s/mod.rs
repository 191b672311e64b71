pub mod client;
pub mod cluster;

/// Default user agent for `kubeassert` - automatically uses the package version
///
/// Can be overridden per client through [`client::ClientOptions::user_agent`]
/// or globally via the `KUBEASSERT_USER_AGENT` environment variable.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
