//! Assertion helpers for integration tests that verify the state of a
//! Kubernetes cluster.
//!
//! Every check reports exactly one outcome to a [`Reporter`]. A mismatch is
//! recorded as a failure and the check returns `Ok(())`. A broken environment
//! (an API call that fails, an invalid pattern, a missing condition) comes
//! back as an [`Error`] instead and nothing is reported.
//!
//! ```no_run
//! use kubeassert::checks::{deployments, namespaces};
//! use kubeassert::{KubeCluster, TestCase};
//!
//! # async fn run() -> kubeassert::Result<()> {
//! let cluster = KubeCluster::try_default().await?;
//! let t = TestCase::new("jenkins");
//!
//! namespaces::namespace_exists(&t, &cluster, "jenkins").await?;
//! deployments::expected_deployment_count(&t, &cluster, "jenkins", 1).await?;
//!
//! t.assert_passed();
//! # Ok(())
//! # }
//! ```

pub mod checks;
pub mod error;
pub mod k8s;
pub mod logging;
pub mod report;

pub use error::{Error, Result};
pub use k8s::cluster::{Cluster, KubeCluster};
pub use report::{Outcome, Reporter, TestCase};
