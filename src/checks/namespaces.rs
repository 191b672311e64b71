use super::fetched;
use crate::error::Result;
use crate::k8s::cluster::Cluster;
use crate::report::Reporter;

/// Phase of a namespace that is usable, as opposed to `Terminating`
pub const ACTIVE_PHASE: &str = "Active";

/// Report whether namespace `name` exists and is active.
///
/// # Errors
///
/// Will return `Err` without reporting if the namespace cannot be fetched,
/// including when it does not exist
pub async fn namespace_exists(t: &dyn Reporter, cluster: &dyn Cluster, name: &str) -> Result<()> {
    let namespace = fetched(
        cluster.get_namespace(name).await,
        format_args!("namespace '{name}'"),
    )?;
    let phase = namespace
        .status
        .as_ref()
        .and_then(|status| status.phase.as_deref())
        .unwrap_or_default();

    if phase == ACTIVE_PHASE {
        t.log_success(&format!("Cluster has a namespace named {name}."));
    } else {
        t.log_failure(&format!(
            "Cluster does not have a namespace named {name}.  Expected phase {ACTIVE_PHASE}, got {phase}."
        ));
    }

    Ok(())
}
