use k8s_openapi::api::apps::v1::DeploymentCondition;

use super::fetched;
use crate::error::{Error, Result};
use crate::k8s::cluster::Cluster;
use crate::report::Reporter;

/// Report whether `namespace` holds exactly `expected_count` deployments.
///
/// # Errors
///
/// Will return `Err` without reporting if the deployments cannot be listed
pub async fn expected_deployment_count(
    t: &dyn Reporter,
    cluster: &dyn Cluster,
    namespace: &str,
    expected_count: usize,
) -> Result<()> {
    let deployments = fetched(
        cluster.list_deployments(namespace).await,
        format_args!("deployments in namespace '{namespace}'"),
    )?;
    let actual_count = deployments.len();

    if actual_count == expected_count {
        t.log_success(&format!(
            "The expected number of Deployments exist in the '{namespace}' namespace.  Expected {expected_count}, got {actual_count}."
        ));
    } else {
        t.log_failure(&format!(
            "An unexpected number of Deployments exist in the '{namespace}' namespace.  Expected {expected_count}, got {actual_count}."
        ));
    }

    Ok(())
}

/// Report whether the deployment fetched as `name` carries that name.
///
/// # Errors
///
/// Will return `Err` without reporting if the deployment cannot be fetched,
/// including when it does not exist
pub async fn deployment_exists(
    t: &dyn Reporter,
    cluster: &dyn Cluster,
    name: &str,
    namespace: &str,
) -> Result<()> {
    let deployment = fetched(
        cluster.get_deployment(name, namespace).await,
        format_args!("deployment '{name}' in namespace '{namespace}'"),
    )?;
    let actual_name = deployment.metadata.name.as_deref().unwrap_or_default();

    if actual_name == name {
        t.log_success(&format!(
            "Deployment exists with the expected name.  Expected {name}, got {actual_name}."
        ));
    } else {
        t.log_failure(&format!(
            "Deployment does not exist with the expected name.  Expected {name}, got {actual_name}."
        ));
    }

    Ok(())
}

/// Report whether the first condition of `condition_type` has
/// `expected_status` (`"True"`, `"False"` or `"Unknown"`).
///
/// # Errors
///
/// Will return `Err` without reporting if no condition of `condition_type`
/// is present
pub fn condition_status_met(
    t: &dyn Reporter,
    conditions: &[DeploymentCondition],
    condition_type: &str,
    expected_status: &str,
) -> Result<()> {
    let status = conditions
        .iter()
        .find(|condition| condition.type_ == condition_type)
        .map(|condition| condition.status.as_str())
        .ok_or_else(|| Error::ConditionNotFound {
            condition_type: condition_type.to_string(),
        })?;

    if status == expected_status {
        t.log_success(&format!(
            "Deployment condition type {condition_type} has its expected status.  Expected {expected_status}, got {status}."
        ));
    } else {
        t.log_failure(&format!(
            "Deployment condition type {condition_type} does not have its expected status.  Expected {expected_status}, got {status}."
        ));
    }

    Ok(())
}

/// Report whether a replica count is as expected. `description` names the
/// count being compared, e.g. `"number of available replicas"`.
pub fn replica_count_as_expected(
    t: &dyn Reporter,
    expected_replicas: i32,
    actual_replicas: i32,
    description: &str,
) {
    if expected_replicas == actual_replicas {
        t.log_success(&format!(
            "Deployment has expected {description}.  Expected {expected_replicas}, got {actual_replicas}."
        ));
    } else {
        t.log_failure(&format!(
            "Deployment has unexpected {description}.  Expected {expected_replicas}, got {actual_replicas}."
        ));
    }
}
