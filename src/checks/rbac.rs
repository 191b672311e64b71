//! Existence checks for service accounts and RBAC objects.
//!
//! These kinds expose no status, so an object counts as existing when the API
//! server returns it with a creation timestamp earlier than the moment of the
//! check.

use chrono::Utc;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

use super::{created_before, fetched};
use crate::error::Result;
use crate::k8s::cluster::Cluster;
use crate::report::Reporter;

/// Report whether service account `name` exists in `namespace`.
///
/// # Errors
///
/// Will return `Err` without reporting if the service account cannot be fetched
pub async fn service_account_exists(
    t: &dyn Reporter,
    cluster: &dyn Cluster,
    name: &str,
    namespace: &str,
) -> Result<()> {
    let service_account = fetched(
        cluster.get_service_account(name, namespace).await,
        format_args!("service account '{name}' in namespace '{namespace}'"),
    )?;
    report_namespaced(t, "ServiceAccount", name, namespace, &service_account.metadata)
}

/// Report whether role `name` exists in `namespace`.
///
/// # Errors
///
/// Will return `Err` without reporting if the role cannot be fetched
pub async fn role_exists(
    t: &dyn Reporter,
    cluster: &dyn Cluster,
    name: &str,
    namespace: &str,
) -> Result<()> {
    let role = fetched(
        cluster.get_role(name, namespace).await,
        format_args!("role '{name}' in namespace '{namespace}'"),
    )?;
    report_namespaced(t, "Role", name, namespace, &role.metadata)
}

/// Report whether role binding `name` exists in `namespace`.
///
/// # Errors
///
/// Will return `Err` without reporting if the role binding cannot be fetched
pub async fn role_binding_exists(
    t: &dyn Reporter,
    cluster: &dyn Cluster,
    name: &str,
    namespace: &str,
) -> Result<()> {
    let binding = fetched(
        cluster.get_role_binding(name, namespace).await,
        format_args!("role binding '{name}' in namespace '{namespace}'"),
    )?;
    report_namespaced(t, "RoleBinding object", name, namespace, &binding.metadata)
}

/// Report whether cluster role `name` exists.
///
/// # Errors
///
/// Will return `Err` without reporting if the cluster role cannot be fetched
pub async fn cluster_role_exists(t: &dyn Reporter, cluster: &dyn Cluster, name: &str) -> Result<()> {
    let role = fetched(
        cluster.get_cluster_role(name).await,
        format_args!("cluster role '{name}'"),
    )?;
    report_cluster_scoped(t, "ClusterRole", name, &role.metadata)
}

/// Report whether cluster role binding `name` exists.
///
/// # Errors
///
/// Will return `Err` without reporting if the cluster role binding cannot be
/// fetched
pub async fn cluster_role_binding_exists(
    t: &dyn Reporter,
    cluster: &dyn Cluster,
    name: &str,
) -> Result<()> {
    let binding = fetched(
        cluster.get_cluster_role_binding(name).await,
        format_args!("cluster role binding '{name}'"),
    )?;
    report_cluster_scoped(t, "ClusterRoleBinding object", name, &binding.metadata)
}

fn report_namespaced(
    t: &dyn Reporter,
    kind: &str,
    name: &str,
    namespace: &str,
    meta: &ObjectMeta,
) -> Result<()> {
    if created_before(meta, Utc::now())? {
        t.log_success(&format!(
            "A {kind} named '{name}' exists in the '{namespace}' namespace."
        ));
    } else {
        t.log_failure(&format!(
            "A {kind} named '{name}' does not exist in the '{namespace}' namespace."
        ));
    }
    Ok(())
}

fn report_cluster_scoped(t: &dyn Reporter, kind: &str, name: &str, meta: &ObjectMeta) -> Result<()> {
    if created_before(meta, Utc::now())? {
        t.log_success(&format!("A {kind} named '{name}' exists."));
    } else {
        t.log_failure(&format!("A {kind} named '{name}' does not exist."));
    }
    Ok(())
}
