use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Namespace, ServiceAccount};
use k8s_openapi::api::rbac::v1::{ClusterRole, ClusterRoleBinding, Role, RoleBinding};
use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use super::client::{self, ClientOptions};
use crate::error::Result;

/// Read access to the objects the checks inspect.
///
/// Any error returned here is treated by the checks as a broken environment,
/// never as a failed assertion.
#[async_trait]
pub trait Cluster: Send + Sync {
    async fn list_deployments(&self, namespace: &str) -> kube::Result<Vec<Deployment>>;

    async fn get_deployment(&self, name: &str, namespace: &str) -> kube::Result<Deployment>;

    async fn get_namespace(&self, name: &str) -> kube::Result<Namespace>;

    async fn get_service_account(
        &self,
        name: &str,
        namespace: &str,
    ) -> kube::Result<ServiceAccount>;

    async fn get_role(&self, name: &str, namespace: &str) -> kube::Result<Role>;

    async fn get_role_binding(&self, name: &str, namespace: &str) -> kube::Result<RoleBinding>;

    async fn get_cluster_role(&self, name: &str) -> kube::Result<ClusterRole>;

    async fn get_cluster_role_binding(&self, name: &str) -> kube::Result<ClusterRoleBinding>;
}

/// [`Cluster`] backed by a live API server through `kube`
#[derive(Clone)]
pub struct KubeCluster {
    client: Client,
}

impl KubeCluster {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// Connect using the inferred configuration and default user agent
    ///
    /// # Errors
    ///
    /// Will return `Err` if no kubernetes configuration can be loaded
    pub async fn try_default() -> Result<Self> {
        Self::from_options(&ClientOptions::default()).await
    }

    /// # Errors
    ///
    /// Will return `Err` if the configuration named by `options` cannot be
    /// loaded or the client cannot be built
    pub async fn from_options(options: &ClientOptions) -> Result<Self> {
        Ok(Self::new(client::new(options).await?))
    }

    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Cluster for KubeCluster {
    async fn list_deployments(&self, namespace: &str) -> kube::Result<Vec<Deployment>> {
        let api: Api<Deployment> = Api::namespaced(self.client.clone(), namespace);
        let list = api.list(&ListParams::default()).await?;
        debug!(
            "listed {} deployments in namespace '{}'",
            list.items.len(),
            namespace
        );
        Ok(list.items)
    }

    async fn get_deployment(&self, name: &str, namespace: &str) -> kube::Result<Deployment> {
        let api: Api<Deployment> = Api::namespaced(self.client.clone(), namespace);
        api.get(name).await
    }

    // Namespaces are cluster-scoped, so we use Api::all
    async fn get_namespace(&self, name: &str) -> kube::Result<Namespace> {
        let api: Api<Namespace> = Api::all(self.client.clone());
        api.get(name).await
    }

    async fn get_service_account(
        &self,
        name: &str,
        namespace: &str,
    ) -> kube::Result<ServiceAccount> {
        let api: Api<ServiceAccount> = Api::namespaced(self.client.clone(), namespace);
        api.get(name).await
    }

    async fn get_role(&self, name: &str, namespace: &str) -> kube::Result<Role> {
        let api: Api<Role> = Api::namespaced(self.client.clone(), namespace);
        api.get(name).await
    }

    async fn get_role_binding(&self, name: &str, namespace: &str) -> kube::Result<RoleBinding> {
        let api: Api<RoleBinding> = Api::namespaced(self.client.clone(), namespace);
        api.get(name).await
    }

    async fn get_cluster_role(&self, name: &str) -> kube::Result<ClusterRole> {
        let api: Api<ClusterRole> = Api::all(self.client.clone());
        api.get(name).await
    }

    async fn get_cluster_role_binding(&self, name: &str) -> kube::Result<ClusterRoleBinding> {
        let api: Api<ClusterRoleBinding> = Api::all(self.client.clone());
        api.get(name).await
    }
}

