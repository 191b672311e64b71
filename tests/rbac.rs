mod common;

use common::{FAR_FUTURE, LONG_AGO, MockApiServer, object};
use kubeassert::checks::rbac::{
    cluster_role_binding_exists, cluster_role_exists, role_binding_exists, role_exists,
    service_account_exists,
};
use kubeassert::{Error, TestCase};

const RBAC: &str = "rbac.authorization.k8s.io/v1";

fn jenkins_cluster() -> kubeassert::KubeCluster {
    MockApiServer::new()
        .route(
            "/api/v1/namespaces/jenkins/serviceaccounts/jenkins-server",
            object("v1", "ServiceAccount", "jenkins-server", Some("jenkins"), Some(LONG_AGO)),
        )
        .route(
            "/apis/rbac.authorization.k8s.io/v1/namespaces/jenkins/roles/jenkins-server",
            object(RBAC, "Role", "jenkins-server", Some("jenkins"), Some(LONG_AGO)),
        )
        .route(
            "/apis/rbac.authorization.k8s.io/v1/namespaces/jenkins/rolebindings/jenkins-server",
            object(RBAC, "RoleBinding", "jenkins-server", Some("jenkins"), Some(LONG_AGO)),
        )
        .route(
            "/apis/rbac.authorization.k8s.io/v1/clusterroles/jenkins-server",
            object(RBAC, "ClusterRole", "jenkins-server", None, Some(LONG_AGO)),
        )
        .route(
            "/apis/rbac.authorization.k8s.io/v1/clusterrolebindings/jenkins-server",
            object(RBAC, "ClusterRoleBinding", "jenkins-server", None, Some(LONG_AGO)),
        )
        .route(
            "/apis/rbac.authorization.k8s.io/v1/clusterroles/not-yet",
            object(RBAC, "ClusterRole", "not-yet", None, Some(FAR_FUTURE)),
        )
        .route(
            "/apis/rbac.authorization.k8s.io/v1/namespaces/jenkins/roles/unsaved",
            object(RBAC, "Role", "unsaved", Some("jenkins"), None),
        )
        .start()
}

#[tokio::test]
async fn test_all_jenkins_rbac_objects_exist() -> anyhow::Result<()> {
    let cluster = jenkins_cluster();
    let t = TestCase::new("jenkins rbac");

    service_account_exists(&t, &cluster, "jenkins-server", "jenkins").await?;
    role_exists(&t, &cluster, "jenkins-server", "jenkins").await?;
    role_binding_exists(&t, &cluster, "jenkins-server", "jenkins").await?;
    cluster_role_exists(&t, &cluster, "jenkins-server").await?;
    cluster_role_binding_exists(&t, &cluster, "jenkins-server").await?;

    t.assert_passed();
    let messages: Vec<String> = t
        .outcomes()
        .iter()
        .map(|outcome| outcome.message().to_string())
        .collect();
    assert_eq!(
        messages,
        vec![
            "A ServiceAccount named 'jenkins-server' exists in the 'jenkins' namespace.",
            "A Role named 'jenkins-server' exists in the 'jenkins' namespace.",
            "A RoleBinding object named 'jenkins-server' exists in the 'jenkins' namespace.",
            "A ClusterRole named 'jenkins-server' exists.",
            "A ClusterRoleBinding object named 'jenkins-server' exists.",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_future_creation_timestamp_fails() -> anyhow::Result<()> {
    let cluster = jenkins_cluster();
    let t = TestCase::new("jenkins rbac");

    cluster_role_exists(&t, &cluster, "not-yet").await?;

    assert_eq!(
        t.take_failures(),
        vec!["A ClusterRole named 'not-yet' does not exist.".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_creation_timestamp_fails() -> anyhow::Result<()> {
    let cluster = jenkins_cluster();
    let t = TestCase::new("jenkins rbac");

    role_exists(&t, &cluster, "unsaved", "jenkins").await?;

    assert_eq!(
        t.take_failures(),
        vec!["A Role named 'unsaved' does not exist in the 'jenkins' namespace.".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn test_each_check_reports_once() -> anyhow::Result<()> {
    let cluster = jenkins_cluster();
    let t = TestCase::new("jenkins rbac");

    cluster_role_binding_exists(&t, &cluster, "jenkins-server").await?;
    cluster_role_exists(&t, &cluster, "not-yet").await?;

    assert_eq!(t.outcomes().len(), 2);
    assert_eq!(t.take_failures().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_missing_objects_are_fatal() {
    let cluster = jenkins_cluster();
    let t = TestCase::new("jenkins rbac");

    let results = [
        service_account_exists(&t, &cluster, "ghost", "jenkins").await,
        role_exists(&t, &cluster, "ghost", "jenkins").await,
        role_binding_exists(&t, &cluster, "ghost", "jenkins").await,
        cluster_role_exists(&t, &cluster, "ghost").await,
        cluster_role_binding_exists(&t, &cluster, "ghost").await,
    ];

    for result in results {
        assert!(matches!(result, Err(Error::Kube(_))), "{result:?}");
    }
    assert!(t.outcomes().is_empty());
}
