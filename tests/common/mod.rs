//! In-process API server for integration tests.
//!
//! Serves canned JSON objects by request path through a `tower-test` mock
//! service plugged into a real `kube::Client`. Unknown paths answer 404 with a
//! `Status` body, the same way the API server reports a missing object.
#![allow(dead_code)]

use std::collections::HashMap;

use hyper::http::{Method, Request, Response, StatusCode};
use k8s_openapi::serde_json::{self, Value, json};
use kube::Client;
use kube::client::Body;
use kubeassert::KubeCluster;
use tower_test::mock::{self, Handle};

pub const LONG_AGO: &str = "2020-07-05T00:00:00Z";
pub const FAR_FUTURE: &str = "2999-01-01T00:00:00Z";

#[derive(Default)]
pub struct MockApiServer {
    routes: HashMap<String, Value>,
}

impl MockApiServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, path: &str, body: Value) -> Self {
        self.routes.insert(path.to_string(), body);
        self
    }

    /// Spawn the server on the current runtime and connect a cluster to it
    pub fn start(self) -> KubeCluster {
        kubeassert::logging::init();
        let (service, handle) = mock::pair::<Request<Body>, Response<Body>>();
        tokio::spawn(serve(handle, self.routes));
        KubeCluster::new(Client::new(service, "default"))
    }
}

async fn serve(mut handle: Handle<Request<Body>, Response<Body>>, routes: HashMap<String, Value>) {
    while let Some((request, send)) = handle.next_request().await {
        assert_eq!(request.method(), Method::GET);
        let path = request.uri().path().to_string();
        let (status, body) = routes.get(&path).map_or_else(
            || (StatusCode::NOT_FOUND, not_found(&path)),
            |body| (StatusCode::OK, body.clone()),
        );
        let response = Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();
        send.send_response(response);
    }
}

fn not_found(path: &str) -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "Status",
        "metadata": {},
        "status": "Failure",
        "message": format!("{path} not found"),
        "reason": "NotFound",
        "code": 404
    })
}

pub fn deployment(name: &str, namespace: &str) -> Value {
    json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "creationTimestamp": LONG_AGO
        }
    })
}

pub fn deployment_list(items: Vec<Value>) -> Value {
    json!({
        "apiVersion": "apps/v1",
        "kind": "DeploymentList",
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
}

pub fn namespace(name: &str, phase: &str) -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": {
            "name": name,
            "creationTimestamp": LONG_AGO
        },
        "status": { "phase": phase }
    })
}

/// Any object identified only by metadata; `namespace` is omitted for
/// cluster-scoped kinds and `created` for objects without a timestamp
pub fn object(
    api_version: &str,
    kind: &str,
    name: &str,
    namespace: Option<&str>,
    created: Option<&str>,
) -> Value {
    let mut metadata = json!({ "name": name });
    if let Some(namespace) = namespace {
        metadata["namespace"] = json!(namespace);
    }
    if let Some(created) = created {
        metadata["creationTimestamp"] = json!(created);
    }
    json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": metadata
    })
}
