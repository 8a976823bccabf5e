//! Local http server standing in for the build service and Github in tests

use hyper::{
    service::{make_service_fn, service_fn},
    Body, Request, Response, Server,
};
use std::{
    convert::Infallible,
    sync::{Arc, Mutex},
};

pub struct TestServer {
    base_url: String,
    uris: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    /// Listens on an ephemeral local port, answering every request with `handler`
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&Request<Body>) -> Response<Body> + Send + Sync + 'static,
    {
        let handler = Arc::new(handler);
        let uris = Arc::new(Mutex::new(Vec::new()));

        let make_service = {
            let uris = uris.clone();
            make_service_fn(move |_| {
                let handler = handler.clone();
                let uris = uris.clone();
                async move {
                    Ok::<_, Infallible>(service_fn(move |request: Request<Body>| {
                        uris.lock().unwrap().push(request.uri().to_string());
                        let response = handler(&request);
                        async move { Ok::<_, Infallible>(response) }
                    }))
                }
            })
        };

        let server = Server::bind(&([127, 0, 0, 1], 0).into()).serve(make_service);
        let base_url = format!("http://{}/", server.local_addr());
        tokio::spawn(server);

        Self { base_url, uris }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Path and query of every request received so far
    pub fn uris(&self) -> Vec<String> {
        self.uris.lock().unwrap().clone()
    }
}

pub fn json(body: &str) -> Response<Body> {
    Response::builder()
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}
