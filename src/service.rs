use crate::{
    page::Page,
    resolver::{resolve, BuildSource, Builds, CommitSource, Commits},
    Config, Error, Result,
};
use futures::future;
use hyper::{
    header::CONTENT_TYPE,
    server::conn::AddrStream,
    service::{make_service_fn, service_fn},
    Body, Method, Request, Response, Server, StatusCode,
};
use log::{error, info};
use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};
use structopt::StructOpt;

#[derive(StructOpt)]
pub struct ServeOptions {
    #[structopt(long, default_value = "3000")]
    port: u16,
}

pub async fn run_serve(config: Config, options: &ServeOptions) -> Result<()> {
    let service = Service::new(
        Builds::new(&config.builds)?,
        Commits::new(&config.github)?,
        Page::new(&config.page)?,
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], options.port));

    // The closure inside `make_service_fn` is run for each connection,
    // creating a 'service' to handle requests for that specific connection.
    let make_service = make_service_fn(|socket: &AddrStream| {
        info!("remote address: {:?}", socket.remote_addr());

        let service = service.clone();

        future::ok::<_, Error>(service_fn(move |request| {
            let service = service.clone();
            service.serve(request)
        }))
    });

    info!("Listening on http://{}", addr);
    Server::bind(&addr).serve(make_service).await?;

    Ok(())
}

/// Serves the status page, resolving the status afresh for every request
pub struct Service<B, C> {
    counter: Arc<AtomicUsize>,
    builds: Arc<B>,
    commits: Arc<C>,
    page: Arc<Page>,
}

// Derive would require `B: Clone` and `C: Clone`
impl<B, C> Clone for Service<B, C> {
    fn clone(&self) -> Self {
        Self {
            counter: self.counter.clone(),
            builds: self.builds.clone(),
            commits: self.commits.clone(),
            page: self.page.clone(),
        }
    }
}

impl<B, C> Service<B, C>
where
    B: BuildSource + Send + Sync + 'static,
    C: CommitSource + Send + Sync + 'static,
{
    pub fn new(builds: B, commits: C, page: Page) -> Self {
        Self {
            counter: Arc::new(AtomicUsize::new(0)),
            builds: Arc::new(builds),
            commits: Arc::new(commits),
            page: Arc::new(page),
        }
    }

    pub async fn serve(self, request: Request<Body>) -> Result<Response<Body>> {
        let count = self.counter.fetch_add(1, Ordering::AcqRel);
        info!("Request #{}: {} {}", count, request.method(), request.uri());
        self.route(request).await
    }

    async fn route(&self, request: Request<Body>) -> Result<Response<Body>> {
        match (request.method(), request.uri().path()) {
            (&Method::GET, "/") => self.status_page().await,
            (_, "/") => Ok(Response::builder()
                .status(StatusCode::METHOD_NOT_ALLOWED)
                .body(Body::empty())?),
            _ => Ok(Response::builder()
                .status(StatusCode::NOT_FOUND)
                .body(Body::empty())?),
        }
    }

    async fn status_page(&self) -> Result<Response<Body>> {
        // Failures are only logged; the page is served with nothing rendered into it
        let (status_code, html) = match resolve(&*self.builds, &*self.commits).await {
            Ok(status) => (StatusCode::OK, self.page.render(Some(&status))?),
            Err(e) => {
                error!("resolving build status: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, self.page.render(None)?)
            }
        };

        Ok(Response::builder()
            .status(status_code)
            .header(CONTENT_TYPE, "text/html; charset=utf-8")
            .body(Body::from(html))?)
    }
}
