use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::{Error, Result};

mod context;
mod schema;

pub use schema::{MutationRoot, QueryRoot};

pub const GRAPHQL_PATH: &str = "/graphql";

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(catalog: Catalog) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(catalog)
        .finish()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

#[axum::debug_handler]
async fn graphql_handler(State(schema): State<CatalogSchema>, req: GraphQLRequest) -> GraphQLResponse {
    let req = req.into_inner();
    debug!(operation = ?req.operation_name, "executing request");

    let res = schema.execute(req).await;
    if res.is_err() {
        warn!(errors = ?res.errors, "request completed with errors");
    }
    res.into()
}

pub fn make_app(catalog: Catalog) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .with_state(build_schema(catalog))
}

pub async fn serve(addr: SocketAddr, catalog: Catalog) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;
    info!(%addr, "catalog listening, GraphiQL at http://{addr}{GRAPHQL_PATH}");

    axum::serve(listener, make_app(catalog))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::Serve)?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("received ctrl-c, shutting down");
}
