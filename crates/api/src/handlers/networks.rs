use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    response::Json,
    routing::get,
    Router,
};
use netbridge_domain::{Network, NetworkId, NetworkPatch, PageRequest};
use tracing::{debug, instrument};

use crate::{
    dto::{ActionResponse, ListNetworksQuery, NetworkRequest},
    error::ApiError,
    state::AppState,
};

pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";
pub const TOTAL_PAGES_HEADER: &str = "X-Total-Pages";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/networks", get(list_networks).post(create_network))
        .route(
            "/networks/{id}",
            get(get_network).put(update_network).delete(delete_network),
        )
}

fn parse_id(raw: &str) -> Result<NetworkId, ApiError> {
    Ok(raw.parse::<NetworkId>()?)
}

#[instrument(skip(state, payload), name = "api_create_network")]
async fn create_network(
    State(state): State<AppState>,
    payload: Result<Json<NetworkRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>, ApiError> {
    let Json(req) = payload?;
    let network = state.create_network.execute(req.into_new_network()).await?;

    debug!(network_id = %network.id, "Network created");
    Ok(Json(ActionResponse::success("Create success")))
}

#[instrument(skip(state), name = "api_list_networks")]
async fn list_networks(
    State(state): State<AppState>,
    query: Result<Query<ListNetworksQuery>, QueryRejection>,
) -> Result<([(&'static str, String); 2], Json<Vec<Network>>), ApiError> {
    let Query(params) = query?;
    let page = PageRequest::parse(
        params.page.as_deref(),
        params.page_size.as_deref(),
        state.default_page_size,
    )?;

    let result = state.get_networks.list(page).await?;

    debug!(
        count = result.networks.len(),
        total = result.total_count,
        "Networks retrieved successfully"
    );

    let headers = [
        (TOTAL_COUNT_HEADER, result.total_count.to_string()),
        (TOTAL_PAGES_HEADER, result.total_pages.to_string()),
    ];
    Ok((headers, Json(result.networks)))
}

#[instrument(skip(state), name = "api_get_network")]
async fn get_network(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Network>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.get_networks.get_by_id(&id).await?))
}

#[instrument(skip(state, payload), name = "api_update_network")]
async fn update_network(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NetworkRequest>, JsonRejection>,
) -> Result<Json<Network>, ApiError> {
    let id = parse_id(&id)?;
    // A missing record wins over a bad body.
    state.get_networks.get_by_id(&id).await?;

    let Json(req) = payload?;
    let patch = NetworkPatch::try_from(req)?;

    Ok(Json(state.update_network.execute(&id, patch).await?))
}

#[instrument(skip(state), name = "api_delete_network")]
async fn delete_network(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse>, ApiError> {
    let id = parse_id(&id)?;
    state.delete_network.execute(&id).await?;

    Ok(Json(ActionResponse::success("Delete success")))
}
