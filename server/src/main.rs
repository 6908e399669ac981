mod config;
mod state;
mod workspace;

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{Method, StatusCode},
    routing::get,
};
use config::Config;
use state::AppState;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use rollcall_shared::{
    CurrentActor, ErrorKind, ListMembershipsResponse, Member, MembershipId, WorkspaceId,
};

type ApiError = (StatusCode, Json<ErrorKind>);

fn api_error(kind: ErrorKind) -> ApiError {
    let status = match kind {
        ErrorKind::WorkspaceNotFound | ErrorKind::MembershipNotFound => StatusCode::NOT_FOUND,
        ErrorKind::PermissionDenied => StatusCode::FORBIDDEN,
        ErrorKind::CannotRemoveSelf => StatusCode::BAD_REQUEST,
        ErrorKind::Other { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(kind))
}

/// GET /api/me - The signed-in user and their project grants
async fn get_me(State(state): State<AppState>) -> Json<CurrentActor> {
    Json(state.actor.as_ref().clone())
}

/// GET /api/workspaces/:id/memberships - List project members
async fn list_memberships(
    Path(workspace_id): Path<WorkspaceId>,
    State(state): State<AppState>,
) -> Result<Json<ListMembershipsResponse>, ApiError> {
    let workspaces = state.workspaces.read().await;
    let workspace = workspaces
        .get(&workspace_id)
        .ok_or_else(|| api_error(ErrorKind::WorkspaceNotFound))?;

    Ok(Json(ListMembershipsResponse {
        memberships: workspace.memberships().to_vec(),
    }))
}

/// GET /api/workspaces/:id/memberships/:membership_id - Fetch a single member
async fn get_membership(
    Path((workspace_id, membership_id)): Path<(WorkspaceId, MembershipId)>,
    State(state): State<AppState>,
) -> Result<Json<Member>, ApiError> {
    let workspaces = state.workspaces.read().await;
    let workspace = workspaces
        .get(&workspace_id)
        .ok_or_else(|| api_error(ErrorKind::WorkspaceNotFound))?;

    workspace
        .membership(&membership_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| api_error(ErrorKind::MembershipNotFound))
}

/// DELETE /api/workspaces/:id/memberships/:membership_id - Remove a member
async fn delete_membership(
    Path((workspace_id, membership_id)): Path<(WorkspaceId, MembershipId)>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let mut workspaces = state.workspaces.write().await;
    let workspace = workspaces
        .get_mut(&workspace_id)
        .ok_or_else(|| api_error(ErrorKind::WorkspaceNotFound))?;

    match workspace.remove_membership(&membership_id, &state.actor) {
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        Err(kind) => {
            warn!(%workspace_id, %membership_id, "Refused to remove member: {}", kind);
            Err(api_error(kind))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load(Config::path_from_env()).await?;
    info!(
        actor = %config.actor.user.username,
        workspaces = config.workspaces.len(),
        "Loaded configuration."
    );

    let bind = config.server.bind;
    let state = AppState::new(config.actor, config.workspaces);

    // CORS configuration for frontend
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::DELETE, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any);

    let app = Router::new()
        .route("/api/me", get(get_me))
        .route("/api/workspaces/{id}/memberships", get(list_memberships))
        .route(
            "/api/workspaces/{id}/memberships/{membership_id}",
            get(get_membership).delete(delete_membership),
        )
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .context("failed to bind to address")?;
    info!("Server listening on http://{}", bind);
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
