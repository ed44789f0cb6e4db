//! Browser form for generating prompt packages.
//!
//! Server-rendered HTML; the form posts back to `/generate` and the page is
//! re-rendered with the flattened prompt and the package JSON.
use crate::clock::Clock;
use crate::output::package_json;
use crate::schema::{Inputs, PromptPackage};
use crate::synthesize::{render_single_prompt, synthesize_package};
use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;

mod page;

#[derive(Clone)]
pub struct AppState {
    clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub end_goals: String,
}

#[derive(Debug, Serialize)]
pub struct PackageResponse {
    pub package: PromptPackage,
    pub prompt: String,
}

/// Create the router for the form page and the JSON endpoint.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .route("/api/package", post(api_package))
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!(%addr, "serving prompt builder");
    println!("Prompt builder listening on http://{addr}");
    axum::serve(listener, router(state))
        .await
        .context("serve prompt builder")?;
    Ok(())
}

async fn index() -> Html<String> {
    Html(page::builder_page(&page::PageState::default()))
}

async fn generate(State(state): State<AppState>, Form(form): Form<GenerateForm>) -> Response {
    let inputs = Inputs::new(form.project_name.clone(), form.end_goals.clone());
    let pkg = synthesize_package(&inputs, state.clock.as_ref());
    let json = match package_json(&pkg) {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!(error = %err, "failed to serialize package");
            return (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response();
        }
    };
    tracing::debug!(project = %pkg.header.name, "generated package from form");
    let view = page::PageState {
        project_name: form.project_name,
        end_goals: form.end_goals,
        prompt: Some(render_single_prompt(&pkg)),
        package_json: Some(json),
    };
    Html(page::builder_page(&view)).into_response()
}

async fn api_package(
    State(state): State<AppState>,
    Json(inputs): Json<Inputs>,
) -> Json<PackageResponse> {
    let package = synthesize_package(&inputs, state.clock.as_ref());
    let prompt = render_single_prompt(&package);
    Json(PackageResponse { package, prompt })
}
