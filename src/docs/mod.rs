// src/docs/mod.rs
//! OpenAPI document assembly and the routes serving it.
//!
//! The shared envelope schemas are registered once here; per-service
//! routers mount `docs_routes` to expose the JSON document and a Swagger
//! UI page.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::{InfoBuilder, OpenApi, Response as DocResponse, Responses, ResponsesBuilder};
use utoipa::OpenApi as OpenApiDerive;

use crate::common::pagination::PageInfo;
use crate::common::response::ErrorListResponse;
use crate::validation::ValidationError;

#[cfg(test)]
mod tests;

/// Data-less success/failure envelope as documented to consumers.
#[derive(serde::Serialize, utoipa::ToSchema)]
pub struct MessageEnvelope {
    pub status: u16,
    pub message: String,
}

#[derive(OpenApiDerive)]
#[openapi(components(schemas(
    MessageEnvelope,
    ValidationError,
    ErrorListResponse,
    PageInfo
)))]
struct ApiDoc;

/// Assembles the OpenAPI document with the shared schemas registered.
pub fn build_openapi(title: &str, version: &str, description: &str) -> OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info = InfoBuilder::new()
        .title(title)
        .version(version)
        .description(Some(description))
        .build();
    doc
}

fn response(description: &str) -> DocResponse {
    DocResponse::new(description)
}

fn with_common(builder: ResponsesBuilder) -> ResponsesBuilder {
    builder
        .response("401", response("Authentication credentials were not provided."))
        .response("403", response("Permission denied."))
        .response("500", response("Internal Server Error"))
}

/// Documented responses shared by create endpoints.
pub fn create_responses() -> Responses {
    with_common(ResponsesBuilder::new().response("400", response("Validation error"))).build()
}

/// Documented responses shared by list endpoints.
pub fn list_responses() -> Responses {
    with_common(
        ResponsesBuilder::new()
            .response("200", response("Resources retrieved Successfully."))
            .response("204", response("No Content")),
    )
    .build()
}

/// Documented responses shared by retrieve endpoints.
pub fn retrieve_responses() -> Responses {
    with_common(
        ResponsesBuilder::new()
            .response("200", response("Resource retrieved Successfully."))
            .response("400", response("Validation error"))
            .response("404", response("Resource not found.")),
    )
    .build()
}

/// Documented responses shared by update endpoints.
pub fn update_responses() -> Responses {
    with_common(
        ResponsesBuilder::new()
            .response("200", response("Resource updated Successfully."))
            .response("400", response("Validation error"))
            .response("404", response("Resource not found.")),
    )
    .build()
}

/// Documented responses shared by delete endpoints.
pub fn delete_responses() -> Responses {
    with_common(
        ResponsesBuilder::new()
            .response("200", response("Resource deleted Successfully."))
            .response("404", response("Resource not found.")),
    )
    .build()
}

/// Routes serving the OpenAPI JSON at `/api/openapi.json` and the Swagger
/// UI page at `/api/docs`.
pub fn docs_routes(openapi: OpenApi) -> Router {
    Router::new()
        .route("/api/openapi.json", get(serve_openapi))
        .route("/api/docs", get(serve_swagger_ui))
        .with_state(Arc::new(openapi))
}

async fn serve_openapi(State(doc): State<Arc<OpenApi>>) -> Json<OpenApi> {
    Json(doc.as_ref().clone())
}

async fn serve_swagger_ui(State(doc): State<Arc<OpenApi>>) -> Html<String> {
    Html(swagger_ui_page(&doc.info.title, "/api/openapi.json"))
}

fn swagger_ui_page(title: &str, openapi_url: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <title>{title}</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css"/>
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {{
      SwaggerUIBundle({{ url: "{openapi_url}", dom_id: "#swagger-ui" }});
    }};
  </script>
</body>
</html>"##
    )
}
