use anyhow::{Context, Result};
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, Request, Response, StatusCode, header};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tracing::{error, info};

use super::ServerState;
use super::models::{ErrorResponse, LanguagesResponse, MessageResponse, ServerError};
use crate::languages;
use crate::provider::Gemini;
use crate::settings::Settings;
use crate::translator::{TranslationRequest, TranslationResult, Translator};

pub async fn run_server(settings: Settings) -> Result<()> {
    let model = Gemini::new(settings.api_key).with_model(settings.model);
    let translator = Translator::new(Arc::new(model));
    let listener = tokio::net::TcpListener::bind(&settings.addr)
        .await
        .with_context(|| format!("failed to bind server address: {}", settings.addr))?;
    info!("listening on {}", settings.addr);
    axum::serve(listener, app(translator)).await?;
    Ok(())
}

pub fn app(translator: Translator) -> Router {
    let state = Arc::new(ServerState { translator });
    Router::new()
        .route("/", get(root))
        .route("/languages", get(list_languages))
        .route("/translate", post(translate))
        .with_state(state)
        .layer(axum::middleware::from_fn(cors_middleware))
}

async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageResponse {
            message: "Language Translator API is running".to_string(),
        }),
    )
}

async fn list_languages() -> impl IntoResponse {
    Json(LanguagesResponse {
        languages: languages::supported_languages(),
    })
}

async fn translate(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<TranslationRequest>,
) -> Result<Json<TranslationResult>, (StatusCode, Json<ErrorResponse>)> {
    info!(
        "received translation request: {} -> {}",
        request.source_language, request.target_language
    );
    if request.text.trim().is_empty() {
        let err = ServerError::bad_request("text is empty");
        return Err((err.status, Json(ErrorResponse { error: err.message })));
    }

    match state.translator.translate(&request).await {
        Ok(result) => {
            info!("translation and pronunciation completed successfully");
            Ok(Json(result))
        }
        Err(upstream) => {
            error!(
                "translation error ({} -> {}): {}",
                request.source_language, request.target_language, upstream
            );
            let err = ServerError::from(upstream);
            Err((err.status, Json(ErrorResponse { error: err.message })))
        }
    }
}

// Permissive development policy: any origin, method, and header, with
// credentials allowed. Lock the origin list down before production use.
async fn cors_middleware(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    let origin = req.headers().get(header::ORIGIN).cloned();
    if req.method() == Method::OPTIONS {
        let mut response = Response::new(Body::empty());
        *response.status_mut() = StatusCode::NO_CONTENT;
        apply_cors_headers(response.headers_mut(), origin);
        return Ok(response);
    }
    let mut response = next.run(req).await;
    apply_cors_headers(response.headers_mut(), origin);
    Ok(response)
}

fn apply_cors_headers(headers: &mut HeaderMap, origin: Option<HeaderValue>) {
    // Credentialed requests need the literal origin echoed back.
    let origin = origin.unwrap_or(HeaderValue::from_static("*"));
    headers.insert("access-control-allow-origin", origin);
    headers.insert("access-control-allow-methods", HeaderValue::from_static("*"));
    headers.insert("access-control-allow-headers", HeaderValue::from_static("*"));
    headers.insert(
        "access-control-allow-credentials",
        HeaderValue::from_static("true"),
    );
}
