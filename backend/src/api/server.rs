//! HTTP server for the Audioscribe API.
//!
//! Accepts an audio upload from the widget, forwards it to the Whisper API,
//! and serves the built frontend as static files.
//!
//! # API Endpoints
//!
//! | Method | Path       | Description                       |
//! |--------|------------|-----------------------------------|
//! | GET    | `/health`  | Health check                      |
//! | POST   | `/upload`  | Transcribe an uploaded audio file |
//! | GET    | `/*`       | Static frontend (when configured) |

use axum::{
    extract::{DefaultBodyLimit, Multipart},
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::{cors::CorsLayer, services::ServeDir};

use super::types::{error_response, TranscriptionResponse};
use crate::error::{TranscribeError, UploadError};
use crate::transcribe::TranscriberClient;
use crate::validation::{sanitize_filename, validate_upload, MAX_UPLOAD_BYTES};

/// Headroom for multipart framing on top of the file size cap.
const BODY_LIMIT_SLACK: usize = 1024 * 1024;

/// Start the HTTP server.
pub async fn start_server(
    port: u16,
    static_dir: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    // CORS permissive for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let mut app = Router::new()
        .route("/health", get(health))
        .route("/upload", post(upload_audio))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES as usize + BODY_LIMIT_SLACK))
        .layer(cors);

    match static_dir {
        Some(dir) => {
            println!("📂 Serving frontend from {}", dir.display());
            app = app.fallback_service(ServeDir::new(dir));
        }
        None => {
            app = app.route("/", get(health));
        }
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("🚀 Audioscribe server running on http://localhost:{}", port);
    println!("   POST /upload  - Transcribe an audio file");
    println!("   GET  /health  - Health check");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "audioscribe",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Upload endpoint: multipart `file` field in, transcription JSON out.
async fn upload_audio(
    mut multipart: Multipart,
) -> Result<Json<TranscriptionResponse>, (StatusCode, Json<Value>)> {
    let (file_name, bytes) = read_file_field(&mut multipart).await.map_err(bad_request)?;
    validate_upload(&file_name, bytes.len() as u64).map_err(bad_request)?;
    let filename = sanitize_filename(&file_name);

    println!("\n📄 NEW UPLOAD: {} ({} bytes)", filename, bytes.len());

    let client = TranscriberClient::from_env().map_err(|e| {
        eprintln!("❌ {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(error_response(&e.to_string())),
        )
    })?;

    let transcription = client.transcribe(&filename, bytes).await.map_err(|e| {
        eprintln!("❌ Transcription error: {}", e);
        match e {
            // API-reported failures carry a user-facing message already
            TranscribeError::Api { .. } => {
                (StatusCode::BAD_REQUEST, Json(error_response(&e.to_string())))
            }
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(error_response(&format!("Error processing file: {}", other))),
            ),
        }
    })?;

    println!("✅ Transcription completed ({} chars)", transcription.chars().count());

    Ok(Json(TranscriptionResponse {
        transcription,
        filename,
    }))
}

fn bad_request(e: UploadError) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(error_response(&e.to_string())))
}

/// Pull the `file` field out of the multipart body.
async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Vec<u8>), UploadError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Multipart(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("").to_string();
        if file_name.is_empty() {
            return Err(UploadError::EmptyFilename);
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| UploadError::Multipart(e.to_string()))?;
        return Ok((file_name, bytes.to_vec()));
    }

    Err(UploadError::MissingFile)
}
