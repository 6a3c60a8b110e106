use actix_web::{get, post, web, HttpResponse};

use crate::app::AppState;
use crate::error::{ApiError, ErrorBody};
use crate::model::{
    BatchEmbedRequest, BatchEmbedResponse, EmbedRequest, EmbedResponse, HealthResponse,
};

#[get("/health")]
pub async fn health(app: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        model: app.model_name,
    })
}

#[post("/embed")]
pub async fn embed(
    app: web::Data<AppState>,
    form: web::Json<EmbedRequest>,
) -> Result<HttpResponse, ApiError> {
    if form.text.is_empty() {
        return Err(ApiError::Validation("Text is required"));
    }

    let texts = [form.into_inner().text];
    let vectors = app
        .encoder
        .lock()
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .encode(&texts)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let embedding = vectors
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::Internal("model returned no embedding".to_string()))?;
    let dimensions = embedding.len();

    Ok(HttpResponse::Ok().json(EmbedResponse {
        embedding,
        dimensions,
    }))
}

#[post("/embed/batch")]
pub async fn embed_batch(
    app: web::Data<AppState>,
    form: web::Json<BatchEmbedRequest>,
) -> Result<HttpResponse, ApiError> {
    if form.texts.is_empty() {
        return Err(ApiError::Validation("Texts array is required"));
    }

    let texts = form.into_inner().texts;
    let embeddings = app
        .encoder
        .lock()
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .encode(&texts)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let dimensions = embeddings.first().map_or(0, Vec::len);
    let count = embeddings.len();

    Ok(HttpResponse::Ok().json(BatchEmbedResponse {
        embeddings,
        dimensions,
        count,
    }))
}

/// Keeps bodies that fail to parse on the same `{"error": ...}` shape as
/// everything else.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = HttpResponse::BadRequest().json(ErrorBody {
            error: err.to_string(),
        });
        actix_web::error::InternalError::from_response(err, body).into()
    })
}
