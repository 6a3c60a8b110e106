use serde::{Deserialize, Serialize};

/// Body of POST /embed. A missing `text` key deserializes to an empty
/// string; both cases fail validation the same way.
#[derive(Deserialize)]
pub struct EmbedRequest {
    #[serde(default)]
    pub text: String,
}

/// Body of POST /embed/batch.
#[derive(Deserialize)]
pub struct BatchEmbedRequest {
    #[serde(default)]
    pub texts: Vec<String>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: &'static str,
}

#[derive(Serialize)]
pub struct EmbedResponse {
    pub embedding: Vec<f32>,
    pub dimensions: usize,
}

#[derive(Serialize)]
pub struct BatchEmbedResponse {
    pub embeddings: Vec<Vec<f32>>,
    pub dimensions: usize,
    pub count: usize,
}
