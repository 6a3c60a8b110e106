use std::sync::Mutex;

use rust_bert::pipelines::sentence_embeddings::SentenceEmbeddingsModel;

/// The encode contract the handlers depend on: texts in, one fixed-length
/// vector per text out, in input order.
pub trait TextEncoder: Send {
    fn encode(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>>;
}

impl TextEncoder for SentenceEmbeddingsModel {
    fn encode(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>> {
        Ok(SentenceEmbeddingsModel::encode(self, texts)?)
    }
}

pub struct AppState {
    // The tch-backed pipeline is not Sync; the mutex serializes encode calls
    // across workers. Loaded once at startup, never replaced.
    pub encoder: Mutex<Box<dyn TextEncoder>>,
    pub model_name: &'static str,
}

impl AppState {
    pub fn new(encoder: Box<dyn TextEncoder>, model_name: &'static str) -> Self {
        AppState {
            encoder: Mutex::new(encoder),
            model_name,
        }
    }
}
