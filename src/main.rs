mod app;
mod config;
mod error;
mod model;
mod routes;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use rust_bert::pipelines::sentence_embeddings::{
    SentenceEmbeddingsBuilder, SentenceEmbeddingsModelType,
};

use crate::app::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Load failure is fatal: nothing can be served without the model.
    tracing::info!("loading sentence embeddings model {}", config::MODEL_NAME);
    let model = SentenceEmbeddingsBuilder::remote(SentenceEmbeddingsModelType::AllMiniLmL6V2)
        .create_model()
        .context("could not load embeddings model")?;
    tracing::info!("model loaded");

    let data = web::Data::new(AppState::new(Box::new(model), config::MODEL_NAME));

    tracing::info!("listening on {}:{}", config::BIND_HOST, config::BIND_PORT);
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .app_data(routes::json_config())
            .service(routes::health)
            .service(routes::embed)
            .service(routes::embed_batch)
    })
    .bind((config::BIND_HOST, config::BIND_PORT))?
    .run()
    .await?;

    Ok(())
}
