use std::sync::Arc;

use cors_policy::{Cors, CorsOptions, OriginPredicate, ValidationError};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ValidationError> {
    let options = CorsOptions {
        allowed_origins: vec![
            "http://api.example.com".into(),
            "http://*.localhost:3000".into(),
        ],
        origin_predicate: OriginPredicate::origin(|origin| origin == "http://localhost:3000"),
        allowed_methods: vec!["GET".into(), "POST".into()],
        allowed_headers: vec![
            "Content-Type".into(),
            "X-Requested-With".into(),
            "X-Example-Trace".into(),
        ],
        exposed_headers: vec!["X-Example-Trace".into()],
        allow_credentials: true,
        max_age: Some(600),
        debug: true,
        ..CorsOptions::default()
    };

    let cors = Arc::new(Cors::new(options)?);

    Ok(AppState {
        cors,
        greeting: "Welcome to the Axum CORS demo!",
    })
}

pub mod middleware;
