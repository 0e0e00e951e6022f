#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use quick_shortener::prelude::*;
use quick_shortener::routes::build_router;
use std::path::PathBuf;
use std::sync::Arc;

pub const BASE_URL: &str = "https://s.example.com";

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(ShortenerStore::default()), BASE_URL)
}

pub fn create_state_with_generator(generator: Arc<dyn KeyGenerator>, max_attempts: usize) -> AppState {
    AppState::new(Arc::new(ShortenerStore::new(generator, max_attempts)), BASE_URL)
}

pub fn create_test_app(state: AppState) -> Router {
    build_router(state, static_dir())
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(create_test_app(state)).unwrap()
}

/// Generator that always returns the same key, forcing collisions.
pub struct FixedKeyGenerator(pub &'static str);

impl KeyGenerator for FixedKeyGenerator {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}
