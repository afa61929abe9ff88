//! Shared helpers for voxcast-axum integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use tower::ServiceExt;
use voxcast_axum::bootstrap::{CorsConfig, ServerConfig, bootstrap_with_client};
use voxcast_axum::routes::create_router;
use voxcast_core::{ArtifactStore, ConcurrencyPolicy, SynthesisClient, SynthesisError};

pub const ELVIRA: &str = "es-ES-ElviraNeural";
pub const SAMPLE_TEXT: &str = "Hola, esto es una prueba.";

/// Engine stand-in producing `ID3` + text, optionally slow or failing.
#[derive(Default)]
pub struct FakeEngine {
    pub delay: Duration,
    pub fail: AtomicBool,
    pub calls: AtomicUsize,
}

impl FakeEngine {
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub fn audio_for(text: &str) -> Vec<u8> {
        let mut audio = b"ID3".to_vec();
        audio.extend_from_slice(text.as_bytes());
        audio
    }
}

#[async_trait]
impl SynthesisClient for FakeEngine {
    async fn synthesize(&self, text: &str, _voice_id: &str) -> Result<Vec<u8>, SynthesisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        if self.fail.load(Ordering::SeqCst) {
            return Err(SynthesisError::Engine("service unavailable".into()));
        }
        Ok(Self::audio_for(text))
    }

    fn name(&self) -> &str {
        "fake"
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<ArtifactStore>,
    pub engine: Arc<FakeEngine>,
}

pub fn app_with(engine: FakeEngine, config: &ServerConfig) -> TestApp {
    let engine = Arc::new(engine);
    let ctx = bootstrap_with_client(config, Arc::clone(&engine) as Arc<dyn SynthesisClient>)
        .expect("bootstrap with fake engine");
    let store = Arc::clone(&ctx.store);
    TestApp {
        router: create_router(ctx, &CorsConfig::AllowAll),
        store,
        engine,
    }
}

pub fn test_app() -> TestApp {
    app_with(FakeEngine::default(), &ServerConfig::in_memory())
}

pub fn app_with_policy(engine: FakeEngine, policy: ConcurrencyPolicy) -> TestApp {
    let mut config = ServerConfig::in_memory();
    config.settings.policy = policy;
    app_with(engine, &config)
}

pub async fn get(router: &Router, uri: &str) -> Response<Body> {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(router: &Router, uri: &str, body: &serde_json::Value) -> Response<Body> {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn synthesize(router: &Router, text: &str, voice: &str) -> Response<Body> {
    post_json(
        router,
        "/api/synthesize",
        &serde_json::json!({ "text": text, "voiceId": voice }),
    )
    .await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = body_bytes(response).await;
    serde_json::from_slice(&body).unwrap_or_else(|e| panic!("Expected valid JSON body: {e}"))
}

pub fn header<'a>(response: &'a Response<Body>, name: &str) -> &'a str {
    response
        .headers()
        .get(name)
        .map_or("", |v| v.to_str().unwrap_or(""))
}
