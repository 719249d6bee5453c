//! API handlers for the library REST endpoints

pub mod extract;
pub mod health;
pub mod openapi;
pub mod resource;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::CorsConfig,
    models::{Book, Entity, Fine, Lending, Member, Notification, Reservation},
    AppState,
};

/// Resources registered with the router and the API document
pub struct Registry {
    router: Router<AppState>,
    doc: utoipa::openapi::OpenApi,
}

impl Registry {
    fn new() -> Self {
        Self {
            router: Router::new(),
            doc: openapi::ApiDoc::openapi(),
        }
    }

    /// Mount the five CRUD routes of `E` and document them
    pub fn register<E: Entity>(mut self) -> Self {
        self.router = self.router.merge(resource::routes::<E>());
        openapi::document::<E>(&mut self.doc);
        self
    }

    pub fn into_parts(self) -> (Router<AppState>, utoipa::openapi::OpenApi) {
        (self.router, self.doc)
    }
}

/// Every resource the server exposes, in registration order
pub fn registry() -> Registry {
    Registry::new()
        .register::<Book>()
        .register::<Member>()
        .register::<Lending>()
        .register::<Fine>()
        .register::<Reservation>()
        .register::<Notification>()
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    // Wildcards are not allowed together with credentials, so methods and
    // headers mirror the request instead.
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);
    let (resources, doc) = registry().into_parts();

    let api = resources
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
