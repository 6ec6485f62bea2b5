use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::auth::AccessPolicy;
use crate::config::SecurityConfig;
use crate::database::Repository;
use crate::handlers::{self, resource, ResourceState};
use crate::middleware::identify_caller;
use crate::resources::{
    Articles, HelpRequest, MenuItemReview, RecommendationRequest, Resource, UCSBDate, UCSBDiningCommons,
    UCSBDiningCommonsMenuItem, UCSBOrganization,
};
use crate::state::AppState;

/// The five endpoints for one resource type
pub fn resource_routes<R: Resource>(repo: Arc<dyn Repository<R>>, policy: Arc<AccessPolicy>) -> Router {
    Router::new()
        .route(&format!("/api/{}/all", R::PATH), get(resource::list::<R>))
        .route(&format!("/api/{}/post", R::PATH), post(resource::create::<R>))
        .route(
            &format!("/api/{}", R::PATH),
            get(resource::get_one::<R>)
                .put(resource::update::<R>)
                .delete(resource::delete::<R>),
        )
        .with_state(ResourceState::new(repo, policy))
}

fn mount<R: Resource>(router: Router, state: &AppState) -> Router {
    router.merge(resource_routes::<R>(
        state.storage.repository::<R>(),
        Arc::clone(&state.policy),
    ))
}

/// Full application router
pub fn app(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/currentUser", get(handlers::current_user))
        .with_state(state.clone());

    router = mount::<HelpRequest>(router, &state);
    router = mount::<RecommendationRequest>(router, &state);
    router = mount::<UCSBDiningCommonsMenuItem>(router, &state);
    router = mount::<UCSBOrganization>(router, &state);
    router = mount::<Articles>(router, &state);
    router = mount::<MenuItemReview>(router, &state);
    router = mount::<UCSBDate>(router, &state);
    router = mount::<UCSBDiningCommons>(router, &state);

    let mut router = router
        .layer(from_fn_with_state(state.jwt.clone(), identify_caller))
        .layer(DefaultBodyLimit::max(state.config.api.max_request_size_bytes))
        .layer(cors_layer(&state.config.security));

    if state.config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}
