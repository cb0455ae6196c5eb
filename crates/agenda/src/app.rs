use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        contacts::{
            create_contact, delete_contact, get_contact, list_contacts, search_contacts,
            update_contact,
        },
        health::{health, readyz},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// There is no request timeout layer; a queued storage write cannot be cancelled.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // `/search` is registered before `/{id}`; axum prefers the static segment either way.
    let contact_routes = Router::new()
        .route("/", get(list_contacts).post(create_contact))
        .route("/search", get(search_contacts))
        .route(
            "/{id}",
            get(get_contact).put(update_contact).delete(delete_contact),
        );

    let api_routes = Router::new()
        .nest("/contatos", contact_routes)
        .layer(cors);

    Router::new()
        .route("/health", get(health))
        .route("/readyz", get(readyz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
