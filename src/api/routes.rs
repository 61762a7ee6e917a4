use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use crate::api::handlers::{
    AppState, require_token,
    squads::{create_squad, delete_squad, get_squad, list_squads, update_squad},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/squads", get(list_squads).post(create_squad))
        .route(
            "/api/squads/:id",
            get(get_squad).patch(update_squad).delete(delete_squad),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token))
        .with_state(state)
}
