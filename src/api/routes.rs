/*
 * Responsibility
 * - URL structure of the service
 * - /memories is behind the access-token gate, /health is open
 */
use axum::{Router, routing::get};

use crate::middleware;
use crate::state::AppState;

use crate::api::handlers::{
    health::health,
    memories::{create_memory, delete_memory, get_memory, list_memories, update_memory},
};

pub fn routes(state: AppState) -> Router<AppState> {
    let memories = Router::new()
        .route("/memories", get(list_memories).post(create_memory))
        .route(
            "/memories/{id}",
            get(get_memory).put(update_memory).delete(delete_memory),
        );

    let memories = middleware::auth::access::apply(memories, state);

    Router::new().route("/health", get(health)).merge(memories)
}
