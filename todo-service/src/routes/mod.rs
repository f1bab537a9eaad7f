//! Axum route table for the todo notes REST API.

mod extract;
mod items;
mod notes;

use axum::Router;
use axum::routing::{get, put};
use std::sync::Arc;

use crate::db::Database;

pub struct AppState {
    pub db: Database,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/todos",
            get(notes::list_notes)
                .post(notes::create_note)
                .delete(notes::delete_all_notes),
        )
        .route(
            "/todos/items/:item_id",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .route(
            "/todos/:note_id",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
        .route("/todos/:note_id/completed", put(notes::complete_note))
        .route(
            "/todos/:note_id/items",
            get(items::list_items)
                .post(items::create_item)
                .delete(items::delete_items),
        )
        .with_state(state)
}
