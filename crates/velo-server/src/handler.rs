use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json};
use serde::de::DeserializeOwned;
use serde_json::json;

use velo_store::{ItemStore, SessionStore, UserStore};
use velo_types::{Item, ItemId, ItemPatch, NewItem, NewUser, Session, SessionId, User, UserId};

use crate::error::{ServerError, ServerResult};

/// Shared handler state: one handle per record store.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemStore>,
    pub users: Arc<dyn UserStore>,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppState {
    pub fn new(
        items: Arc<dyn ItemStore>,
        users: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            items,
            users,
            sessions,
        }
    }

    /// Serve users and sessions from one store that holds both.
    pub fn with_accounts<A>(items: Arc<dyn ItemStore>, accounts: Arc<A>) -> Self
    where
        A: UserStore + SessionStore + 'static,
    {
        Self::new(items, accounts.clone(), accounts)
    }
}

/// Decode a JSON request body regardless of its declared content type.
fn decode_body<T: DeserializeOwned>(body: &Bytes) -> ServerResult<T> {
    serde_json::from_slice(body).map_err(|e| ServerError::BadRequest(e.to_string()))
}

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "velo-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn list_items(State(state): State<AppState>) -> ServerResult<Json<Vec<Item>>> {
    Ok(Json(state.items.get_items()?))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<Json<Item>> {
    Ok(Json(state.items.get_item(&ItemId::from(id))?))
}

/// `PATCH /items/:id`. The body must be a JSON object or `null`; recognized
/// string fields are applied and everything else is ignored.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ServerResult<Json<Item>> {
    let patch: ItemPatch = decode_body(&body)?;
    Ok(Json(state.items.update_item(&ItemId::from(id), &patch)?))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<StatusCode> {
    state.items.delete_item(&ItemId::from(id))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> ServerResult<impl IntoResponse> {
    let new: NewItem = decode_body(&body)?;
    new.validate()?;

    let item = state.items.create_item(new)?;
    let location = format!("/items/{}", item.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)))
}

/// `POST /users`. Requires a non-empty `name`.
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> ServerResult<impl IntoResponse> {
    let new: NewUser = decode_body(&body)?;
    new.validate()?;

    let user = state.users.create_user(new)?;
    let location = format!("/users/{}", user.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(user)))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<Json<User>> {
    Ok(Json(state.users.get_user(&UserId::from(id))?))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<Json<Session>> {
    Ok(Json(state.sessions.get_session(&SessionId::from(id))?))
}
