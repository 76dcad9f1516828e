//! HTTP server for the Velo item service.
//!
//! A thin layer over the [`velo_store`] traits: it decodes requests, calls
//! exactly one store operation, and maps the outcome to a status code.
//!
//! | Route                | Success            | Missing record |
//! |----------------------|--------------------|----------------|
//! | `GET /items`         | 200 + JSON array   | n/a            |
//! | `POST /items`        | 201 + `Location`   | n/a            |
//! | `GET /items/:id`     | 200 + JSON item    | 404            |
//! | `PATCH /items/:id`   | 200 + JSON item    | 404            |
//! | `DELETE /items/:id`  | 204                | 404            |
//! | `POST /users`        | 201 + `Location`   | n/a            |
//! | `GET /users/:id`     | 200 + JSON user    | 404            |
//! | `GET /sessions/:id`  | 200 + JSON session | 404            |
//!
//! Any other method on a known path is 405.
//! Undecodable bodies are 400 and never reach the store; any other store
//! failure is 500.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::AppState;
pub use router::build_router;
pub use server::VeloServer;
