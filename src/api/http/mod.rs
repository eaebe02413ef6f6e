// src/api/http/mod.rs

mod handlers;
mod router;

pub use handlers::{calc_handler, health_handler};
pub use router::http_router;
