pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod store;

pub use routes::router;

use crate::store::Store;

pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}
