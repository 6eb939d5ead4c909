pub mod config;
pub mod error;
pub mod http_client;
pub mod models;
pub mod routes;
pub mod sources;

use sources::ComicSource;

pub struct AppState {
    pub source: Box<dyn ComicSource>,
}
