pub mod api;
pub mod fields;
pub mod models;
pub mod processors;

pub use api::{ScoreboardClient, build_document, run};
pub use models::Game;
