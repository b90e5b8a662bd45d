//! Domain Layer

pub mod game_result;
pub mod repository;

pub use game_result::GameResult;
pub use repository::ResultRepository;
