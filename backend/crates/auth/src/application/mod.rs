//! Application Layer
//!
//! Use cases orchestrating domain objects and repositories.

pub mod check_session;
pub mod config;
pub mod login;
pub mod logout;
pub mod register;
pub mod token;

pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use register::{RegisterInput, RegisterUseCase};
