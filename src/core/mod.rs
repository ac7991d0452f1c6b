//! Core module - error type, application state and the access guard

pub mod error;
pub mod guard;
pub mod state;

pub use error::AppError;
pub use guard::{
    AccessDecision, IDENTITY_KEY, LOGIN_DESTINATION, LogNavigator, Navigator, access_guard,
    evaluate, mint_session_token,
};
pub use state::AppState;
