//! Domain models for the selector front end.

mod app;

pub use app::{App, AppAction, AppState, StatusMessage};
