pub mod app;
pub mod context;
pub mod routes;
pub mod speech;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::{AppContext, HideVocab, UiApp, build_app_context};
