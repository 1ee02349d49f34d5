pub mod app;
pub mod context;
pub mod guard;
pub mod routes;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{AppContext, SessionState, UiApp, build_app_context};
pub use routes::Route;
