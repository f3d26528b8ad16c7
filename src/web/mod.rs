pub mod middleware;
pub mod security;
pub mod state;

pub use state::AppState;
