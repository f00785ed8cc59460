//! Client library for the blog-list service
//!
//! Three pieces: [`session::SessionStore`] persists the signed-in session
//! blob between runs, [`api::ApiClient`] speaks the REST contract and
//! attaches the bearer token, and [`app::App`] is the top-level state
//! container tying both to an in-memory blog list.

pub mod api;
pub mod app;
pub mod session;

pub use api::ApiClient;
pub use api::ApiClientError;
pub use api::Blog;
pub use app::App;
pub use app::AppError;
pub use session::Session;
pub use session::SessionStore;
