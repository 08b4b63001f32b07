//! # GitHub Profile Viewer
//!
//! Look up a GitHub user, render their profile and page through their most
//! recently updated repositories six at a time.
//!
//! ## Main Components
//!
//! - [`SearchController`]: validates the query, calls the API, routes results
//!   and failures to the render targets and owns the pagination state
//! - [`GitHubClient`]: [`ProfileApi`] implementation over the GitHub REST API
//! - [`ProfileRenderer`] / [`RepositoryRenderer`]: records to display views
//! - [`RenderSurface`]: the display targets a host provides
//! - [`ThemePreference`]: persisted light/dark mode
//!
//! ## Example
//!
//! ```no_run
//! use github_profile_viewer_lib::{GitHubClient, SearchController, TerminalSurface, Theme};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let api = GitHubClient::new("https://api.github.com")?;
//!     let mut controller = SearchController::new(api, TerminalSurface::new(Theme::Dark));
//!
//!     controller.set_query("octocat");
//!     controller.submit().await;
//!     controller.load_more();
//!
//!     Ok(())
//! }
//! ```

mod args;
mod client;
mod controller;
mod date;
mod error;
mod models;
mod pagination;
mod render;
mod surface;
mod terminal;
mod theme;

pub use crate::args::{Args, DEFAULT_API_URL, DEFAULT_USERNAME};
pub use crate::client::{GitHubClient, ProfileApi};
pub use crate::controller::{SearchController, SearchStatus};
pub use crate::date::{format_date, INVALID_DATE};
pub use crate::error::{ApiError, PreferenceError, NOT_FOUND_MESSAGE, RATE_LIMIT_MESSAGE};
pub use crate::models::{RepositorySummary, UserProfile};
pub use crate::pagination::{Page, PaginationState, PAGE_SIZE};
pub use crate::render::{
    Link, ProfileRenderer, ProfileView, RepoCard, Renderer, RepositoryRenderer, NO_BIO,
    NO_DESCRIPTION, NO_TWITTER, NO_WEBSITE, NOT_SPECIFIED,
};
pub use crate::surface::RenderSurface;
pub use crate::terminal::TerminalSurface;
pub use crate::theme::{PreferenceStore, Theme, ThemePreference, THEME_KEY};
