use tracing::{debug, info, warn};

use crate::client::ProfileApi;
use crate::pagination::PaginationState;
use crate::render::{ProfileRenderer, RepoCard, Renderer, RepositoryRenderer};
use crate::surface::RenderSurface;

/// Where the controller is in its search lifecycle.
///
/// Errors are only put on screen once a search has settled or while the
/// search box holds text, so nothing flashes up before the user acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// No search has been issued yet.
    #[default]
    Idle,
    /// A profile lookup is in flight.
    Searching,
    /// At least one profile lookup has finished, successfully or not.
    Settled,
}

/// Drives search → profile → repositories → pages for one session.
///
/// Every action takes `&mut self`, so one request chain runs at a time and
/// each new result overwrites the render targets wholesale.
pub struct SearchController<A, S> {
    api: A,
    surface: S,
    search_box: String,
    status: SearchStatus,
    /// Present between a successful repository fetch and the next search.
    pagination: Option<PaginationState>,
    profiles: ProfileRenderer,
    cards: RepositoryRenderer,
}

impl<A: ProfileApi, S: RenderSurface> SearchController<A, S> {
    pub fn new(api: A, surface: S) -> Self {
        SearchController {
            api,
            surface,
            search_box: String::new(),
            status: SearchStatus::Idle,
            pagination: None,
            profiles: ProfileRenderer,
            cards: RepositoryRenderer,
        }
    }

    /// Replace the search box text without searching.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.search_box = text.into();
    }

    pub fn query(&self) -> &str {
        &self.search_box
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Repositories of the current user, if their list has been loaded.
    pub fn pagination(&self) -> Option<&PaginationState> {
        self.pagination.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Search for whatever is in the search box.
    pub async fn submit(&mut self) {
        let query = self.search_box.clone();
        self.search_user(&query).await;
    }

    /// Look up `raw` and, on success, render the profile and load the user's
    /// repositories. Blank input is ignored without touching the display.
    pub async fn search_user(&mut self, raw: &str) {
        let username = raw.trim();
        if username.is_empty() {
            debug!("Ignoring empty search");
            return;
        }

        let previous = self.status;
        self.status = SearchStatus::Searching;
        self.pagination = None;
        self.surface.hide_profile();
        self.surface.hide_error();

        info!("Searching for '{}'", username);
        match self.api.fetch_profile(username).await {
            Ok(profile) => {
                let view = self.profiles.render(&profile);
                self.surface.show_profile(&view);
                self.status = SearchStatus::Settled;
                self.fetch_repositories(&profile.repos_url).await;
            }
            Err(e) => {
                self.status = SearchStatus::Settled;
                if previous == SearchStatus::Settled || !self.search_box.trim().is_empty() {
                    warn!("Search for '{}' failed: {}", username, e);
                    self.surface.hide_profile();
                    self.surface.show_error(&e.to_string());
                } else {
                    debug!("Suppressing error before first search: {}", e);
                }
            }
        }
    }

    /// Load the repository list and render its first page.
    pub async fn fetch_repositories(&mut self, list_url: &str) {
        self.surface.show_repos_loading();
        self.surface.set_load_more_visible(false);

        match self.api.fetch_repositories(list_url).await {
            Ok(repos) => {
                let state = PaginationState::new(repos);
                if state.is_empty() {
                    info!("User has no public repositories");
                } else {
                    info!("Loaded {} repositories", state.len());
                }
                self.pagination = Some(state);
                self.load_more();
            }
            Err(e) => {
                warn!("Repository fetch failed: {}", e);
                self.surface.show_repos_message(&e.to_string());
            }
        }
    }

    /// Render the next page of repositories. The first page replaces the list,
    /// later pages are appended. Does nothing but keep the control hidden once
    /// the list is exhausted or while no list is loaded.
    pub fn load_more(&mut self) {
        let Some(pagination) = self.pagination.as_mut() else {
            self.surface.set_load_more_visible(false);
            return;
        };

        let page = pagination.next_page();
        let cards: Vec<RepoCard> = page.items.iter().map(|r| self.cards.render(r)).collect();
        let has_more = page.has_more;

        if page.replace {
            self.surface.replace_repos(&cards);
        } else if !cards.is_empty() {
            self.surface.append_repos(&cards);
        }
        debug!(
            "Rendered {} repositories ({} of {})",
            cards.len(),
            pagination.cursor(),
            pagination.len()
        );
        self.surface.set_load_more_visible(has_more);
    }
}
