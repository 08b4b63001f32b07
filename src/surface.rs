use crate::render::{ProfileView, RepoCard};

/// Display targets the controller writes into. The host binds them to real
/// output: a terminal, a window, a test recorder.
///
/// The profile and error areas are mutually exclusive: `show_profile` hides
/// the error and `show_error` hides the profile.
pub trait RenderSurface {
    fn show_profile(&mut self, view: &ProfileView);
    fn hide_profile(&mut self);

    fn show_error(&mut self, message: &str);
    fn hide_error(&mut self);

    /// Placeholder shown in the repository area while the list is loading.
    fn show_repos_loading(&mut self);
    /// Inline message in the repository area; replaces its contents.
    fn show_repos_message(&mut self, message: &str);
    fn replace_repos(&mut self, cards: &[RepoCard]);
    fn append_repos(&mut self, cards: &[RepoCard]);

    fn set_load_more_visible(&mut self, visible: bool);
}
