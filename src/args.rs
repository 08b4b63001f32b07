use clap::Parser;
use std::path::PathBuf;

/// Username placed in the search box on start. It is not submitted until the
/// user presses Enter.
pub const DEFAULT_USERNAME: &str = "youssefsabrii";

/// Public GitHub REST endpoint used when no override is configured.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub profile viewer: look up a user, show their profile and page through
/// their most recently updated repositories.
#[derive(Parser, Debug, Clone)]
#[clap(
    author,
    version,
    about,
    long_about = "Interactive terminal viewer for GitHub profiles. Type a username and press Enter to search, ':more' to load the next page of repositories, ':theme' to switch between light and dark mode and ':quit' to exit."
)]
pub struct Args {
    /// Username pre-filled in the search box.
    #[clap(short, long, default_value = DEFAULT_USERNAME)]
    pub username: String,

    /// Base URL of the GitHub REST API.
    #[clap(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// File holding persisted preferences such as the theme.
    /// Defaults to a file under the user's config directory.
    #[clap(long, env = "PROFILE_VIEWER_PREFS", value_name = "PATH")]
    pub prefs: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_prefill_username_and_public_api() {
        let args = Args::try_parse_from(["github-profile-viewer"]).unwrap();
        assert_eq!(args.username, DEFAULT_USERNAME);
        assert_eq!(args.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn username_can_be_overridden() {
        let args = Args::try_parse_from(["github-profile-viewer", "-u", "octocat"]).unwrap();
        assert_eq!(args.username, "octocat");
    }
}
