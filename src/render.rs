//! Pure mappings from API records to display-ready views.
//!
//! Renderers never touch a display themselves; the views they produce are
//! handed to a [`RenderSurface`](crate::surface::RenderSurface).

use crate::date::format_date;
use crate::models::{present, RepositorySummary, UserProfile};

pub const NO_BIO: &str = "No bio available";
pub const NOT_SPECIFIED: &str = "Not specified";
pub const NO_WEBSITE: &str = "No website";
pub const NO_TWITTER: &str = "No Twitter";
pub const NO_DESCRIPTION: &str = "No description available";

const TWITTER_BASE: &str = "https://twitter.com/";

/// Maps one record to a view.
pub trait Renderer {
    type Input;
    type View;

    fn render(&self, input: &Self::Input) -> Self::View;
}

/// Text with an optional link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub avatar_url: String,
    pub avatar_alt: String,
    pub display_name: String,
    pub username: String,
    pub bio: String,
    pub location: String,
    pub company: String,
    pub joined: String,
    pub profile_url: String,
    pub followers: String,
    pub following: String,
    pub public_repos: String,
    pub blog: Link,
    pub twitter: Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCard {
    pub name: String,
    pub url: String,
    pub description: String,
    /// `None` means the card has no language element at all.
    pub language: Option<String>,
    pub stars: String,
    pub forks: String,
    pub updated: String,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProfileRenderer;

#[derive(Debug, Default, Clone, Copy)]
pub struct RepositoryRenderer;

impl Renderer for ProfileRenderer {
    type Input = UserProfile;
    type View = ProfileView;

    fn render(&self, user: &UserProfile) -> ProfileView {
        ProfileView {
            avatar_url: user.avatar_url.clone(),
            avatar_alt: format!("{} avatar", user.login),
            display_name: or_fallback(&user.name, user.login.as_str()),
            username: format!("@{}", user.login),
            bio: or_fallback(&user.bio, NO_BIO),
            location: or_fallback(&user.location, NOT_SPECIFIED),
            company: or_fallback(&user.company, NOT_SPECIFIED),
            joined: format_date(&user.created_at),
            profile_url: user.html_url.clone(),
            followers: user.followers.to_string(),
            following: user.following.to_string(),
            public_repos: user.public_repos.to_string(),
            blog: blog_link(present(&user.blog)),
            twitter: twitter_link(present(&user.twitter_username)),
        }
    }
}

impl Renderer for RepositoryRenderer {
    type Input = RepositorySummary;
    type View = RepoCard;

    fn render(&self, repo: &RepositorySummary) -> RepoCard {
        RepoCard {
            name: repo.name.clone(),
            url: repo.html_url.clone(),
            description: present(&repo.description)
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            language: present(&repo.language).map(str::to_string),
            stars: repo.stargazers_count.to_string(),
            forks: repo.forks_count.to_string(),
            updated: format_date(&repo.updated_at),
        }
    }
}

fn or_fallback(value: &Option<String>, fallback: &str) -> String {
    present(value).unwrap_or(fallback).to_string()
}

fn blog_link(blog: Option<&str>) -> Link {
    match blog {
        Some(blog) => {
            let href = if blog.starts_with("http") {
                blog.to_string()
            } else {
                format!("https://{blog}")
            };
            Link {
                text: blog.to_string(),
                href: Some(href),
            }
        }
        None => Link {
            text: NO_WEBSITE.to_string(),
            href: None,
        },
    }
}

fn twitter_link(handle: Option<&str>) -> Link {
    match handle {
        Some(handle) => Link {
            text: format!("@{handle}"),
            href: Some(format!("{TWITTER_BASE}{handle}")),
        },
        None => Link {
            text: NO_TWITTER.to_string(),
            href: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserProfile {
        UserProfile {
            login: "octocat".to_string(),
            name: None,
            avatar_url: "https://avatars.githubusercontent.com/u/583231".to_string(),
            html_url: "https://github.com/octocat".to_string(),
            repos_url: "https://api.github.com/users/octocat/repos".to_string(),
            bio: None,
            location: None,
            company: None,
            blog: None,
            twitter_username: None,
            followers: 3938,
            following: 9,
            public_repos: 8,
            created_at: "2011-01-25T18:44:36Z".to_string(),
        }
    }

    #[test]
    fn missing_fields_fall_back() {
        let view = ProfileRenderer.render(&user());
        assert_eq!(view.display_name, "octocat");
        assert_eq!(view.username, "@octocat");
        assert_eq!(view.avatar_alt, "octocat avatar");
        assert_eq!(view.bio, NO_BIO);
        assert_eq!(view.location, NOT_SPECIFIED);
        assert_eq!(view.company, NOT_SPECIFIED);
        assert_eq!(view.blog, Link { text: NO_WEBSITE.into(), href: None });
        assert_eq!(view.twitter, Link { text: NO_TWITTER.into(), href: None });
        assert_eq!(view.joined, "Jan 25, 2011");
        assert_eq!(view.followers, "3938");
    }

    #[test]
    fn empty_name_falls_back_to_login() {
        let mut u = user();
        u.name = Some(String::new());
        assert_eq!(ProfileRenderer.render(&u).display_name, "octocat");
        u.name = Some("The Octocat".into());
        assert_eq!(ProfileRenderer.render(&u).display_name, "The Octocat");
    }

    #[test]
    fn blog_gets_https_only_when_schemeless() {
        let mut u = user();
        u.blog = Some("example.com".into());
        let blog = ProfileRenderer.render(&u).blog;
        assert_eq!(blog.text, "example.com");
        assert_eq!(blog.href.as_deref(), Some("https://example.com"));

        u.blog = Some("http://example.com".into());
        let blog = ProfileRenderer.render(&u).blog;
        assert_eq!(blog.href.as_deref(), Some("http://example.com"));
    }

    #[test]
    fn twitter_handle_links_to_profile() {
        let mut u = user();
        u.twitter_username = Some("github".into());
        let twitter = ProfileRenderer.render(&u).twitter;
        assert_eq!(twitter.text, "@github");
        assert_eq!(twitter.href.as_deref(), Some("https://twitter.com/github"));
    }

    #[test]
    fn repo_card_omits_missing_language() {
        let repo = RepositorySummary {
            name: "Hello-World".into(),
            html_url: "https://github.com/octocat/Hello-World".into(),
            description: Some(String::new()),
            language: None,
            stargazers_count: 80,
            forks_count: 9,
            updated_at: "2011-01-26T19:14:43Z".into(),
        };
        let card = RepositoryRenderer.render(&repo);
        assert_eq!(card.language, None);
        assert_eq!(card.description, NO_DESCRIPTION);
        assert_eq!(card.stars, "80");
        assert_eq!(card.forks, "9");
        assert_eq!(card.updated, "Jan 26, 2011");
    }
}
