use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::render::{Link, ProfileView, RepoCard};
use crate::surface::RenderSurface;
use crate::theme::Theme;

/// Render targets printed to stdout.
pub struct TerminalSurface {
    theme: Theme,
    loading: Option<ProgressBar>,
    load_more_visible: bool,
    shown_cards: usize,
}

impl TerminalSurface {
    pub fn new(theme: Theme) -> Self {
        TerminalSurface {
            theme,
            loading: None,
            load_more_visible: false,
            shown_cards: 0,
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        println!("Switched to {} mode", theme);
    }

    pub fn load_more_visible(&self) -> bool {
        self.load_more_visible
    }

    fn spinner_style(&self) -> ProgressStyle {
        let template = match self.theme {
            Theme::Dark => "{spinner:.green} {wide_msg}",
            Theme::Light => "{spinner:.blue} {wide_msg}",
        };
        ProgressStyle::default_spinner()
            .template(template)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
    }

    fn rule(&self) -> &'static str {
        match self.theme {
            Theme::Dark => "════════════════════════════════════════",
            Theme::Light => "────────────────────────────────────────",
        }
    }

    fn stop_loading(&mut self) {
        if let Some(pb) = self.loading.take() {
            pb.finish_and_clear();
        }
    }

    fn print_cards(&mut self, cards: &[RepoCard]) {
        for card in cards {
            self.shown_cards += 1;
            println!("{:>3}. {}  <{}>", self.shown_cards, card.name, card.url);
            println!("     {}", card.description);
            let mut meta = Vec::with_capacity(4);
            if let Some(language) = &card.language {
                meta.push(format!("● {language}"));
            }
            meta.push(format!("★ {}", card.stars));
            meta.push(format!("⑂ {}", card.forks));
            meta.push(format!("updated {}", card.updated));
            println!("     {}", meta.join("   "));
        }
    }
}

fn link(link: &Link) -> String {
    match &link.href {
        Some(href) if *href != link.text => format!("{} <{}>", link.text, href),
        _ => link.text.clone(),
    }
}

impl RenderSurface for TerminalSurface {
    fn show_profile(&mut self, view: &ProfileView) {
        println!("{}", self.rule());
        println!("{} ({})", view.display_name, view.username);
        println!("{}", view.profile_url);
        println!();
        println!("{}", view.bio);
        println!();
        println!("  Location   {}", view.location);
        println!("  Company    {}", view.company);
        println!("  Website    {}", link(&view.blog));
        println!("  Twitter    {}", link(&view.twitter));
        println!("  Joined     {}", view.joined);
        println!(
            "  Repos {}   Followers {}   Following {}",
            view.public_repos, view.followers, view.following
        );
        println!("{}", self.rule());
    }

    fn hide_profile(&mut self) {}

    fn show_error(&mut self, message: &str) {
        eprintln!("✗ {message}");
    }

    fn hide_error(&mut self) {}

    fn show_repos_loading(&mut self) {
        self.stop_loading();
        let pb = ProgressBar::new_spinner();
        pb.set_style(self.spinner_style());
        pb.set_message("Loading repositories...");
        pb.enable_steady_tick(Duration::from_millis(80));
        self.loading = Some(pb);
    }

    fn show_repos_message(&mut self, message: &str) {
        self.stop_loading();
        self.shown_cards = 0;
        println!("{message}");
    }

    fn replace_repos(&mut self, cards: &[RepoCard]) {
        self.stop_loading();
        self.shown_cards = 0;
        if cards.is_empty() {
            println!("No public repositories.");
        }
        self.print_cards(cards);
    }

    fn append_repos(&mut self, cards: &[RepoCard]) {
        self.print_cards(cards);
    }

    fn set_load_more_visible(&mut self, visible: bool) {
        self.load_more_visible = visible;
        if visible {
            println!("Type :more to load more repositories");
        }
    }
}
