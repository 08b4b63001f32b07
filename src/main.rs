use clap::Parser;
use dotenv::dotenv;
use std::error::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use github_profile_viewer_lib::{
    Args, GitHubClient, PreferenceStore, SearchController, TerminalSurface, ThemePreference,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenv().ok();

    // Initialize the tracing logger, quiet unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let store = PreferenceStore::load_or_default(args.prefs.clone());
    let prefs_path = store.path().to_path_buf();
    let mut theme = ThemePreference::restore(store);
    info!("Restored {} mode from {}", theme.theme(), prefs_path.display());

    let api = GitHubClient::new(&args.api_url)?;
    let mut controller = SearchController::new(api, TerminalSurface::new(theme.theme()));

    // Pre-fill the search box; nothing is fetched until the user presses Enter
    controller.set_query(args.username.clone());
    println!(
        "Search GitHub users. Enter a username, or press Enter to search for '{}'.",
        controller.query()
    );
    println!("Commands: :more  :theme  :quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            ":quit" | ":q" => break,
            ":more" | ":m" => {
                if controller.surface().load_more_visible() {
                    controller.load_more();
                } else {
                    println!("No more repositories to load");
                }
            }
            ":theme" | ":t" => match theme.toggle() {
                Ok(mode) => controller.surface_mut().set_theme(mode),
                Err(e) => error!("Could not save theme: {}", e),
            },
            "" => controller.submit().await,
            query => {
                controller.set_query(query);
                controller.submit().await;
            }
        }
    }

    Ok(())
}
