//! Escape Genie CLI
//!
//! Terminal client for the Escape Genie travel recommendation service.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use escape_genie::{
    detail::DetailController,
    error::{AppError, Result},
    map::TextMap,
    models::{City, Config, Session},
    services::{Budget, DestinationApi, SearchRequest, TravelClient, TravelerType, TripScope},
    storage::{FileSessionStore, ResultsCache, SessionStore},
    view,
};

/// Escape Genie - Travel Recommendation Client
#[derive(Parser, Debug)]
#[command(
    name = "genie",
    version,
    about = "Find destinations, browse venues and reviews, leave your own"
)]
struct Cli {
    /// Path to state directory containing config and session files
    #[arg(short, long, default_value = "state")]
    state_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account
    Register {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },

    /// Log in and store the session
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },

    /// Drop the stored session
    Logout,

    /// Describe a trip and list matching destinations
    Search {
        /// Free-text description of the trip
        message: String,

        /// Who is travelling: solo, couple, family or student
        #[arg(long, default_value = "solo")]
        traveler_type: TravelerType,

        /// Trip scope: international or domestic
        #[arg(long, default_value = "international")]
        trip_scope: TripScope,

        /// Price bracket: any, budget, mid-range or luxury
        #[arg(long, default_value = "any")]
        budget: Budget,
    },

    /// Manage saved destinations
    Saved {
        #[command(subcommand)]
        action: Option<SavedAction>,
    },

    /// Open the detail view for a destination
    Show {
        /// Destination id or name from earlier search results
        city: String,

        /// Select a venue by id or name, revealing the map and reviews
        #[arg(long)]
        venue: Option<String>,
    },

    /// Submit a review for a destination
    Review {
        /// Destination id or name from earlier search results
        city: String,

        /// Star rating, 1 to 5
        #[arg(short, long)]
        rating: u8,

        /// Free-text comment
        #[arg(short, long)]
        comment: Option<String>,
    },

    /// Show or set the theme preference
    Theme {
        /// "dark" or "light"; omit to show the current preference
        mode: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum SavedAction {
    /// List saved destinations
    List,

    /// Save a destination by id or cached name
    Add { city: String },

    /// Remove a destination by id or name
    Remove { city: String },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.state_dir.join("config.toml");
    let config = Config::load_or_default(&config_path);
    config.validate()?;

    let client = TravelClient::new(&config.api)?;
    let store = FileSessionStore::new(cli.state_dir.join("session.json"));
    let cache = ResultsCache::new(cli.state_dir.join("results.json"));

    match cli.command {
        Command::Register { username, password } => {
            client.register(&username, &password).await?;
            println!("Account '{username}' created. Log in with 'genie login'.");
        }

        Command::Login { username, password } => {
            let session = client.login(&username, &password).await?;
            store.store_session(&session).await?;
            println!("Logged in as {}.", session.username);
        }

        Command::Logout => {
            store.clear_session().await?;
            println!("Logged out.");
        }

        Command::Search {
            message,
            traveler_type,
            trip_scope,
            budget,
        } => {
            let request = SearchRequest {
                message,
                traveler_type,
                trip_scope,
                budget,
            };
            let cities = client.search(&request).await?;
            cache.save(&cities).await?;

            if cities.is_empty() {
                println!("No destinations matched. Try different keywords.");
                return Ok(());
            }

            let saved_ids = saved_ids(&client, &store).await;
            for (index, city) in cities.iter().enumerate() {
                let marker = if saved_ids.contains(&city.id) {
                    " [saved]"
                } else {
                    ""
                };
                let tier = city
                    .cost_tier
                    .as_deref()
                    .map(|t| format!(" ({t})"))
                    .unwrap_or_default();
                println!("{:>2}. {}{tier}{marker}", index + 1, city.label());
                println!("    id: {}", city.id);
                if !city.description.is_empty() {
                    println!("    {}", city.description);
                }
            }
        }

        Command::Saved { action } => {
            let session = require_session(&store).await?;
            match action.unwrap_or(SavedAction::List) {
                SavedAction::List => {
                    print_saved(&client.saved_destinations(&session).await?);
                }
                SavedAction::Add { city } => {
                    let city = resolve_city(&city, &cache, &client, &store).await?;
                    client.save_destination(&city.id, &session).await?;
                    print_saved(&client.saved_destinations(&session).await?);
                }
                SavedAction::Remove { city } => {
                    let saved = client.saved_destinations(&session).await?;
                    let id = find_in(&saved, &city)
                        .map(|c| c.id.clone())
                        .ok_or_else(|| {
                            AppError::validation(format!("'{city}' is not a saved destination"))
                        })?;
                    client.remove_destination(&id, &session).await?;
                    print_saved(&client.saved_destinations(&session).await?);
                }
            }
        }

        Command::Show { city, venue } => {
            let city = resolve_city(&city, &cache, &client, &store).await?;
            let api: Arc<dyn DestinationApi> = Arc::new(client.clone());
            let mut controller = DetailController::new(api);

            controller.open(city);
            controller.wait_ready().await;

            if let Some(needle) = venue {
                let found = controller.state().venues.find(&needle).cloned();
                match found {
                    Some(venue) => controller.select_venue(venue),
                    None => log::warn!("No venue matching '{needle}'"),
                }
            }

            let dark_mode = store.dark_mode(config.ui.dark_mode).await?;
            let screen = view::build_detail_screen(controller.state(), &config.map, dark_mode);
            print!("{}", view::render_screen(&screen, &TextMap));
        }

        Command::Review {
            city,
            rating,
            comment,
        } => {
            let session = require_session(&store).await?;
            let city = resolve_city(&city, &cache, &client, &store).await?;
            let city_name = city.name.clone();

            let api: Arc<dyn DestinationApi> = Arc::new(client.clone());
            let mut controller = DetailController::new(api);
            controller.open(city);
            controller.wait_ready().await;

            controller.set_draft_rating(rating);
            controller.set_draft_comment(comment.unwrap_or_default());
            controller.submit_review(&session).await?;
            controller.wait_ready().await;

            let state = controller.state();
            let summary = view::rating_summary(state.average_rating(), state.reviews.len());
            println!("Review submitted for {city_name}.");
            println!("{} {}", summary.stars, summary.label);
            for review in &state.reviews {
                println!(
                    "  {} {} {}",
                    review.username,
                    view::stars(review.rating),
                    view::review_date(review)
                );
                if !review.comment.is_empty() {
                    println!("    {}", review.comment);
                }
            }
        }

        Command::Theme { mode } => match mode.as_deref() {
            None => {
                let dark_mode = store.dark_mode(config.ui.dark_mode).await?;
                println!("Theme: {}", if dark_mode { "dark" } else { "light" });
            }
            Some("dark") => {
                store.set_dark_mode(true).await?;
                println!("Theme set to dark.");
            }
            Some("light") => {
                store.set_dark_mode(false).await?;
                println!("Theme set to light.");
            }
            Some(other) => {
                return Err(AppError::validation(format!(
                    "Unknown theme '{other}'. Use 'dark' or 'light'."
                )));
            }
        },
    }

    Ok(())
}

/// The stored session, or an instruction to log in.
async fn require_session(store: &FileSessionStore) -> Result<Session> {
    store
        .session()
        .await?
        .ok_or_else(|| AppError::session("Not logged in. Run 'genie login' first."))
}

/// Saved-destination ids for flagging search results; empty when logged out
/// or the listing is unavailable.
async fn saved_ids(client: &TravelClient, store: &FileSessionStore) -> Vec<String> {
    let Ok(Some(session)) = store.session().await else {
        return Vec::new();
    };
    match client.saved_destinations(&session).await {
        Ok(saved) => saved.into_iter().map(|c| c.id).collect(),
        Err(e) => {
            log::debug!("Saved listing unavailable: {e}");
            Vec::new()
        }
    }
}

/// Resolve a destination by id or name: cached search results first, then
/// the saved list when a session exists.
async fn resolve_city(
    needle: &str,
    cache: &ResultsCache,
    client: &TravelClient,
    store: &FileSessionStore,
) -> Result<City> {
    if let Some(city) = cache.find(needle).await? {
        return Ok(city);
    }
    if let Ok(Some(session)) = store.session().await {
        if let Ok(saved) = client.saved_destinations(&session).await {
            if let Some(city) = find_in(&saved, needle) {
                return Ok(city.clone());
            }
        }
    }
    Err(AppError::validation(format!(
        "Destination '{needle}' not found. Run 'genie search' first."
    )))
}

fn find_in<'a>(cities: &'a [City], needle: &str) -> Option<&'a City> {
    let lowered = needle.to_lowercase();
    cities
        .iter()
        .find(|c| c.id == needle || c.name.to_lowercase() == lowered)
}

fn print_saved(cities: &[City]) {
    if cities.is_empty() {
        println!("No saved destinations yet.");
        return;
    }
    for city in cities {
        println!("  {} (id: {})", city.label(), city.id);
    }
}
