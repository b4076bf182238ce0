use anyhow::Result;
use clap::Parser;
use music_catalog::driver::{render, run_scenario, DemoConfig, OutputFormat};
use music_catalog::SortCriterion;

#[derive(Parser, Debug)]
#[command(name = "music-catalog")]
#[command(about = "Build a demo playlist catalog and print it", long_about = None)]
struct Args {
    /// Playlists to create (can be specified multiple times; default: rock, pop, hardcore, techno)
    #[arg(long = "playlist")]
    playlists: Vec<String>,

    /// Sort step as PLAYLIST=CRITERION, criterion one of title, artist, duration
    /// (can be specified multiple times; replaces the default sort steps)
    #[arg(long = "sort", value_parser = parse_sort_step)]
    sorts: Vec<(String, SortCriterion)>,

    /// Toggle a favorite as PLAYLIST=TITLE (can be specified multiple times)
    #[arg(long = "favorite", value_parser = parse_favorite)]
    favorites: Vec<(String, String)>,

    /// Print the final catalog as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn split_pair(value: &str) -> Result<(&str, &str), String> {
    value
        .split_once('=')
        .ok_or_else(|| format!("expected PLAYLIST=VALUE, got '{}'", value))
}

fn parse_sort_step(value: &str) -> Result<(String, SortCriterion), String> {
    let (playlist, criterion) = split_pair(value)?;
    let criterion = criterion.parse::<SortCriterion>().map_err(|e| e.to_string())?;
    Ok((playlist.to_string(), criterion))
}

fn parse_favorite(value: &str) -> Result<(String, String), String> {
    let (playlist, title) = split_pair(value)?;
    Ok((playlist.to_string(), title.to_string()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = DemoConfig::default().with_favorites(args.favorites);

    if !args.playlists.is_empty() {
        log::info!("Using {} playlist(s): {:?}", args.playlists.len(), args.playlists);
        config = config.with_playlists(args.playlists);
    }
    if !args.sorts.is_empty() {
        config = config.with_sorts(args.sorts);
    }
    if args.json {
        config = config.with_format(OutputFormat::Json);
    }

    let playlists = run_scenario(&config)?;
    log::info!("Catalog ready: {} playlist(s)", playlists.len());

    println!("{}", render(&playlists, config.format)?);

    Ok(())
}
