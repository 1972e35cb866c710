use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use futures::future::join_all;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use station_client::stations::{LastPlayed, Station, StationClient, StationClientConfig, StationError};

/// Query the radio station admin API.
#[derive(Debug, Parser)]
#[command(name = "station-client", version)]
struct Cli {
    /// Admin server base URL (defaults to $RDB_ADMIN_URL, then http://localhost:8000)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Give up on a request after this many seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every station as JSON
    Stations,
    /// Print one station as JSON
    Station { id: String },
    /// Print a station's recently played songs as JSON
    LastPlayed { station_id: String },
    /// Print the latest song on every station
    NowPlaying,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), StationError> {
    let mut config = match cli.base_url {
        Some(url) => StationClientConfig::new(url),
        None => StationClientConfig::from_env(),
    };
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let client = StationClient::new(config)?;

    match cli.command {
        Command::Stations => println!("{:#}", client.get_stations().await?),
        Command::Station { id } => println!("{:#}", client.get_station(&id).await?),
        Command::LastPlayed { station_id } => {
            println!("{:#}", client.get_last_played(&station_id).await?)
        }
        Command::NowPlaying => now_playing(&client).await?,
    }

    Ok(())
}

/// Look up every station's recent plays at once and print the newest of each.
async fn now_playing(client: &StationClient) -> Result<(), StationError> {
    let stations = client.stations().await?;
    info!("Fetching last played for {} stations", stations.len());

    let results = join_all(stations.iter().map(|s| client.last_played(&s.id))).await;

    for (station, result) in stations.iter().zip(results) {
        match result {
            Ok(plays) => println!("{}", now_playing_line(station, plays.first())),
            Err(e) => warn!(station = %station.id, "failed to fetch last played: {e}"),
        }
    }

    Ok(())
}

fn now_playing_line(station: &Station, latest: Option<&LastPlayed>) -> String {
    match latest {
        Some(play) => format!(
            "{}\t{}\t{}",
            station.name,
            play.last_played.format("%Y-%m-%d %H:%M"),
            play.song
        ),
        None => format!("{}\t-", station.name),
    }
}
