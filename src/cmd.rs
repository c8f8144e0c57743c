use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};

use crate::api_client::MatchesApiClient;
use crate::client::Client;
use crate::config::{FetchConfig, API_BASE_URL, DEFAULT_MATCHWEEK};
use crate::error::{Error, IOError, JSONError};
use crate::fetch::{fetch_matchweek, fetch_season};
use crate::refresh;
use crate::table::LeagueTable;
use crate::types::SeasonMatches;

#[derive(Parser, Debug)]
#[command(
    name = "matchday-fetch",
    version,
    about = "Fetch Premier League match results from the official API"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,

    /// Matchweek number to fetch
    #[arg(long, default_value_t = DEFAULT_MATCHWEEK)]
    pub matchweek: u32,

    /// Fetch all matchweeks (1-38)
    #[arg(long)]
    pub all: bool,

    /// Output file path (default: stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub api: ApiArgs,
}

#[derive(Args, Debug)]
pub struct ApiArgs {
    #[arg(long, hide = true, default_value = API_BASE_URL)]
    pub base_url: String,
}

impl ApiArgs {
    /// Season and competition are always the fixed ones; only the host can
    /// be pointed elsewhere.
    pub fn config(&self) -> FetchConfig {
        FetchConfig::default().with_base_url(self.base_url.clone())
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Cmd {
    /// Re-fetch matchweeks with unfinished matches in a file written by `--all`
    Refresh { file: PathBuf },
    /// Derive the league table from a file written by `--all`
    Table {
        file: PathBuf,

        /// Output file path (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Single(u32),
    All,
}

fn render<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    serde_json::to_string_pretty(value).map_err(|e| JSONError::new(None, e).into())
}

/// Writes the JSON text to `output` when given, otherwise to `stdout`. Both
/// get exactly the same bytes.
fn emit(json: &str, output: Option<&Path>, stdout: &mut impl Write) -> Result<(), Error> {
    match output {
        Some(path) => {
            fs::write(path, format!("{json}\n")).map_err(|e| IOError::new(path, e))?;
            info!("Data saved to {}", path.display());
        }
        None => {
            writeln!(stdout, "{json}").map_err(Error::Stdout)?;
            stdout.flush().map_err(Error::Stdout)?;
        }
    }
    Ok(())
}

fn read_season(file: &Path) -> Result<SeasonMatches, Error> {
    let raw = fs::read_to_string(file).map_err(|e| IOError::new(file, e))?;
    serde_json::from_str(&raw).map_err(|e| JSONError::new(Some(file.to_path_buf()), e).into())
}

pub async fn fetch<C>(
    client: &C,
    config: &FetchConfig,
    mode: Mode,
    output: Option<&Path>,
    stdout: &mut impl Write,
) -> Result<(), Error>
where
    C: Client + ?Sized,
{
    let json = match mode {
        Mode::All => render(&fetch_season(client, config).await)?,
        Mode::Single(matchweek) => {
            info!("Fetching matchweek {matchweek}...");
            let Some(data) = fetch_matchweek(client, matchweek).await else {
                error!("Failed to fetch data. The API might be unavailable, blocked, or require authentication.");
                error!("If you're running this in a restricted environment, the domain might be blocked.");
                error!("Try running this from a different network or machine.");
                return Err(Error::NoData { matchweek });
            };
            render(&data)?
        }
    };

    emit(&json, output, stdout)
}

pub async fn refresh_file(file: &Path, config: FetchConfig) -> anyhow::Result<()> {
    let mut season = read_season(file)?;

    let weeks = refresh::stale_matchweeks(&season, chrono::Local::now().naive_local());
    if weeks.is_empty() {
        info!("No past matchweeks to fetch");
        return Ok(());
    }
    let listed: Vec<String> = weeks.iter().map(u32::to_string).collect();
    info!("Matchweeks to fetch: {}", listed.join(", "));

    let client = MatchesApiClient::new(FetchConfig {
        season: season.season,
        competition: season.competition,
        ..config
    })?;
    let fetched = refresh::fetch_matchweeks(&client, &weeks).await?;
    refresh::merge(&mut season, fetched);

    emit(&render(&season)?, Some(file), &mut io::sink())?;
    Ok(())
}

pub fn write_table(file: &Path, output: Option<&Path>, stdout: &mut impl Write) -> anyhow::Result<()> {
    let season = read_season(file)?;
    let standings = LeagueTable::new(&season).standings();
    emit(&render(&standings)?, output, stdout)?;
    Ok(())
}

/// Last line logged before exiting with an error. Fetch failures have already
/// been explained by the time they get here.
pub fn exit_message(err: &anyhow::Error) -> Option<String> {
    match err.downcast_ref::<Error>() {
        Some(Error::NoData { .. }) => None,
        _ => Some(format!("{err:#}")),
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.api.config();

        match self.cmd {
            Some(Cmd::Refresh { file }) => refresh_file(&file, config).await,
            Some(Cmd::Table { file, output }) => {
                write_table(&file, output.as_deref(), &mut io::stdout())
            }
            None => {
                let client = MatchesApiClient::new(config.clone())?;
                let mode = if self.all {
                    Mode::All
                } else {
                    Mode::Single(self.matchweek)
                };
                fetch(&client, &config, mode, self.output.as_deref(), &mut io::stdout()).await?;
                Ok(())
            }
        }
    }
}
