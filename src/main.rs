use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use rewindcli::{cli, config, error, types::PkceToken, utils};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// List your playlists
    Playlists(PlaylistsOptions),

    /// Find songs that recur across years
    Analyze(AnalyzeOptions),

    /// Manage saved per-year song selections
    Songs(SongsOptions),

    #[clap(about = "Sync detected top-songs playlists into local storage")]
    Sync(SyncOptions),

    /// Cross-year report over saved songs
    Report(ReportOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    /// Only show detected top-songs playlists
    #[clap(long)]
    pub top_songs: bool,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Find songs that recur across years")]
pub struct AnalyzeOptions {
    #[command(subcommand)]
    pub command: AnalyzeSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum AnalyzeSubcommand {
    /// Analyze auto-detected top-songs playlists
    Playlists,

    /// Analyze pasted track links from per-year files
    Links(LinksOptions),
}

#[derive(Parser, Debug, Clone)]
pub struct LinksOptions {
    /// Year and file pairs, e.g. 2023=songs-2023.txt ("-" reads stdin); can be repeated
    #[clap(value_parser = utils::parse_year_input, required = true, num_args = 1..)]
    pub inputs: Vec<utils::YearInput>,
}

#[derive(Parser, Debug, Clone)]
pub struct SongsOptions {
    #[command(subcommand)]
    pub command: SongsSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SongsSubcommand {
    /// Save pasted track links for a year
    Add(SongsAddOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct SongsAddOpts {
    /// Year the pasted links belong to
    #[clap(long)]
    pub year: i32,

    /// File with pasted links (stdin when omitted)
    #[clap(long)]
    pub file: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct SyncOptions {
    /// Show the status of the last sync instead of running one
    #[clap(long)]
    pub status: bool,

    /// Take over a stale sync lock
    #[clap(long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ReportOptions {
    /// Only count selections ranked at this position or better (1-100, default 50)
    #[clap(long)]
    pub threshold: Option<u32>,

    /// Earliest year to include
    #[clap(long)]
    pub min_year: Option<i32>,

    /// Latest year to include
    #[clap(long)]
    pub max_year: Option<i32>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Playlists(opt) => cli::playlists(opt.top_songs).await,

        Command::Analyze(opt) => match opt.command {
            AnalyzeSubcommand::Playlists => cli::analyze_playlists().await,
            AnalyzeSubcommand::Links(l) => cli::analyze_links(l.inputs).await,
        },

        Command::Songs(opt) => match opt.command {
            SongsSubcommand::Add(a) => cli::add_songs(a.year, a.file).await,
        },

        Command::Sync(opt) => {
            if opt.status {
                cli::sync_status().await
            } else {
                cli::sync(opt.force).await
            }
        }

        Command::Report(opt) => cli::report(opt.threshold, opt.min_year, opt.max_year).await,

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
