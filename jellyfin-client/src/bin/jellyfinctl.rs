use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jellyfin_client::{
    ClientConfig, JellyfinClient,
    model::uuid::Uuid,
    report::{DtoKind, OutputFormat, ReportRequest, encode_query},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "jellyfinctl",
    version,
    about = "Inspect a Jellyfin server through its REST API"
)]
struct Cli {
    /// TOML client config (base_url, access_token, ...)
    #[arg(long, global = true, env = "JELLYFIN_CONFIG")]
    config: Option<PathBuf>,
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,
    /// Shorthand for `--format json`
    #[arg(long, global = true, conflicts_with = "format")]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Server name, version and host
    Info {
        /// Use the unauthenticated endpoint
        #[arg(long)]
        public: bool,
    },
    /// Connected clients and what they are playing
    Sessions {
        #[arg(long, value_name = "SECONDS")]
        active_within: Option<i32>,
    },
    /// Search hints for a term
    Search {
        term: String,
        #[arg(long)]
        limit: Option<i32>,
    },
    /// Live TV recordings
    Timers {
        /// Only recordings in progress
        #[arg(long)]
        active: bool,
    },
    /// Live TV guide
    Programs {
        #[arg(long = "channel", value_name = "ID")]
        channels: Vec<Uuid>,
        #[arg(long)]
        limit: Option<i32>,
        /// Only programs on air now
        #[arg(long)]
        airing: bool,
    },
    /// Scheduled tasks and their last result
    Tasks {
        /// Include hidden tasks
        #[arg(long)]
        all: bool,
    },
    /// Print the URL query string of a DTO read from a JSON file
    Query {
        /// JSON file, or `-` for stdin
        file: PathBuf,
        #[arg(long = "type", value_enum)]
        kind: DtoKind,
        /// Nest every key under this prefix (deep-object style)
        #[arg(long)]
        prefix: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        cli.format
    };

    let request = match cli.command {
        Command::Query { file, kind, prefix } => {
            let json = read_input(&file)?;
            let query = encode_query(kind, &json, prefix.as_deref())
                .with_context(|| format!("encoding {}", file.display()))?;
            println!("{query}");
            return Ok(());
        }
        Command::Info { public: false } => ReportRequest::Info,
        Command::Info { public: true } => ReportRequest::PublicInfo,
        Command::Sessions { active_within } => ReportRequest::Sessions {
            active_within_seconds: active_within,
        },
        Command::Search { term, limit } => ReportRequest::Search { term, limit },
        Command::Timers { active } => {
            ReportRequest::Timers { active_only: active }
        }
        Command::Programs {
            channels,
            limit,
            airing,
        } => ReportRequest::Programs {
            channels,
            limit,
            airing,
        },
        Command::Tasks { all } => ReportRequest::Tasks {
            include_hidden: all,
        },
    };

    let config = ClientConfig::load(cli.config.as_deref())
        .context("loading client configuration")?;
    let client =
        JellyfinClient::new(&config).context("building HTTP client")?;

    let report = request
        .fetch(&client, client.user_id())
        .await
        .with_context(|| format!("querying {}", client.base_url()))?;
    print!("{}", report.render(format)?);
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut json = String::new();
        io::stdin()
            .read_to_string(&mut json)
            .context("reading stdin")?;
        return Ok(json);
    }
    fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))
}
