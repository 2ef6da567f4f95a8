use crate::engine::{Envelope, Extractor, FixedEnvelope, SystemEnvelope};
use crate::tools::highscores::{HighscoreCategory, HighscoresQuery};
use crate::types::{ApiDetails, ApiResponse};
use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "tibia-extract",
    version,
    about = "Extract creatures and highscores from saved Tibia pages (JSON only)"
)]
pub struct Cli {
    #[command(subcommand)]
    cmd: Command,
    #[command(flatten)]
    stamp: StampArgs,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Boosted creature + creature list from the library page
    Overview {
        /// HTML file, or `-` for stdin
        input: String,
    },
    /// One page of a highscore table
    Highscores(HighscoresArgs),
}

#[derive(Args)]
struct HighscoresArgs {
    /// HTML file, or `-` for stdin
    input: String,
    #[arg(long)]
    world: String,
    /// Category name or alias (e.g. experience, exp, loyalty)
    #[arg(long)]
    category: HighscoreCategory,
    #[arg(long, default_value = "all")]
    vocation: String,
    #[arg(long, default_value_t = 1)]
    page: u32,
}

#[derive(Args)]
struct StampArgs {
    /// Release name reported in the response envelope
    #[arg(long, global = true)]
    release: Option<String>,
    /// Commit id reported in the response envelope
    #[arg(long, global = true)]
    commit: Option<String>,
    /// Use this RFC 3339 timestamp instead of the current time
    #[arg(long, global = true)]
    fixed_timestamp: Option<DateTime<Utc>>,
}

impl StampArgs {
    fn envelope(&self) -> Box<dyn Envelope> {
        let mut details = ApiDetails::default();
        if let Some(release) = &self.release {
            details = details.with_release(release.as_str());
        }
        if let Some(commit) = &self.commit {
            details = details.with_commit(commit.as_str());
        }
        match self.fixed_timestamp {
            Some(ts) => Box::new(FixedEnvelope::new(details, ts)),
            None => Box::new(SystemEnvelope::new(details)),
        }
    }
}

pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let envelope = cli.stamp.envelope();
    let extractor = Extractor::new(envelope.as_ref());

    let ok = match cli.cmd {
        Command::Overview { input } => finish(
            read_input(&input).and_then(|html| Ok(extractor.overview(&html)?)),
        ),
        Command::Highscores(args) => {
            let query = HighscoresQuery::new(args.world, args.category)
                .with_vocation(args.vocation)
                .with_page(args.page);
            finish(read_input(&args.input).and_then(|html| Ok(extractor.highscores(&query, &html)?)))
        }
    };
    if !ok {
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read file '{input}'"))
    }
}

/// Print the result as an `ApiResponse`; returns whether it succeeded.
fn finish<T: serde::Serialize>(res: anyhow::Result<T>) -> bool {
    match res {
        Ok(v) => {
            print_json(ApiResponse::ok(v));
            true
        }
        Err(e) => {
            tracing::error!("{e:#}");
            print_json(ApiResponse::<()>::err(format!("{e:#}")));
            false
        }
    }
}

fn print_json<T: serde::Serialize>(val: T) {
    match serde_json::to_string_pretty(&val) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error serializing to JSON: {e}"),
    }
}
