use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::debug;

use href_kit::settings::Settings;
use href_kit::utils::logger::init_logger;
use href_kit::{date, math, query, strings, Href, QueryData};

#[derive(Parser, Debug)]
#[command(name = "href_kit", version, about = "Inspect links, query strings and friends")]
struct Cli {
    /// Settings file (TOML, YAML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, overrides the configured level
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split an http(s) link into its components
    Parse { url: String },
    /// Decode a query string into JSON
    QueryParse { query: String },
    /// Build a query string from a JSON object
    QueryStringify { json: String },
    /// Format the current local time, e.g. "yyyy-MM-dd hh:mm:ss"
    FormatDate { pattern: String },
    /// Draw random integers between two bounds
    RandomInt {
        min: i64,
        max: i64,
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Never repeat a value
        #[arg(long)]
        distinct: bool,
    },
    /// Build a random string from a dictionary of characters
    RandomString {
        len: usize,
        /// Characters to draw from; defaults to the configured dictionary
        #[arg(short, long)]
        dict: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    init_logger(&settings.logging).context("Failed to initialize logger")?;
    debug!("Running {:?}", cli.command);

    match cli.command {
        Command::Parse { url } => {
            let href = Href::new(&url).with_context(|| format!("Cannot parse '{}'", url))?;
            println!("{}", serde_json::to_string_pretty(&href)?);
        }
        Command::QueryParse { query } => {
            let data = query::parse(query.trim_start_matches('?'));
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Command::QueryStringify { json } => {
            let data: QueryData = serde_json::from_str(&json)
                .context("Expected a JSON object of strings or string arrays")?;
            println!("{}", query::stringify(&data));
        }
        Command::FormatDate { pattern } => {
            println!("{}", date::format_date(&Local::now(), &pattern));
        }
        Command::RandomInt { min, max, count, distinct } => {
            let values = if distinct {
                math::distinct_random_ints(min, max, count)?
            } else {
                math::random_ints(min, max, count)
            };
            let line: Vec<String> = values.iter().map(ToString::to_string).collect();
            println!("{}", line.join(" "));
        }
        Command::RandomString { len, dict } => {
            let dict = dict.unwrap_or(settings.random_dict);
            println!("{}", strings::random_string_from(&dict, len));
        }
    }

    Ok(())
}
