//! oxide-dialect CLI
//!
//! Command-line tool for inspecting the SQL fragments a dialect produces.

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{Level, debug, warn};
use tracing_subscriber::FmtSubscriber;

use oxide_dialect::prelude::*;

/// Print dialect-specific SQL fragments.
#[derive(Parser)]
#[command(name = "oxide-dialect")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dialect name (mysql, postgres, sqlite; anything else is standard SQL).
    #[arg(short, long, env = "OXIDE_DIALECT", default_value = "standard")]
    dialect: String,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the known dialects.
    Dialects,

    /// Quote an identifier.
    Quote {
        /// Raw identifier.
        identifier: String,
    },

    /// Quote an identifier unless it is already quoted.
    Quoted {
        /// Identifier, possibly wrapped in quotes.
        identifier: String,
    },

    /// Show the placeholder for a bound parameter.
    Param {
        /// 1-based parameter position.
        #[arg(default_value_t = 1)]
        position: usize,

        /// Use named parameter syntax.
        #[arg(long)]
        named: bool,
    },

    /// Show the RETURNING clause for a generated column.
    Returning {
        /// Statement kind (insert or update).
        kind: StatementKind,

        /// Column to return.
        column: String,
    },

    /// Map a column description to a SQL type and default clause.
    Map {
        /// Type tag (bool, int64, float64, time, bytes, string, ...).
        #[arg(value_name = "TYPE")]
        type_tag: String,

        /// Maximum size in bytes or characters (0 for the default).
        #[arg(short, long, default_value_t = 0)]
        max_size: usize,

        /// Column option (zero_value, auto_increment, auto_now, auto_now_add, version).
        #[arg(short, long, default_value = "zero_value")]
        option: ColumnOption,
    },
}

fn print_value(json: bool, value: &str) {
    if json {
        println!("{}", json!({ "value": value }));
    } else {
        println!("{value}");
    }
}

/// Prints a fragment the dialect may not support; `None` is reported, not failed.
fn print_optional(json: bool, value: Option<String>, missing: &str) {
    match value {
        Some(value) => print_value(json, &value),
        None if json => println!("{}", json!({ "value": null })),
        None => warn!("{missing}"),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let selected = DialectKind::from_token(&cli.dialect);
    if selected.token() != cli.dialect {
        debug!(
            "Unknown dialect {:?}, using {}",
            cli.dialect,
            DialectKind::Standard
        );
    }
    let dialect = selected.dialect();
    debug!("Using dialect {}", dialect.name());

    match cli.command {
        Commands::Dialects => {
            if cli.json {
                let names: Vec<&str> = DialectKind::ALL.iter().map(|k| k.token()).collect();
                println!("{}", json!(names));
            } else {
                for kind in DialectKind::ALL {
                    let dialect = kind.dialect();
                    println!(
                        "{:<10} quote {}  max identifier {}",
                        kind.token(),
                        dialect.identifier_quote(),
                        dialect.max_identifier_len()
                    );
                }
            }
        }

        Commands::Quote { identifier } => {
            print_value(cli.json, &dialect.quote(&identifier)?);
        }

        Commands::Quoted { identifier } => {
            if identifier.is_empty() {
                anyhow::bail!("Identifier is empty");
            }
            print_value(cli.json, &dialect.quoted(&identifier)?);
        }

        Commands::Param { position, named } => {
            if position == 0 {
                anyhow::bail!("Parameter positions start at 1");
            }
            let mode = if named { "named" } else { "positional" };
            let missing = format!("{} has no {mode} parameter syntax", dialect.name());
            print_optional(cli.json, dialect.parameter(named, position), &missing);
        }

        Commands::Returning { kind, column } => {
            let missing = format!(
                "{} has no RETURNING clause; fetch {column} after the {kind}",
                dialect.name()
            );
            print_optional(cli.json, dialect.returning(kind, &column)?, &missing);
        }

        Commands::Map {
            type_tag,
            max_size,
            option,
        } => {
            let ty = ColumnType::from(type_tag.as_str());
            if matches!(ty, ColumnType::Other(_)) {
                debug!("Type {ty} is not a known tag, mapping it as a string");
            }
            let mapping = dialect.mapping(&ty, max_size, option);
            if cli.json {
                println!("{}", serde_json::to_string(&mapping)?);
            } else if let Some(default) = &mapping.default {
                println!("{} {}", mapping.sql_type, default);
            } else {
                println!("{}", mapping.sql_type);
            }
        }
    }

    Ok(())
}
