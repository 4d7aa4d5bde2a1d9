//! Connection configuration tool.
//!
//! This binary exercises the graphbridge dialect layer from the command
//! line: list the registered dialects, build a connect URL from structured
//! connection fields, and inspect which inputs a dialect requires from the
//! user.
//!
//! # Security Guarantees
//! - Credentials never appear in logs or output
//! - Connection URLs are redacted before they are logged

use clap::{Args, Parser, Subcommand, ValueEnum};
use graphbridge_core::{
    ConnectionProfile, DialectRegistry, Result, error::GraphBridgeError,
    error::redact_database_url, init_logging,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "graphbridge-connect")]
#[command(about = "Connection configuration tool for graphbridge dialects")]
#[command(version)]
#[command(long_about = "
graphbridge-connect - dialect and connection URL inspection

This tool resolves dialect descriptors the same way the discovery platform
does and reports what they declare:
- Connect URLs built from structured connection fields
- Required connection inputs per dialect
- Registered dialects and their capabilities

EXAMPLES:
  graphbridge-connect list
  graphbridge-connect url NEO4J --host graphhost --port 7687 --database neo4j
  graphbridge-connect inputs NEO4J --format json
")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct GlobalArgs {
    /// Increase verbosity
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    verbose: u8,

    /// Suppress output
    #[arg(short, long, help = "Suppress all output except errors")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List registered dialects
    List,
    /// Build a connect URL from structured connection fields
    Url(UrlArgs),
    /// Show the connection inputs a dialect requires
    Inputs(InputsArgs),
}

#[derive(Args)]
struct UrlArgs {
    /// Implementor code of the dialect (e.g. NEO4J)
    implementor: String,

    /// Database host address
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Port number
    #[arg(long)]
    port: Option<u16>,

    /// Database name
    #[arg(long)]
    database: Option<String>,

    /// Fully-specified URL override, returned verbatim
    #[arg(long)]
    url: Option<String>,
}

#[derive(Args)]
struct InputsArgs {
    /// Implementor code of the dialect (e.g. NEO4J)
    implementor: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable table
    Text,
    /// JSON object
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.global.verbose, cli.global.quiet)?;

    let registry = DialectRegistry::with_builtins()?;

    match cli.command {
        Command::List => {
            list_dialects(&registry);
            Ok(())
        }
        Command::Url(args) => build_url(&registry, &args),
        Command::Inputs(args) => show_inputs(&registry, &args),
    }
}

/// Lists registered dialects in priority order.
fn list_dialects(registry: &DialectRegistry) {
    println!("Registered dialects:");
    println!();
    for dialect in registry.dialects() {
        println!("{} ({})", dialect.name(), dialect.implementor());
        println!("  Scope:      {}", dialect.scope());
        println!("  Priority:   {}", dialect.priority());
        let probe = dialect
            .test_query(&ConnectionProfile::default())
            .unwrap_or_else(|| "<none>".to_string());
        println!("  Test query: {}", probe);
        println!();
    }
}

/// Builds and prints a connect URL for the given implementor.
fn build_url(registry: &DialectRegistry, args: &UrlArgs) -> Result<()> {
    let dialect = registry.resolve(&args.implementor).ok_or_else(|| {
        GraphBridgeError::configuration(format!(
            "no registered dialect supports implementor {}",
            args.implementor
        ))
    })?;

    let mut profile = ConnectionProfile::new(args.host.clone());
    if let Some(port) = args.port {
        profile = profile.with_port(port);
    }
    if let Some(database) = &args.database {
        profile = profile.with_database(database.clone());
    }
    if let Some(url) = &args.url {
        profile = profile.with_url_override(url.clone());
    }
    profile.validate()?;

    let url = dialect.connect_url(&profile);
    info!("Built connect URL for {}: {}", dialect.name(), redact_database_url(&url));

    println!("{}", url);
    Ok(())
}

/// Prints the required-input table for the given implementor.
fn show_inputs(registry: &DialectRegistry, args: &InputsArgs) -> Result<()> {
    let dialect = registry.resolve(&args.implementor).ok_or_else(|| {
        GraphBridgeError::configuration(format!(
            "no registered dialect supports implementor {}",
            args.implementor
        ))
    })?;

    let spec = dialect.input_spec();

    match args.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&spec).map_err(|e| GraphBridgeError::Serialization {
                    context: "input spec".to_string(),
                    source: e,
                })?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("Connection inputs for {}:", dialect.name());
            println!("  authentication_type: {}", spec.authentication_type);
            println!("  username:            {}", spec.username);
            println!("  password:            {}", spec.password);
            println!("  catalog:             {}", spec.catalog);
            println!("  sid:                 {}", spec.sid);
            println!("  database:            {}", spec.database);
        }
    }

    Ok(())
}
