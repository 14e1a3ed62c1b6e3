//! autoddl CLI - generate DDL scripts for multiple SQL dialects.

use autoddl::{DdlError, GeneratorConfig, SchemaAssembler, SchemaDocument, StrategyRegistry};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, Level};

#[derive(Parser)]
#[command(name = "autoddl")]
#[command(about = "Generate CREATE/ALTER/DROP scripts for MySQL, PostgreSQL, Oracle, DM, H2, and TDengine")]
#[command(version)]
struct Cli {
    /// Path to YAML generator configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log format: text or json
    #[arg(long, default_value = "text", global = true)]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info", global = true)]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported dialects
    Dialects,

    /// Complete creation script: tables, indexes, foreign keys, comments
    Create(GenerateArgs),

    /// Tables first, then foreign keys and comments
    Schema(GenerateArgs),

    /// ALTER TABLE ... ADD COLUMN for every column of every table
    Alter(GenerateArgs),

    /// DROP TABLE statements in reverse dependency order
    Drop(GenerateArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Target dialect (mysql, postgresql, oracle, dm, h2, tdengine)
    #[arg(short, long)]
    dialect: String,

    /// Schema file (YAML, or JSON when the name ends in .json)
    #[arg(short, long)]
    input: PathBuf,

    /// Write the script to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), DdlError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format);

    let config = match &cli.config {
        Some(path) => {
            let config = GeneratorConfig::load(path)?;
            info!("Loaded configuration from {:?}", path);
            config
        }
        None => GeneratorConfig::default(),
    };
    let registry = StrategyRegistry::with_builtins(Arc::new(config));

    let (args, script) = match cli.command {
        Commands::Dialects => {
            for dialect in registry.supported_dialects() {
                println!("{}", dialect);
            }
            return Ok(());
        }
        Commands::Create(args) => {
            let (assembler, document) = prepare(&registry, &args)?;
            let script = assembler.complete_script(&document)?;
            (args, script)
        }
        Commands::Schema(args) => {
            let (assembler, document) = prepare(&registry, &args)?;
            let script = assembler.generate_schema_for(&document)?;
            (args, script)
        }
        Commands::Alter(args) => {
            let (assembler, document) = prepare(&registry, &args)?;
            let script = assembler.alter_script(&document);
            (args, script)
        }
        Commands::Drop(args) => {
            let (assembler, document) = prepare(&registry, &args)?;
            let script = assembler.rollback_script(&document)?;
            (args, script)
        }
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", script))?;
            info!("Wrote script to {:?}", path);
        }
        None => println!("{}", script),
    }
    Ok(())
}

/// Resolve the dialect, then load the schema file.
fn prepare(
    registry: &StrategyRegistry,
    args: &GenerateArgs,
) -> Result<(SchemaAssembler, SchemaDocument), DdlError> {
    let strategy = registry.get_strategy_by_name(&args.dialect)?;
    let document = SchemaDocument::load(&args.input)?;
    debug!(
        "Loaded {} tables from {:?}",
        document.tables.len(),
        args.input
    );
    Ok((SchemaAssembler::new(strategy), document))
}

fn setup_logging(verbosity: &str, format: &str) {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // SQL goes to stdout, so logs stay on stderr
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
