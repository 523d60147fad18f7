//! sqlpred: translate predicate trees to SQL WHERE clauses
//!
//! # Usage
//!
//! ```bash
//! # Translate a JSON predicate tree with bound parameters
//! sqlpred --dialect oracle predicate.json
//!
//! # Inline literals, read from stdin
//! cat predicate.json | sqlpred --inline -
//!
//! # List dialects
//! sqlpred dialects
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use sqlpred::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sqlpred")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Translate predicate trees into dialect SQL WHERE clauses", long_about = None)]
#[command(after_help = "EXAMPLES:
    sqlpred pred.json                   # Parameterized, generic dialect
    sqlpred -d sqlserver pred.json      # T-SQL placeholders (@p0, ...)
    sqlpred --inline - < pred.json      # Literals inlined
    sqlpred dialects                    # List dialects")]
struct Cli {
    /// JSON predicate tree file, or `-` for stdin
    input: Option<String>,

    /// Target SQL dialect (defaults to the configured one)
    #[arg(short, long, value_enum)]
    dialect: Option<CliDialect>,

    /// Inline literals instead of binding parameters
    #[arg(long)]
    inline: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    format: OutputFormat,

    /// Config file (defaults to sqlpred.toml, then the user config dir)
    #[arg(short, long, env = "SQLPRED_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported dialects
    Dialects,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Sql,
    Json,
    Pretty,
}

#[derive(Clone, ValueEnum)]
enum CliDialect {
    Generic,
    Sqlserver,
    Sqlserverce,
    Oracle,
    Sqlite,
    Access,
    Mysql,
}

impl From<CliDialect> for Dialect {
    fn from(val: CliDialect) -> Self {
        match val {
            CliDialect::Generic => Dialect::Generic,
            CliDialect::Sqlserver => Dialect::SqlServer,
            CliDialect::Sqlserverce => Dialect::SqlServerCe,
            CliDialect::Oracle => Dialect::Oracle,
            CliDialect::Sqlite => Dialect::Sqlite,
            CliDialect::Access => Dialect::Access,
            CliDialect::Mysql => Dialect::MySql,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Some(Commands::Dialects) => show_dialects(),
        None => {
            let Some(input) = &cli.input else {
                anyhow::bail!("no input given. Pass a JSON file or `-` for stdin.");
            };
            translate_input(input, &cli)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("SQLPRED_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "sqlpred=debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<TranslatorConfig> {
    let mut config = match &cli.config {
        Some(path) => TranslatorConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => TranslatorConfig::load_default()?,
    };
    if let Some(dialect) = &cli.dialect {
        config.dialect = dialect.clone().into();
    }
    Ok(config)
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {}", input))
    }
}

fn translate_input(input: &str, cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let expr: Expr = serde_json::from_str(&read_input(input)?)
        .map_err(|e| anyhow::anyhow!("Invalid predicate tree: {}", e))?;

    if cli.verbose {
        println!("{} {}", "Input:".dimmed(), expr.to_string().yellow());
        println!();
    }

    let translator = Translator::from_config(&config);
    let result = if cli.inline {
        QueryResult {
            sql: translator.translate(&expr)?,
            params: Vec::new(),
        }
    } else {
        translator.translate_parameterized(&expr)?
    };

    match cli.format {
        OutputFormat::Sql => println!("{}", result.sql),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Pretty => print_pretty(&result, config.dialect),
    }

    Ok(())
}

fn print_pretty(result: &QueryResult, dialect: Dialect) {
    println!("{} {}", "WHERE".green().bold(), result.sql.white());
    if result.params.is_empty() {
        return;
    }
    println!();
    println!(
        "{:10} {:28} {:24} {}",
        "Name".white().bold(),
        "Type".white().bold(),
        "Host".white().bold(),
        "Value".white().bold()
    );
    println!("{}", "─".repeat(80).dimmed());
    let prefix = dialect.rules().param_prefix;
    for param in &result.params {
        println!(
            "{:10} {:28} {:24} {}",
            format!("{}{}", prefix, param.name).cyan(),
            param.query_type.to_string(),
            param.host_type.to_string().dimmed(),
            param.value
        );
    }
}

fn show_dialects() {
    println!("{}", "Supported dialects".cyan().bold());
    println!();
    println!(
        "{:14} {:8} {}",
        "Name".white().bold(),
        "Prefix".white().bold(),
        "Concat".white().bold()
    );
    println!("{}", "─".repeat(40).dimmed());
    for dialect in Dialect::ALL {
        let rules = dialect.rules();
        let concat = match rules.concat {
            ConcatStyle::Infix(token) => token.trim().to_string(),
            ConcatStyle::Function(name) => format!("{}()", name),
        };
        println!("{:14} {:8} {}", dialect.name().yellow(), rules.param_prefix, concat);
    }
}
