use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use std::io::IsTerminal;
use std::path::PathBuf;

use mdtidy_lib::annotations::AnnotationTable;
use mdtidy_lib::config::Config;
use mdtidy_lib::exit_codes;
use mdtidy_lib::file_processor::{RunMode, Runner};
use mdtidy_lib::output::{OutputFormat, OutputWriter};
use mdtidy_lib::pipeline::Pipeline;

#[derive(Parser)]
#[command(author, version, about = "Batch normalizer for markdown documentation", long_about = None)]
struct Cli {
    /// Directory to process
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Configuration file path (defaults to <root>/.mdtidy.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Ignore any configuration file and use defaults
    #[arg(long, global = true, conflicts_with = "config")]
    no_config: bool,

    /// Report what would change without writing any file
    #[arg(long, global = true)]
    dry_run: bool,

    /// Disable specific rules (comma-separated)
    #[arg(short, long, global = true, value_delimiter = ',')]
    disable: Vec<String>,

    /// Output format for the report
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    output_format: OutputFormat,

    /// Show detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Command to run
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize every eligible document under the root in place (default)
    Fix,
    /// Write normalized copies of annotated documents under the proposed directory
    Propose {
        /// TOML file mapping relative paths to language tags (overrides [annotations])
        #[arg(long)]
        annotations: Option<PathBuf>,
    },
    /// List the rules in the order they are applied
    Rules,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    if cli.no_config {
        log::debug!("[mdtidy-config] --no-config given, using defaults");
        return Ok(Config::default());
    }
    Ok(Config::load(cli.config.as_deref(), &cli.root)?)
}

fn print_rules(pipeline: &Pipeline, quiet: bool) {
    if quiet {
        return;
    }
    println!("{}", "Rules, in pipeline order:".bold());
    for rule in pipeline.rules() {
        println!(
            "  {} {:<12} {}",
            rule.name().cyan(),
            format!("[{}]", rule.category().as_str()),
            rule.description()
        );
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let pipeline = Pipeline::from_config(&config, &cli.disable);

    let (mode, annotations) = match &cli.command {
        Some(Commands::Rules) => {
            print_rules(&pipeline, cli.quiet);
            return Ok(());
        }
        None | Some(Commands::Fix) => (RunMode::InPlace, None),
        Some(Commands::Propose { annotations }) => {
            let table = annotations
                .as_deref()
                .map(AnnotationTable::load)
                .transpose()
                .context("Failed to load annotations")?;
            (RunMode::Proposed, table)
        }
    };

    let report = Runner::new(&config)
        .with_pipeline(pipeline)
        .dry_run(cli.dry_run)
        .run(&cli.root, mode, annotations.as_ref())?;

    let use_colors = std::io::stdout().is_terminal();
    let formatter = cli.output_format.create_formatter(use_colors);
    OutputWriter::new(cli.quiet)
        .write(&formatter.format_report(&report))
        .context("Failed to write report")?;

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        exit_codes::exit::tool_error();
    }
    exit_codes::exit::success();
}
