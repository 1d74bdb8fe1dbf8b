//! Ranger CLI - Command-line tool for game data sheet conversion.
//!
//! This is the main entry point for the Ranger command-line application.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ranger::convert::{self, Options};
use ranger::common::Endian;

/// Ranger - convert fixed-layout game data sheets to and from XML
#[derive(Parser)]
#[command(name = "ranger")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Decode: <SCHEMA> <BINARY> <XML>
    #[arg(
        short = 'd',
        num_args = 3,
        value_names = ["SCHEMA", "BINARY", "XML"],
        conflicts_with = "compile"
    )]
    decompile: Option<Vec<PathBuf>>,

    /// Encode: <SCHEMA> <XML> <BINARY>
    #[arg(short = 'c', num_args = 3, value_names = ["SCHEMA", "XML", "BINARY"])]
    compile: Option<Vec<PathBuf>>,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Args)]
struct GlobalArgs {
    /// Byte order of binary sheets
    #[arg(long, global = true, env = "RANGER_BYTE_ORDER", default_value_t = Endian::Little)]
    byte_order: Endian,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a binary sheet to XML
    Decode {
        /// Schema document
        #[arg(short, long, env = "RANGER_SCHEMA")]
        schema: PathBuf,

        /// Binary sheet to read
        #[arg(short, long)]
        input: PathBuf,

        /// XML file to write
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Convert an XML sheet to binary
    Encode {
        /// Schema document
        #[arg(short, long, env = "RANGER_SCHEMA")]
        schema: PathBuf,

        /// XML sheet to read
        #[arg(short, long)]
        input: PathBuf,

        /// Binary file to write
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show how a binary sheet lines up with a schema
    Inspect {
        /// Schema document
        #[arg(short, long, env = "RANGER_SCHEMA")]
        schema: PathBuf,

        /// Binary sheet to check
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.global);

    let options = Options {
        endian: cli.global.byte_order,
        ..Options::default()
    };

    match (cli.command, cli.decompile, cli.compile) {
        (Some(Commands::Decode { schema, input, output }), _, _) => {
            cmd_decode(&schema, &input, &output, &options)?;
        }
        (Some(Commands::Encode { schema, input, output }), _, _) => {
            cmd_encode(&schema, &input, &output, &options)?;
        }
        (Some(Commands::Inspect { schema, input }), _, _) => {
            cmd_inspect(&schema, &input, &options)?;
        }
        (None, Some(paths), _) => {
            cmd_decode(&paths[0], &paths[1], &paths[2], &options)?;
        }
        (None, None, Some(paths)) => {
            cmd_encode(&paths[0], &paths[1], &paths[2], &options)?;
        }
        (None, None, None) => {
            anyhow::bail!("no command given; run `ranger --help` for usage");
        }
    }

    Ok(())
}

fn init_logging(args: &GlobalArgs) {
    let level = match (args.quiet, args.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_decode(schema: &Path, input: &Path, output: &Path, options: &Options) -> Result<()> {
    tracing::info!("Decoding: {} -> {}", input.display(), output.display());

    let start = Instant::now();
    let summary = convert::binary_to_xml(schema, input, output, options)
        .with_context(|| format!("Failed to decode {}", input.display()))?;

    tracing::info!(
        "Wrote {} {} records in {:?}",
        summary.records,
        summary.sheet,
        start.elapsed()
    );

    Ok(())
}

fn cmd_encode(schema: &Path, input: &Path, output: &Path, options: &Options) -> Result<()> {
    tracing::info!("Encoding: {} -> {}", input.display(), output.display());

    let start = Instant::now();
    let summary = convert::xml_to_binary(schema, input, output, options)
        .with_context(|| format!("Failed to encode {}", input.display()))?;

    tracing::info!(
        "Wrote {} {} records ({} bytes each) in {:?}",
        summary.records,
        summary.sheet,
        summary.record_width,
        start.elapsed()
    );

    Ok(())
}

fn cmd_inspect(schema: &Path, input: &Path, options: &Options) -> Result<()> {
    let report = convert::inspect(schema, input, options)
        .with_context(|| format!("Failed to inspect {}", input.display()))?;

    println!("Sheet:  {}", report.schema.name());
    println!("Fields:");
    for slot in report.schema.layout() {
        println!(
            "  {:>6}  {:<8} {}",
            slot.offset,
            slot.field_type.as_str(),
            slot.name
        );
    }
    println!("Schema width: {} bytes", report.schema.field_width());

    let header = &report.header;
    println!();
    println!("File:   {} ({} bytes, {})", input.display(), report.file_size, options.endian);
    println!("Magic:  {:?}", header.magic_str());
    println!("Width:  {} bytes", header.record_width);
    println!("Count:  {} records", header.record_count);

    match &report.outcome {
        Ok(records) => println!("\nOK: {} records decode cleanly", records),
        Err(e) => {
            println!("\nFAILED: {}", e);
            anyhow::bail!("{} does not match schema {}", input.display(), report.schema.name());
        }
    }

    Ok(())
}
