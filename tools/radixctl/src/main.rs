//! radixctl - command-line client for calcsrv
//!
//! Sends binary arithmetic and base conversion requests to a running calcsrv,
//! or evaluates them in-process with `--offline`. CSV batches always run
//! locally.

mod batch;
mod client;
mod offline;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use calcsrv::dto::{BinaryOperationRequest, ConversionRequest};
use clap::{Parser, Subcommand};
use colored::*;

use crate::client::{CalcClient, Reply, DEFAULT_URL};

#[derive(Parser)]
#[command(name = "radixctl")]
#[command(about = "Binary arithmetic and base conversion client")]
#[command(long_about = "Binary arithmetic and base conversion client

Examples:
  radixctl op 11111001 00000010 --bits 8 --op division --repr twosComplement
  radixctl convert --from 16 --to 2 -- -ff.8
  radixctl --offline op 1111 0001 --bits 4 --op addition
  radixctl batch arithmetic binary_arithmetic_input.csv binary_arithmetic_output.csv
  radixctl batch conversion base_conversion_input.csv base_conversion_output.csv
  radixctl logs set info,radix_calc=debug")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// calcsrv base URL
    #[arg(long, global = true, env = "RADIXCTL_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Evaluate in-process instead of calling the service
    #[arg(short = 'o', long, global = true)]
    offline: bool,

    /// Print the raw JSON body
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one fixed-width arithmetic operation
    Op {
        /// First operand bit pattern
        binary1: String,

        /// Second operand bit pattern
        binary2: String,

        /// Bit width
        #[arg(short = 'n', long = "bits", allow_negative_numbers = true)]
        num_bits: i64,

        /// addition, subtraction, multiplication or division
        #[arg(long = "op", default_value = "addition")]
        operation: String,

        /// unsigned, signOnly, onesComplement or twosComplement
        #[arg(long = "repr", default_value = "unsigned")]
        representation: String,
    },

    /// Convert a numeral between bases 2 and 36
    Convert {
        /// Numeral, optionally signed and with one fraction point
        #[arg(allow_hyphen_values = true)]
        number: String,

        /// Source base
        #[arg(long = "from", allow_negative_numbers = true)]
        from_base: i64,

        /// Target base
        #[arg(long = "to", allow_negative_numbers = true)]
        to_base: i64,
    },

    /// Run a CSV batch locally
    Batch {
        #[command(subcommand)]
        command: BatchCommands,
    },

    /// Read or change the service log filter
    Logs {
        #[command(subcommand)]
        command: LogCommands,
    },
}

#[derive(Subcommand)]
enum LogCommands {
    /// Show the active log filter
    Get,

    /// Set the log filter (trace, debug, info, warn, error, or a full filter spec)
    Set { level: String },
}

#[derive(Subcommand)]
enum BatchCommands {
    /// num1,num2,representation,operation,bit_width -> result,overflow,error
    Arithmetic { input: PathBuf, output: PathBuf },

    /// number,base_1,base_2 -> output1,output2,match,error
    Conversion { input: PathBuf, output: PathBuf },
}

async fn dispatch(cli: &Cli) -> Result<Option<Reply>> {
    let client = CalcClient::new(&cli.url);

    let reply = match &cli.command {
        Commands::Op {
            binary1,
            binary2,
            num_bits,
            operation,
            representation,
        } => {
            let request = BinaryOperationRequest {
                binary1: binary1.clone(),
                binary2: binary2.clone(),
                num_bits: *num_bits,
                operation: operation.clone(),
                representation: representation.clone(),
            };
            if cli.offline {
                offline::binary_operation(&request)?
            } else {
                client.binary_operation(&request).await?
            }
        },
        Commands::Convert {
            number,
            from_base,
            to_base,
        } => {
            let request = ConversionRequest {
                number: number.clone(),
                from_base: *from_base,
                to_base: *to_base,
            };
            if cli.offline {
                offline::convert(&request)?
            } else {
                client.convert(&request).await?
            }
        },
        Commands::Batch { command } => {
            let (summary, output) = match command {
                BatchCommands::Arithmetic { input, output } => {
                    (batch::run_arithmetic(input, output)?, output)
                },
                BatchCommands::Conversion { input, output } => {
                    (batch::run_conversion(input, output)?, output)
                },
            };
            println!(
                "{} {} rows, {} failed -> {}",
                "Batch complete:".bright_green(),
                summary.rows,
                summary.failed,
                output.display()
            );
            return Ok(None);
        },
        Commands::Logs { command } => {
            if cli.offline {
                anyhow::bail!("log level commands need a running calcsrv");
            }
            match command {
                LogCommands::Get => client.get_log_level().await?,
                LogCommands::Set { level } => client.set_log_level(level).await?,
            }
        },
    };

    Ok(Some(reply))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match dispatch(&cli).await? {
        Some(reply) => {
            output::print_reply(&reply, cli.json)?;
            if reply.is_success() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        },
        None => Ok(ExitCode::SUCCESS),
    }
}
