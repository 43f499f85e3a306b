use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tabcalc::calculator::{
    CalcResult, SortOrder, arithmetic, average, biggest, factorial, sorting,
};
use tabcalc::{Config, logging};

/// Everyday arithmetic utilities.
#[derive(Parser, Debug)]
#[command(name = "tabcalc", version, about)]
struct Cli {
    /// Path to a config file (defaults to $XDG_CONFIG_HOME/tabcalc/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add, subtract, multiply or divide two numbers
    Calc {
        /// One of: add, sub, mul, div
        action: String,
        #[arg(allow_hyphen_values = true)]
        first: String,
        #[arg(allow_hyphen_values = true)]
        second: String,
    },
    /// Factorial of a non-negative integer
    Factorial {
        #[arg(allow_hyphen_values = true)]
        number: String,
    },
    /// Convert an amount between units
    Convert {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Source unit id
        #[arg(long)]
        from: String,
        /// Target unit id
        #[arg(long)]
        to: String,
    },
    /// List the units available for conversion
    Units,
    /// Average of four numbers
    Mean {
        #[arg(allow_hyphen_values = true, num_args = 4)]
        numbers: Vec<String>,
    },
    /// Sort three numbers
    Sort {
        #[arg(allow_hyphen_values = true, num_args = 3)]
        numbers: Vec<String>,
        /// asc or desc
        #[arg(long, default_value = "asc")]
        order: SortOrder,
    },
    /// Find the biggest of three numbers
    Max {
        #[arg(allow_hyphen_values = true, num_args = 3)]
        numbers: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(cli.config.as_deref()).context("failed to load config")?;
    logging::init_with_config(&config.logging);
    tracing::debug!(config = ?cli.config, command = ?cli.command, "starting");

    let result = match cli.command {
        Command::Calc {
            action,
            first,
            second,
        } => arithmetic::run(&first, &second, &action),
        Command::Factorial { number } => Some(factorial::run(&number)),
        Command::Convert { amount, from, to } => {
            let table = config.unit_table()?;
            let result = table.run(&amount, &from, &to).with_context(|| {
                let known: Vec<&str> = table.units().iter().map(|u| u.id.as_str()).collect();
                format!("unknown unit; expected one of: {}", known.join(", "))
            })?;
            Some(result)
        }
        Command::Units => {
            for unit in config.unit_table()?.units() {
                println!("{:<6} {:<12} {}", unit.id, unit.label, unit.rate);
            }
            return Ok(());
        }
        Command::Mean { numbers } => Some(average::run(fields(&numbers)?)),
        Command::Sort { numbers, order } => Some(sorting::run(fields(&numbers)?, order)),
        Command::Max { numbers } => Some(biggest::run(fields(&numbers)?)),
    };

    match result {
        Some(result) => print_result(&result),
        None => tracing::debug!("unrecognized action, nothing to show"),
    }

    Ok(())
}

/// Borrow exactly `N` positional fields.
fn fields<const N: usize>(numbers: &[String]) -> Result<[&str; N]> {
    let refs: Vec<&str> = numbers.iter().map(String::as_str).collect();
    refs.try_into()
        .map_err(|v: Vec<&str>| anyhow::anyhow!("expected {} numbers, got {}", N, v.len()))
}

fn print_result(result: &CalcResult) {
    if let Some(error) = result.error() {
        tracing::debug!(%error, "input rejected");
    }
    println!("{}", result.display());
}
