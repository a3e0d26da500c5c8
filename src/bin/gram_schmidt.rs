//! Interactive Gram-Schmidt console.
//!
//! Run with: cargo run --bin gram-schmidt
//! Non-interactive: cargo run --bin gram-schmidt -- --vectors "1,0;1,1" [--json]

use clap::Parser;
use colored::*;
use gram_schmidt::config::SessionConfig;
use gram_schmidt::input::{parse_basis, Prompter};
use gram_schmidt::report::{render_basis, verdict, BasisReport};
use gram_schmidt::{GsError, VectorN};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const RULE_WIDTH: usize = 60;

#[derive(Parser, Debug)]
#[command(name = "gram-schmidt")]
#[command(about = "Orthogonalize and orthonormalize a basis with the Gram-Schmidt process")]
struct Args {
    /// Basis given inline instead of prompting, e.g. "1,0;1,1".
    /// Must be square, with its dimension within --min-dim/--max-dim
    #[arg(long)]
    vectors: Option<String>,

    /// Print the result as JSON on stdout (prompts go to stderr)
    #[arg(long)]
    json: bool,

    /// Smallest dimension accepted (prompt and --vectors)
    #[arg(long, default_value_t = 2)]
    min_dim: usize,

    /// Largest dimension accepted (prompt and --vectors)
    #[arg(long, default_value_t = 10)]
    max_dim: usize,

    /// Decimal places when printing vectors
    #[arg(long, default_value_t = 4)]
    precision: usize,
}

fn heavy_rule() -> ColoredString {
    "=".repeat(RULE_WIDTH).bright_blue().bold()
}

fn light_rule() -> ColoredString {
    "-".repeat(RULE_WIDTH).bright_blue()
}

fn print_section(title: &str, basis: &[VectorN], prefix: &str, precision: usize) {
    println!("{}", light_rule());
    println!("{}", title.bright_white().bold());
    println!("{}", light_rule());
    for line in render_basis(basis, prefix, precision) {
        println!("{}", line);
    }
}

fn colored_verdict(ok: bool) -> ColoredString {
    if ok {
        verdict(ok).green().bold()
    } else {
        verdict(ok).red().bold()
    }
}

fn read_basis(args: &Args, config: &SessionConfig) -> Result<Vec<VectorN>, Box<dyn std::error::Error>> {
    if let Some(text) = &args.vectors {
        return Ok(parse_basis(text, config)?);
    }

    let writer: Box<dyn Write> = if args.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let mut prompter = Prompter::new(io::stdin().lock(), writer, *config);

    let dimension = prompter.read_dimension()?;
    writeln!(prompter.writer())?;
    let basis = prompter.read_basis(dimension)?;
    writeln!(prompter.writer())?;
    Ok(basis)
}

fn run(args: &Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = SessionConfig {
        min_dimension: args.min_dim,
        max_dimension: args.max_dim,
        precision: args.precision,
    };
    config.validate()?;

    if !args.json {
        println!("{}", heavy_rule());
        println!("{}", "GRAM-SCHMIDT ORTHONORMALIZATION PROCESS".bright_white().bold());
        println!("{}", heavy_rule());
        println!();
    }

    let basis = read_basis(args, &config)?;
    tracing::debug!(vectors = basis.len(), "basis read");

    let report = match BasisReport::compute(&basis) {
        Ok(report) => report,
        Err(GsError::LinearlyDependent { index }) => {
            tracing::warn!(index, "basis is linearly dependent");
            eprintln!("{}", "ERROR: The vectors are linearly dependent!".red().bold());
            eprintln!("Vector {} lies in the span of the vectors before it.", index);
            eprintln!("Please provide linearly independent vectors.");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };
    tracing::debug!(
        orthogonal = report.is_orthogonal,
        orthonormal = report.is_orthonormal,
        "basis processed"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    let precision = config.precision;
    print_section("ORIGINAL BASIS:", &report.original, "v", precision);
    println!();

    print_section("ORTHOGONAL BASIS:", &report.orthogonal, "w", precision);
    println!(
        "Verification: Is orthogonal? {}",
        colored_verdict(report.is_orthogonal)
    );
    println!();

    print_section("ORTHONORMAL BASIS:", &report.orthonormal, "u", precision);
    println!(
        "Verification: Is orthonormal? {}",
        colored_verdict(report.is_orthonormal)
    );
    println!();

    println!("{}", heavy_rule());
    println!("{}", "Process completed successfully!".green().bold());
    println!("{}", heavy_rule());

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
