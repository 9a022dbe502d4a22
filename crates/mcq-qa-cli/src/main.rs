//! MCQ QA CLI
//!
//! Command-line interface for validating generated MCQ batches against
//! exam protocols.

#![forbid(unsafe_code)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::ptr_arg)]

use chrono::Utc;
use clap::{Parser, Subcommand};
use mcq_qa_cli::{format_plan, format_report, load_batch, plan_to_json};
use mcq_qa_core::{DifficultyTier, DistributionPlan};
use mcq_qa_validate::{all_protocols, find_protocol, validate_batch};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mcq-qa")]
#[command(about = "MCQ batch validation and distribution planning", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a batch file against a protocol
    Validate {
        /// Path to batch file (JSON or YAML)
        #[arg(value_name = "BATCH")]
        batch: PathBuf,

        /// Protocol id (see `mcq-qa protocols`)
        #[arg(short, long)]
        protocol: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Derive per-category quotas for a generation request
    Plan {
        /// Protocol id
        #[arg(short, long)]
        protocol: String,

        /// Difficulty tier (easy, balanced, hard)
        #[arg(short, long, default_value = "balanced")]
        tier: String,

        /// Requested question count
        #[arg(short = 'n', long, default_value = "25")]
        total: usize,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List the shipped protocols
    Protocols,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            batch,
            protocol,
            format,
        } => run_validate(&batch, &protocol, &format),
        Commands::Plan {
            protocol,
            tier,
            total,
            format,
        } => run_plan(&protocol, &tier, total, &format),
        Commands::Protocols => list_protocols(),
    }
}

fn run_validate(batch_path: &PathBuf, protocol_id: &str, format: &str) {
    let protocol = match find_protocol(protocol_id) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let batch = match load_batch(batch_path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let report = validate_batch(&batch, &protocol);

    match format {
        "json" => match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        "text" => {
            println!("Validated at {}", Utc::now().to_rfc3339());
            print!("{}", format_report(&report, protocol_id, batch.len()));
        }
        _ => {
            eprintln!("Unknown format: {format}");
            std::process::exit(1);
        }
    }

    if !report.valid {
        std::process::exit(1);
    }
}

fn run_plan(protocol_id: &str, tier_str: &str, total: usize, format: &str) {
    let protocol = match find_protocol(protocol_id) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let tier: DifficultyTier = match tier_str.parse() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let plan = DistributionPlan::for_tier(&protocol, tier, total);

    match format {
        "json" => match plan_to_json(&plan) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        "text" => print!("{}", format_plan(&plan)),
        _ => {
            eprintln!("Unknown format: {format}");
            std::process::exit(1);
        }
    }
}

fn list_protocols() {
    let protocols = match all_protocols() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    println!("=== Available Protocols ===\n");
    for protocol in protocols {
        println!("  {} - {}", protocol.id, protocol.name);
        println!(
            "    stream: {}, subject: {}, labeling: {}, validators: {}",
            protocol.stream,
            protocol.subject,
            protocol.labeling,
            protocol.validators().len()
        );
    }
}
