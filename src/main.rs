//! recovery-engine CLI
//!
//! Run portfolio analytics over an assignment snapshot file.
//!
//! # Usage
//!
//! ```bash
//! # Portfolio summary
//! recovery-engine summary --input portfolio.json
//!
//! # Monthly recovery trend, JSON output
//! recovery-engine trend --input portfolio.json --months 6 --format json
//!
//! # Per-bond breakdowns
//! recovery-engine breakdown --input portfolio.json
//!
//! # Generate a random portfolio for testing
//! recovery-engine generate --assignments 20
//! ```

use chrono::NaiveDate;
use log::debug;
use recovery_engine::analytics::portfolio::PortfolioSummary;
use recovery_engine::analytics::trend::monthly_recovery;
use recovery_engine::core::assignment::Assignment;
use recovery_engine::core::enforcement::Enforcement;
use recovery_engine::core::money::format_won;
use recovery_engine::interest::breakdown::BondBreakdown;
use recovery_engine::simulation::sample::{generate_random_portfolio, PortfolioConfig};
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"recovery-engine — bond interest accrual and debt-recovery analytics

USAGE:
    recovery-engine <COMMAND> [OPTIONS]

COMMANDS:
    summary     Aggregate recovery statistics over a portfolio snapshot
    trend       Monthly recovery amounts for a trailing window
    breakdown   Per-bond principal/interest/expense breakdowns
    generate    Generate a random portfolio (for testing)
    help        Show this message

OPTIONS (summary, trend, breakdown):
    --input <FILE>      Path to JSON portfolio file
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (trend):
    --months <N>        Window size in months, including current (default: 6)
    --as-of <DATE>      Anchor date YYYY-MM-DD (default: today)

OPTIONS (generate):
    --assignments <N>   Number of assignments (default: 20)
    --output <FILE>     Write to file instead of stdout

EXAMPLES:
    recovery-engine summary --input portfolio.json
    recovery-engine trend --input portfolio.json --months 6 --as-of 2024-06-30
    recovery-engine breakdown --input portfolio.json --format json
    recovery-engine generate --assignments 50 --output test.json"#
    );
}

/// JSON schema for portfolio snapshot files.
#[derive(serde::Deserialize, serde::Serialize)]
struct PortfolioFile {
    assignments: Vec<Assignment>,
}

/// JSON output schema for the summary command.
#[derive(serde::Serialize)]
struct SummaryOutput {
    total_count: usize,
    completed_count: usize,
    total_principal: String,
    total_collected: String,
    average_recovery_rate_percent: f64,
}

#[derive(serde::Serialize)]
struct TrendOutput {
    label: String,
    year: i32,
    month: u32,
    amount: String,
}

#[derive(serde::Serialize)]
struct BreakdownOutput {
    assignment_id: String,
    principal: String,
    first_interest: Option<String>,
    second_interest: Option<String>,
    expenses: Vec<ExpenseOutput>,
    total: String,
}

#[derive(serde::Serialize)]
struct ExpenseOutput {
    item: String,
    amount: String,
}

fn load_portfolio(path: &str) -> Vec<Assignment> {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    let file: PortfolioFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "assignments": [
    {{
      "status": "ongoing",
      "kind": "collection",
      "bonds": [{{ "principal": "10000000" }}],
      "enforcements": [
        {{ "status": "closed", "amount": "3000000", "kind": "추심",
           "created_at": "2024-05-10T09:00:00Z" }}
      ]
    }}
  ]
}}"#
        );
        process::exit(1);
    });

    debug!("loaded {} assignments from {}", file.assignments.len(), path);
    file.assignments
}

/// Parse the shared `--input`/`--format` options plus any command extras.
fn parse_options(args: &[String]) -> (Option<String>, String, Vec<(String, String)>) {
    let mut input_path = None;
    let mut format = "text".to_string();
    let mut extras = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            other if other.starts_with("--") => {
                let key = other.trim_start_matches("--").to_string();
                i += 1;
                let value = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("{} requires a value", other);
                    process::exit(1);
                });
                extras.push((key, value));
            }
            other => {
                eprintln!("Unknown option: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }
    (input_path, format, extras)
}

fn require_input(input_path: Option<String>) -> String {
    input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    })
}

fn cmd_summary(args: &[String]) {
    let (input_path, format, extras) = parse_options(args);
    if let Some((key, _)) = extras.first() {
        eprintln!("Unknown option: --{}", key);
        process::exit(1);
    }
    let assignments = load_portfolio(&require_input(input_path));
    let summary = PortfolioSummary::from_assignments(&assignments);

    if format == "json" {
        let output = SummaryOutput {
            total_count: summary.total_count(),
            completed_count: summary.completed_count(),
            total_principal: summary.total_principal().to_string(),
            total_collected: summary.total_collected().to_string(),
            average_recovery_rate_percent: summary.recovery_rate_percent(),
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!("{}", summary);
    }
}

fn cmd_trend(args: &[String]) {
    let (input_path, format, extras) = parse_options(args);
    let mut months = 6usize;
    let mut as_of = chrono::Local::now().date_naive();
    for (key, value) in extras {
        match key.as_str() {
            "months" => {
                months = value.parse().unwrap_or_else(|_| {
                    eprintln!("--months requires a number");
                    process::exit(1);
                });
            }
            "as-of" => {
                as_of = NaiveDate::parse_from_str(&value, "%Y-%m-%d").unwrap_or_else(|_| {
                    eprintln!("--as-of requires a date in YYYY-MM-DD form");
                    process::exit(1);
                });
            }
            other => {
                eprintln!("Unknown option: --{}", other);
                process::exit(1);
            }
        }
    }

    let assignments = load_portfolio(&require_input(input_path));
    let enforcements: Vec<Enforcement> = assignments
        .iter()
        .flat_map(|a| a.enforcements().iter().cloned())
        .collect();
    let buckets = monthly_recovery(&enforcements, as_of, months);

    if format == "json" {
        let output: Vec<TrendOutput> = buckets
            .iter()
            .map(|b| TrendOutput {
                label: b.label(),
                year: b.year,
                month: b.month,
                amount: b.amount.to_string(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!("=== Monthly Recovery ({} months) ===", months);
        for bucket in &buckets {
            println!("{:>4}: {}", bucket.label(), format_won(bucket.amount));
        }
    }
}

fn cmd_breakdown(args: &[String]) {
    let (input_path, format, extras) = parse_options(args);
    if let Some((key, _)) = extras.first() {
        eprintln!("Unknown option: --{}", key);
        process::exit(1);
    }
    let assignments = load_portfolio(&require_input(input_path));

    let mut outputs = Vec::new();
    for assignment in &assignments {
        for bond in assignment.bonds() {
            let breakdown = BondBreakdown::from_bond(bond).unwrap_or_else(|e| {
                eprintln!("Invalid bond on assignment {}: {}", assignment.id(), e);
                process::exit(1);
            });
            outputs.push((assignment.id(), breakdown));
        }
    }

    if format == "json" {
        let output: Vec<BreakdownOutput> = outputs
            .iter()
            .map(|(id, b)| BreakdownOutput {
                assignment_id: id.to_string(),
                principal: b.principal().to_string(),
                first_interest: b.first_interest().map(|i| i.to_string()),
                second_interest: b.second_interest().map(|i| i.to_string()),
                expenses: b
                    .expenses()
                    .iter()
                    .map(|e| ExpenseOutput {
                        item: e.item.clone(),
                        amount: e.amount.to_string(),
                    })
                    .collect(),
                total: b.total().to_string(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        for (id, breakdown) in &outputs {
            println!("Assignment {}", id);
            println!("{}", breakdown);
        }
        if outputs.is_empty() {
            println!("No bonds in portfolio.");
        }
    }
}

fn cmd_generate(args: &[String]) {
    let mut assignment_count = 20usize;
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--assignments" => {
                i += 1;
                assignment_count = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--assignments requires a number");
                    process::exit(1);
                });
            }
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            other => {
                eprintln!("Unknown option: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = PortfolioConfig {
        assignment_count,
        ..Default::default()
    };
    let assignments = generate_random_portfolio(&config);
    let file = PortfolioFile { assignments };
    let json = serde_json::to_string_pretty(&file).unwrap();

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!("Generated {} assignments → {}", assignment_count, path);
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "summary" => cmd_summary(rest),
        "trend" => cmd_trend(rest),
        "breakdown" => cmd_breakdown(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
