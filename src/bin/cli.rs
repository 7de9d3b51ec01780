//! Tokenscope CLI
//!
//! Command-line interface for Tokenscope:
//! - Research tokens through a running proxy
//! - Check server health
//! - Generate a default config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokenscope::research::{
    BatchReport, NoticeLevel, Orchestrator, ProxySource, Submission, TableMetric, TokenInfo,
};

#[derive(Parser)]
#[command(name = "tokenscope")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Research and compare crypto tokens")]
#[command(long_about = "Tokenscope fetches AI-written research for crypto tokens through the Tokenscope proxy\nand compares price, market cap, volume and sentiment side by side.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Tokenscope server URL
    #[arg(long, default_value = "http://localhost:8083", global = true)]
    pub api_url: String,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Research one or more tokens
    Research {
        /// Token symbols or names (e.g. btc eth sol)
        tokens: Vec<String>,
        /// Also print each token's research summary
        #[arg(short, long)]
        summary: bool,
    },

    /// Show server health
    Health,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tokenscope::logging::init_cli();
    let cli = Cli::parse();

    match cli.command {
        Commands::Research { tokens, summary } => {
            let orchestrator = Orchestrator::new(ProxySource::new(&cli.api_url));

            let submission = orchestrator.submit(&tokens).await;

            if let Some(notice) = submission.notice() {
                match notice.level() {
                    NoticeLevel::Info => eprintln!("{}", notice),
                    NoticeLevel::Warning | NoticeLevel::Error => eprintln!("warning: {}", notice),
                }
            }

            let report = match submission {
                Submission::Completed(report) => report,
                Submission::Empty { .. } => std::process::exit(2),
                Submission::Superseded { .. } => bail!("submission was superseded"),
            };

            if report.results.is_empty() {
                eprintln!(
                    "No research available. Is the Tokenscope server running at {}?",
                    orchestrator.source().base_url()
                );
                std::process::exit(1);
            }

            match cli.format.as_str() {
                "json" => {
                    println!("{}", serde_json::to_string_pretty(&report.results)?);
                }
                "csv" => print_csv(&report.results),
                _ => {
                    print_cards(&report);
                    println!();
                    print_table(&report.results);
                }
            }

            if summary {
                print_summaries(&report.results);
            }
        }

        Commands::Health => {
            let client = reqwest::Client::new();
            let response = client
                .get(format!("{}/health", cli.api_url.trim_end_matches('/')))
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp
                        .json()
                        .await
                        .context("health response was not JSON")?;

                    if cli.format == "json" {
                        println!("{}", serde_json::to_string_pretty(&health)?);
                        return Ok(());
                    }

                    println!(
                        "Tokenscope server v{}",
                        health["version"].as_str().unwrap_or("unknown")
                    );
                    println!();
                    println!(
                        "Status:   {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!(
                        "Upstream: {}",
                        health["upstream"].as_str().unwrap_or("unknown")
                    );
                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime:   {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("Server returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Tokenscope at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the Tokenscope server is running:");
                    eprintln!("  cargo run --bin tokenscope");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = tokenscope::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)
                            .with_context(|| format!("cannot create {:?}", parent))?;
                    }
                    std::fs::write(&path, &config)
                        .with_context(|| format!("cannot write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}

fn print_cards(report: &BatchReport) {
    for info in &report.results {
        println!(
            "{:<24} {:<8} {:>16} {:>10}  {}",
            info.name,
            info.symbol.to_uppercase(),
            TableMetric::Price.format(info),
            TableMetric::Change24h.format(info),
            info.sentiment
        );
    }
}

fn print_table(results: &[TokenInfo]) {
    print!("{:<20}", "Metric");
    for info in results {
        print!(" | {:>14}", info.symbol.to_uppercase());
    }
    println!();

    println!("{}", "-".repeat(20 + results.len() * 17));

    for metric in TableMetric::ALL {
        print!("{:<20}", metric.label());
        for info in results {
            print!(" | {:>14}", metric.format(info));
        }
        println!();
    }
}

fn print_csv(results: &[TokenInfo]) {
    print!("metric");
    for info in results {
        print!(",{}", info.symbol);
    }
    println!();

    for metric in TableMetric::ALL {
        print!("{}", metric.label());
        for info in results {
            let val = metric
                .value(info)
                .map(|v| v.to_string())
                .unwrap_or_default();
            print!(",{}", val);
        }
        println!();
    }
}

fn print_summaries(results: &[TokenInfo]) {
    for info in results {
        println!();
        println!("== {} ({}) ==", info.name, info.symbol.to_uppercase());
        println!("{}", info.summary.trim());
    }
}
