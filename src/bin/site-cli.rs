//! Inspection CLI for the site kernel: boots the site locally and prints
//! what the chrome would consume.

use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;

use cuzinfest_site::config::{load_config, SiteConfig};
use cuzinfest_site::event::Countdown;
use cuzinfest_site::Site;

#[derive(Parser)]
#[command(name = "site-cli")]
#[command(about = "Inspection CLI for the CuzinFest site kernel", long_about = None)]
struct Cli {
    /// Config file (TOML); the stock site is used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the route table
    Routes,
    /// Show the navigation projection
    Nav,
    /// Resolve a route name to a concrete path
    Resolve {
        /// Route name (e.g. "blog-single")
        name: String,

        /// Path parameters as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,

        /// Fail on unknown names and parameter mismatches instead of
        /// falling back
        #[arg(long)]
        strict: bool,
    },
    /// Summarize the content catalog
    Content,
    /// Show the countdown to the event start
    Countdown,
}

#[derive(Serialize)]
struct RouteSummary<'a> {
    path: &'a str,
    name: &'a str,
    label: Option<&'a str>,
    show_in_nav: bool,
}

#[derive(Serialize)]
struct ContentSummary {
    posts: usize,
    partners: usize,
    plans: usize,
    opportunities: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SiteConfig::default(),
    };
    let site = Site::boot(config)?;

    match cli.command {
        Commands::Routes => {
            let routes: Vec<_> = site
                .registry()
                .all()
                .iter()
                .map(|route| RouteSummary {
                    path: route.path(),
                    name: route.name(),
                    label: route.label(),
                    show_in_nav: route.show_in_nav(),
                })
                .collect();
            print_json(&routes)?;
        }
        Commands::Nav => {
            print_json(&site.registry().nav_items())?;
        }
        Commands::Resolve {
            name,
            params,
            strict,
        } => {
            let params: Vec<(&str, &str)> = params
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            let path = if strict {
                site.registry().resolve_strict(&name, &params)?
            } else {
                site.registry().resolve(&name, &params)
            };
            println!("{path}");
        }
        Commands::Content => {
            let catalog = site.catalog();
            print_json(&ContentSummary {
                posts: catalog.posts().len(),
                partners: catalog.partners().len(),
                plans: catalog.pricing().plans.len(),
                opportunities: catalog.opportunities().len(),
            })?;
        }
        Commands::Countdown => {
            let start = site.config().event.start_time()?;
            let countdown = Countdown::until(start, Utc::now());
            if countdown.is_elapsed() {
                println!("{} has started", site.config().event.title);
            } else {
                println!("{} in {}", site.config().event.title, countdown);
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parse a `key=value` CLI argument.
fn parse_key_val(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))
}
