//! budgetglance - Budget Widget Snapshot Tooling
//!
//! Seed, inspect, and preview the key-value snapshots that back the
//! home-screen budget widgets.

use anyhow::Result;
use budgetglance::preview::{render_to_text, PreviewHost};
use budgetglance::refresh::RefreshContract;
use budgetglance::render::render_widget;
use budgetglance::schema::{publish_tier, Tier, TierSnapshot};
use budgetglance::store::JsonFileStore;
use budgetglance::CurrencyFormat;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::time::Duration;

fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    // Parse command-line arguments
    let matches = Command::new("budgetglance")
        .version(budgetglance::VERSION)
        .about("Budget widget snapshot tooling")
        .long_about(
            "budgetglance seeds, inspects, and previews the key-value snapshots \
             that back the home-screen budget widgets, using the same read and \
             render pipeline the widgets use.",
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("seed")
                .about("Write placeholder snapshots for all tiers to a store file")
                .arg(store_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Render tiers from a store file as text or JSON")
                .arg(store_arg())
                .arg(
                    Arg::new("tier")
                        .long("tier")
                        .value_name("TIER")
                        .help("Render a single tier: small, medium, or large"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit render descriptions as JSON"),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Interactive terminal preview of the widgets")
                .arg(store_arg())
                .arg(
                    Arg::new("refresh-secs")
                        .long("refresh-secs")
                        .value_name("SECS")
                        .help("Store refresh interval in seconds (default 3600)"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("seed", sub)) => run_seed(sub),
        Some(("show", sub)) => run_show(sub),
        Some(("preview", sub)) => run_preview(sub),
        _ => unreachable!("subcommand is required"),
    }
}

fn store_arg() -> Arg {
    Arg::new("store")
        .help("Path of the snapshot store file")
        .required(true)
        .index(1)
}

fn store_path(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("store")
        .expect("store argument is required")
}

fn run_seed(matches: &ArgMatches) -> Result<()> {
    let path = store_path(matches);
    let store = JsonFileStore::create(path);
    for tier in Tier::ALL {
        publish_tier(&store, &TierSnapshot::placeholder(tier));
    }
    store.save()?;
    println!("Seeded {path} with placeholder snapshots for all tiers");
    Ok(())
}

fn run_show(matches: &ArgMatches) -> Result<()> {
    let store = JsonFileStore::open(store_path(matches))?;
    let tiers: Vec<Tier> = match matches.get_one::<String>("tier") {
        Some(raw) => vec![raw.parse()?],
        None => Tier::ALL.to_vec(),
    };
    let currency = CurrencyFormat::krw();
    let descriptions: Vec<_> = tiers
        .iter()
        .map(|&tier| render_widget(&store, tier, &currency))
        .collect();

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&descriptions)?);
    } else {
        for description in &descriptions {
            print!("{}", render_to_text(description));
            println!();
        }
    }
    Ok(())
}

fn run_preview(matches: &ArgMatches) -> Result<()> {
    let store = JsonFileStore::open(store_path(matches))?;
    let contract = match matches.get_one::<String>("refresh-secs") {
        Some(raw) => {
            let secs: u64 = raw.parse().map_err(|_| {
                anyhow::anyhow!("--refresh-secs expects a number of seconds, got {raw:?}")
            })?;
            if secs == 0 {
                anyhow::bail!("--refresh-secs must be at least 1");
            }
            RefreshContract::new(Duration::from_secs(secs))
        }
        None => RefreshContract::default(),
    };

    let mut host = PreviewHost::new(contract);
    host.run(&store)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_constant() {
        // Ensure version is accessible
        assert!(!budgetglance::VERSION.is_empty());
    }
}
