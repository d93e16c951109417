//! Loads a symbol catalog from resource packs and prints it as JSON.
//!
//! Usage:
//!   symbol-catalog --pack packs/base --pack packs/overlay tabs
//!   symbol-catalog --pack packs/base show symbol_chat:faces
//!   SYMBOLCHAT_PACKS=packs/base:packs/overlay symbol-catalog --config settings.json favorites
//!
//! Packs given later override earlier ones. Logs go to stderr (`-v`, `-vv`,
//! or `RUST_LOG`).

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use symbolchat::logging::{LogConfig, init_logging};
use symbolchat::{
    ConfigFile, Identifier, NamedVariant, PackStack, SymbolManager, SymbolTab, split_path_list,
};

const ENV_PACKS: &str = "SYMBOLCHAT_PACKS";
const ENV_CONFIG: &str = "SYMBOLCHAT_CONFIG";

#[derive(Parser, Debug)]
#[command(name = "symbol-catalog")]
#[command(about = "Load symbol tabs from resource packs and print them as JSON")]
struct Cli {
    /// Resource pack root, lowest priority first. Repeatable; appended after SYMBOLCHAT_PACKS.
    #[arg(long = "pack")]
    packs: Vec<PathBuf>,
    /// JSON settings with `favorite_symbols` and `custom_kaomojis` (or set SYMBOLCHAT_CONFIG).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every tab in display order.
    Tabs,
    /// Print one tab with all of its symbols.
    Show {
        /// Tab identifier, e.g. `symbol_chat:faces`.
        tab: String,
    },
    /// Print the configured favorite symbols.
    Favorites,
}

#[derive(Serialize)]
struct TabSummary {
    id: Identifier,
    icon: String,
    order: i32,
    #[serde(rename = "type")]
    kind: &'static str,
    search_bar: bool,
    favorites_only: bool,
    lists: Vec<Identifier>,
    symbol_count: usize,
}

#[derive(Serialize)]
struct TabDetail {
    #[serde(flatten)]
    summary: TabSummary,
    symbols: Vec<ListDetail>,
}

#[derive(Serialize)]
struct ListDetail {
    id: Identifier,
    symbols: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = init_logging(&LogConfig::from_verbosity(cli.verbose)) {
        eprintln!("warning: logging disabled: {err}");
    }
    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let manager = SymbolManager::new();

    if let Some(path) = config_path(cli.config) {
        let config = ConfigFile::load(&path)?;
        manager.on_config_reload(&config);
    }

    let packs = pack_roots(cli.packs);
    if packs.is_empty() {
        bail!("no resource packs given; pass --pack <dir> or set {ENV_PACKS}");
    }
    let stack = PackStack::new(packs);
    manager
        .reload(&stack)
        .context("loading symbol catalog")?;

    match cli.command {
        Command::Tabs => {
            let tabs: Vec<TabSummary> = manager
                .tabs()
                .iter()
                .map(|tab| summarize(&manager, tab))
                .collect();
            println!("{}", serde_json::to_string_pretty(&tabs)?);
        }
        Command::Show { tab } => {
            let id = Identifier::parse(&tab).with_context(|| format!("invalid tab id '{tab}'"))?;
            let Some(found) = manager.tab(&id) else {
                bail!("no tab named {id}");
            };
            let detail = TabDetail {
                summary: summarize(&manager, &found),
                symbols: found
                    .lists()
                    .iter()
                    .map(|list| ListDetail {
                        id: list.id().clone(),
                        symbols: list.to_vec(),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&detail)?);
        }
        Command::Favorites => {
            let favorites: Vec<String> = manager.favorite_symbols().collect();
            println!("{}", serde_json::to_string(&favorites)?);
        }
    }
    Ok(())
}

fn summarize(manager: &SymbolManager, tab: &SymbolTab) -> TabSummary {
    TabSummary {
        id: tab.id().clone(),
        icon: tab.icon().to_string(),
        order: tab.order(),
        kind: tab.kind().name(),
        search_bar: tab.has_search_bar(),
        favorites_only: manager.is_only_favorites(tab),
        lists: tab.lists().iter().map(|list| list.id().clone()).collect(),
        symbol_count: tab.symbol_count(),
    }
}

fn pack_roots(cli_packs: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut roots = env::var_os(ENV_PACKS)
        .map(|raw| split_path_list(&raw))
        .unwrap_or_default();
    roots.extend(cli_packs);
    roots
}

fn config_path(cli_config: Option<PathBuf>) -> Option<PathBuf> {
    cli_config.or_else(|| {
        env::var_os(ENV_CONFIG)
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from)
    })
}
