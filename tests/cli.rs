// symbol-catalog binary behavior: JSON output on stdout, errors on stderr.
#[path = "support/common.rs"]
mod common;

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs;
use std::process::{Command, Output};

use common::FixturePack;

fn symbol_catalog() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_symbol-catalog"));
    cmd.env_remove("SYMBOLCHAT_PACKS")
        .env_remove("SYMBOLCHAT_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn run(mut cmd: Command) -> Result<Output> {
    cmd.output().context("failed to execute symbol-catalog")
}

fn sample_pack() -> Result<FixturePack> {
    let pack = FixturePack::new()?;
    pack.tab(
        "symbol_chat:faces",
        &json!({"order": 2, "icon": "☺", "search_bar": true, "symbols": ["symbol_chat:faces"]}),
    )?
    .tab(
        "symbol_chat:favorites",
        &json!({"order": 0, "icon": "★", "symbols": ["symbol_chat:favorites"]}),
    )?
    .symbols("symbol_chat:faces", "☺☹")?;
    Ok(pack)
}

#[test]
fn tabs_lists_in_display_order() -> Result<()> {
    let pack = sample_pack()?;
    let mut cmd = symbol_catalog();
    cmd.arg("--pack").arg(pack.root()).arg("tabs");
    let output = run(cmd)?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let tabs: Value = serde_json::from_slice(&output.stdout)?;
    let tabs = tabs.as_array().context("tabs output should be an array")?;
    assert_eq!(tabs.len(), 2);
    assert_eq!(tabs[0]["id"], "symbol_chat:favorites");
    assert_eq!(tabs[0]["favorites_only"], true);
    assert_eq!(tabs[1]["id"], "symbol_chat:faces");
    assert_eq!(tabs[1]["type"], "SYMBOLS");
    assert_eq!(tabs[1]["search_bar"], true);
    assert_eq!(tabs[1]["symbol_count"], 2);
    Ok(())
}

#[test]
fn show_prints_symbols_and_config_favorites() -> Result<()> {
    let pack = sample_pack()?;
    let config = pack.root().join("settings.json");
    fs::write(&config, json!({"favorite_symbols": "★☆"}).to_string())?;

    let mut cmd = symbol_catalog();
    cmd.arg("--pack")
        .arg(pack.root())
        .arg("--config")
        .arg(&config)
        .arg("show")
        .arg("symbol_chat:favorites");
    let output = run(cmd)?;
    assert!(output.status.success());
    let detail: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(detail["symbols"][0]["id"], "symbol_chat:favorites");
    assert_eq!(detail["symbols"][0]["symbols"], json!(["★", "☆"]));

    let mut cmd = symbol_catalog();
    cmd.env("SYMBOLCHAT_PACKS", pack.root())
        .env("SYMBOLCHAT_CONFIG", &config)
        .arg("favorites");
    let output = run(cmd)?;
    assert!(output.status.success());
    let favorites: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(favorites, json!(["★", "☆"]));
    Ok(())
}

#[test]
fn unknown_tab_and_broken_pack_fail() -> Result<()> {
    let pack = sample_pack()?;
    let mut cmd = symbol_catalog();
    cmd.arg("--pack").arg(pack.root()).arg("show").arg("symbol_chat:nope");
    let output = run(cmd)?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no tab named symbol_chat:nope"));

    pack.raw_tab("symbol_chat:broken", "[]")?;
    let mut cmd = symbol_catalog();
    cmd.arg("--pack").arg(pack.root()).arg("tabs");
    let output = run(cmd)?;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("symbol_chat:broken"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn requires_a_pack() -> Result<()> {
    let mut cmd = symbol_catalog();
    cmd.arg("tabs");
    let output = run(cmd)?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no resource packs given"));
    Ok(())
}
