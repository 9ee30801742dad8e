//! CLI entry point.
//!
//! # Responsibility
//! - Seed a store, add one item, print that item as a JSON line.
//! - Start file logging only when `TODO_LOG_DIR` is set.

use log::info;
use std::error::Error;
use std::ffi::OsString;
use std::process::ExitCode;
use todo_core::{default_items, init_logging, LogConfig, TodoStore};

const NEW_ITEM_TITLE: &str = "This is a new to do";

fn main() -> ExitCode {
    match run(|key| std::env::var_os(key)) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("todo: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Returns the line to print; nothing is written to stdout here.
fn run<F>(env: F) -> Result<String, Box<dyn Error>>
where
    F: Fn(&str) -> Option<OsString>,
{
    let config = LogConfig::from_lookup(env)?;
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(config.level, log_dir)?;
    }

    let mut store = TodoStore::with_items(default_items())?;
    let line = add_and_render(&mut store, NEW_ITEM_TITLE)?;
    info!(
        "event=cli_run module=cli status=ok items={} version={}",
        store.len(),
        todo_core::core_version()
    );
    Ok(line)
}

fn add_and_render(store: &mut TodoStore, title: &str) -> Result<String, serde_json::Error> {
    store.add_item(title).to_json()
}
