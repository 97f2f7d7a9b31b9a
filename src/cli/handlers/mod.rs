mod init;
pub use init::cmd_init;

use std::path::Path;

use crate::cli::commands::Cli;
use crate::cli::logging::init_logging;
use crate::cli::output::{format_listing, list_to_json};
use crate::io::config_io;
use crate::io::list_io::{load_list, save_list};
use crate::model::{Config, TaskList};
use crate::ops::order::sort_tasks;
use crate::ops::task_ops;
use crate::tui;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(flag) = cli.reserved_flag() {
        return Err(format!("{}: reserved, not implemented", flag).into());
    }

    init_logging(cli.interactive());

    let mut config = config_io::read_config()?;
    if let Some(unicode) = cli.unicode_override() {
        config.unicode = unicode;
    }
    let path = config.list_path();

    if cli.init {
        cmd_init(&path)?;
    }

    let mut list = load_list(&path)?;
    append_texts(&mut list, &cli.texts, tui::app::now())?;

    if cli.interactive() {
        cmd_interactive(&path, list, &config)
    } else if cli.texts.is_empty() {
        cmd_listing(list, cli.json)
    } else {
        cmd_save(&path, list)
    }
}

/// Append each text at `now`, in argument order
fn append_texts(
    list: &mut TaskList,
    texts: &[String],
    now: crate::model::Timestamp,
) -> Result<(), task_ops::TaskError> {
    for text in texts {
        task_ops::append(list, text, now)?;
        tracing::info!(text = %text, "task added");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Modes
// ---------------------------------------------------------------------------

fn cmd_interactive(
    path: &Path,
    list: TaskList,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    // Save whatever the session produced, even when the terminal failed
    let (list, result) = tui::run(list, config);
    let saved = save_list(path, &list);
    result?;
    saved?;
    Ok(())
}

fn cmd_save(path: &Path, mut list: TaskList) -> Result<(), Box<dyn std::error::Error>> {
    sort_tasks(&mut list);
    save_list(path, &list)?;
    Ok(())
}

fn cmd_listing(mut list: TaskList, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    sort_tasks(&mut list);
    if json {
        println!("{}", serde_json::to_string_pretty(&list_to_json(&list))?);
    } else {
        let listing = format_listing(&list);
        if !listing.is_empty() {
            println!("{}", listing);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_texts_in_argument_order() {
        let mut list = TaskList::new();
        append_texts(&mut list, &["first".into(), "second".into()], 100).unwrap();
        // Each append goes to the front
        let texts: Vec<&str> = list.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first"]);
        assert!(list.iter().all(|t| t.added_at == 100));
    }

    #[test]
    fn blank_text_is_rejected() {
        let mut list = TaskList::new();
        assert!(append_texts(&mut list, &["ok".into(), "  ".into()], 1).is_err());
    }
}
