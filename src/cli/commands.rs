//! Command dispatch

use std::io::{self, IsTerminal, Read};

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{format_numbers, to_display_tree, TreeRecord};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see `bstree --help`".into(),
        ));
    };

    match command {
        Commands::Build {
            numbers,
            no_save,
            compact,
            tree,
        } => cmd_build(cli, numbers, *no_save, *compact, *tree),
        Commands::Parse { numbers } => cmd_parse(cli, numbers),
        Commands::History { json, limit } => cmd_history(cli, *json, *limit),
        Commands::Show { id, tree } => cmd_show(cli, *id, *tree),
        Commands::Config { command } => cmd_config(cli, command),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "bstree", &mut io::stdout());
            Ok(())
        }
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    Ok(settings)
}

/// Raw number text from arguments, or from stdin when none were given.
fn read_numbers(numbers: &[String]) -> CliResult<String> {
    if !numbers.is_empty() {
        return Ok(numbers.join(" "));
    }
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::Usage(
            "no numbers given; pass them as arguments or pipe them on stdin".into(),
        ));
    }
    let mut raw = String::new();
    stdin
        .read_to_string(&mut raw)
        .map_err(|e| InfraError::io("read numbers from stdin", e))?;
    Ok(raw)
}

fn encode_failed(context: &str, e: serde_json::Error) -> CliError {
    CliError::from(ApplicationError::OperationFailed {
        context: context.to_string(),
        source: Box::new(e),
    })
}

/// Single-line form of stored tree JSON.
fn compact_json(tree_json: &str) -> String {
    serde_json::from_str::<serde_json::Value>(tree_json)
        .map(|v| v.to_string())
        .unwrap_or_else(|_| tree_json.split_whitespace().collect())
}

#[instrument(skip(cli))]
fn cmd_build(
    cli: &Cli,
    numbers: &[String],
    no_save: bool,
    compact: bool,
    tree: bool,
) -> CliResult<()> {
    let mut settings = load_settings(cli)?;
    if compact {
        settings.pretty_json = false;
    }
    let raw = read_numbers(numbers)?;
    let service = ServiceContainer::new(settings).tree_service();

    let built = if no_save {
        service.prepare(Some(raw.as_str()))?
    } else {
        service.build_and_save(Some(raw.as_str()))?
    };

    output::info(&built.tree_json);
    if tree {
        output::diagnostic(&to_display_tree(&built.tree));
    }
    if let Some(record) = &built.record {
        output::status(&format!(
            "stored tree #{} ({} nodes from {})",
            record.id,
            built.tree.len(),
            record.input_numbers
        ));
    }
    Ok(())
}

#[instrument(skip(cli))]
fn cmd_parse(cli: &Cli, numbers: &[String]) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let raw = read_numbers(numbers)?;
    let parsed = ServiceContainer::new(settings)
        .tree_service()
        .parse(Some(raw.as_str()))?;
    output::info(&format_numbers(&parsed));
    Ok(())
}

#[instrument(skip(cli))]
fn cmd_history(cli: &Cli, json: bool, limit: Option<usize>) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let mut records = ServiceContainer::new(settings).tree_service().history()?;
    if let Some(limit) = limit {
        records.truncate(limit);
    }

    if json {
        let text = serde_json::to_string_pretty(&records)
            .map_err(|e| encode_failed("encode history", e))?;
        output::info(&text);
        return Ok(());
    }

    if records.is_empty() {
        output::warning("no trees stored yet");
        return Ok(());
    }
    for record in &records {
        print_record_header(record);
        output::detail(&compact_json(&record.tree_json));
    }
    Ok(())
}

#[instrument(skip(cli))]
fn cmd_show(cli: &Cli, id: u64, tree: bool) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let service = ServiceContainer::new(settings).tree_service();
    let record = service.get(id)?;

    print_record_header(&record);
    if tree {
        output::info(&to_display_tree(&service.rebuild(&record)?));
    } else {
        output::info(&record.tree_json);
    }
    Ok(())
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("cannot determine config directory"),
        },
    }
    Ok(())
}

fn print_record_header(record: &TreeRecord) {
    output::header(&format!(
        "#{}  {}  {}",
        record.id,
        record.created_at.format("%Y-%m-%d %H:%M:%S"),
        record.input_numbers
    ));
}
