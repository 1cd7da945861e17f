mod cli;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Commands};
use edit_layout::config::load_settings;
use edit_layout::editor::ipc::parse_actions;
use edit_layout::editor::{LayoutReducer, Session};
use edit_layout::error::AppError;
use edit_layout::layout::layout_file::{read_configuration, FileStore};
use edit_layout::layout::pack_raw;
use edit_layout::{logging, render};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logger(cli.log_level.as_deref()) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, AppError> {
    let settings = load_settings(cli.settings.as_deref())?;
    let reducer = LayoutReducer::new(settings.field_sizes());

    match cli.command {
        Commands::Pack { input } => cmd_pack(&input)?,
        Commands::Preview { input } => cmd_preview(&input, reducer)?,
        Commands::Apply {
            input,
            actions,
            output,
        } => cmd_apply(&input, &actions, output, reducer)?,
        Commands::Check { input } => return cmd_check(&input),
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_pack(input: &Path) -> Result<(), AppError> {
    let document = read_configuration(input)?;
    let packed = pack_raw(&document.schema.layouts.edit);
    let json = serde_json::to_string_pretty(&packed)
        .map_err(|e| AppError::ConfigurationError(format!("Failed to serialize layout: {}", e)))?;
    println!("{}", json);
    Ok(())
}

fn cmd_preview(input: &Path, reducer: LayoutReducer) -> Result<(), AppError> {
    let session = Session::open(FileStore::new(input), reducer)?;
    let state = session.state();

    print!("{}", render::render_layout(&state.modified_data.layouts.edit));
    print!("{}", render::render_list(&state.list_fields()));

    let addable = state.addable_fields();
    if !addable.is_empty() {
        println!("not displayed: {}", addable.join(", "));
    }
    Ok(())
}

fn cmd_apply(
    input: &Path,
    actions: &Path,
    output: Option<PathBuf>,
    reducer: LayoutReducer,
) -> Result<(), AppError> {
    let script = std::fs::read_to_string(actions)?;
    let actions = parse_actions(&script)?;

    let store = match output {
        Some(output) => FileStore::new(input).with_output(output),
        None => FileStore::new(input).with_stdout(),
    };
    let mut session = Session::open(store, reducer)?;

    let report = session.apply_all(actions);
    eprintln!(
        "Applied {} action(s), rejected {}",
        report.applied,
        report.rejected.len()
    );
    for (index, e) in &report.rejected {
        eprintln!("  action #{}: {}", index + 1, e);
    }

    session.save()?;
    Ok(())
}

fn cmd_check(input: &Path) -> Result<ExitCode, AppError> {
    let document = read_configuration(input)?;

    let mut unknown: Vec<String> = document
        .schema
        .unknown_references()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    for (uid, component) in &document.components {
        unknown.extend(
            component
                .unknown_references()
                .into_iter()
                .map(|name| format!("{}.{}", uid, name)),
        );
    }

    if unknown.is_empty() {
        eprintln!("All layout entries match an attribute");
        return Ok(ExitCode::SUCCESS);
    }
    for name in &unknown {
        println!("unknown field: {}", name);
    }
    Ok(ExitCode::from(2))
}
