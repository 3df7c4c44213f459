//! # editprompt CLI
//!
//! Asks a single editor question and prints the answer on stdout.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;

use editprompt::{
    ui, CrosstermTerminal, EditorCommand, EditorPrompt, PromptConfig, PromptError, SystemLauncher,
};

const GLOBAL_HELP: &str = "\
Editor Selection (first one set wins):
  $GIT_EDITOR, $VISUAL, $EDITOR, then notepad on Windows or nano elsewhere

Keys:
  e          Open the editor
  enter      Skip without editing (prints nothing)
  ?          Show the help text (when --help-text is given)
  ctrl-c     Abort (exit code 130)

Configuration File:
  ~/.config/editprompt/config    help_input, color, [icons.question], [icons.help]

Examples:
  editprompt --message \"Body\" --file-name \"BODY*.md\"
  editprompt -m \"Commit message\" --default \"WIP\" --append-default";

/// Exit code for Ctrl-C, as shells report SIGINT.
const EXIT_INTERRUPTED: u8 = 130;

#[derive(Parser)]
#[command(name = "editprompt")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Ask a question answered in your text editor")]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Question shown to the user
    #[arg(short, long)]
    message: String,

    /// Answer used when the editor leaves the file empty
    #[arg(short, long, default_value = "")]
    default: String,

    /// Help text revealed with the help key
    #[arg(long, default_value = "")]
    help_text: String,

    /// Seed the editor with the default instead of substituting it
    #[arg(long)]
    append_default: bool,

    /// Don't show the default in the question
    #[arg(long)]
    hide_default: bool,

    /// Temp file name pattern; the last `*` becomes a random string
    #[arg(long, default_value = "")]
    file_name: String,

    /// Read settings from this file instead of ~/.config/editprompt/config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err
                .downcast_ref::<PromptError>()
                .is_some_and(PromptError::is_interrupted)
            {
                ui::finish_interrupted(&mut std::io::stderr());
                return ExitCode::from(EXIT_INTERRUPTED);
            }
            ui::print_error(err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, validation) = match &cli.config {
        Some(path) => PromptConfig::load_from(path)?,
        None => PromptConfig::load()?,
    };
    ui::print_warnings(&validation.warnings());
    if cli.no_color {
        config = config.without_color();
    }

    if !ui::is_interactive() {
        anyhow::bail!("editprompt needs an interactive terminal on stdin");
    }

    let editor = EditorCommand::from_env().context("Failed to resolve editor")?;

    let prompt = EditorPrompt::new(cli.message, editor)
        .with_default(cli.default)
        .with_help(cli.help_text)
        .with_append_default(cli.append_default)
        .with_hide_default(cli.hide_default)
        .with_file_name(cli.file_name);

    let answer = prompt.ask(&mut CrosstermTerminal::new(), &SystemLauncher, &config)?;

    print!("{answer}");

    Ok(())
}
