//! # editprompt
//!
//! An "editor" question for interactive command-line prompts: the user
//! presses `e` to write the answer in their own text editor, or enter to
//! skip.
//!
//! ## Features
//!
//! - **Editor Selection**: `$GIT_EDITOR`, `$VISUAL`, `$EDITOR`, then a platform default
//! - **Shell Quoting**: editor commands like `code --wait` are split properly
//! - **Encoding Safe**: edit buffers start with a UTF-8 BOM so notepad reads them as UTF-8
//! - **Scoped Terminal State**: raw mode and the cursor are always restored
//!
//! ```no_run
//! use editprompt::{CrosstermTerminal, EditorCommand, EditorPrompt, PromptConfig, SystemLauncher};
//!
//! # fn main() -> Result<(), editprompt::PromptError> {
//! let editor = EditorCommand::from_env()?;
//! let body = EditorPrompt::new("Body", editor)
//!     .with_default("No description")
//!     .with_file_name("BODY*.md")
//!     .ask(&mut CrosstermTerminal::new(), &SystemLauncher, &PromptConfig::default())?;
//! println!("{body}");
//! # Ok(())
//! # }
//! ```
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod buffer;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod prompt;
pub mod render;
pub mod terminal;
pub mod ui;

pub use config::{set_home_override, PromptConfig};
pub use editor::{EditorCommand, EditorStdio, Launcher, SystemLauncher};
pub use error::PromptError;
pub use prompt::{EditorPrompt, KeyAction};
pub use render::Frame;
pub use terminal::{CrosstermTerminal, Terminal};
