//! # Test Harness
//!
//! A scripted terminal and scripted editors for driving editor questions
//! without a real TTY or editor process.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// each test file is its own crate, so just because something is used in one place doesn't make it dead
#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::VecDeque,
    fs, io,
    path::{Path, PathBuf},
};

use editprompt::{
    constants::{KEY_END_TRANSMISSION, KEY_INTERRUPT},
    EditorCommand, EditorPrompt, EditorStdio, Frame, Launcher, PromptConfig, PromptError,
    Terminal,
};
use tempfile::TempDir;

// =============================================================================
// Scripted Terminal
// =============================================================================

/// Terminal that replays a fixed sequence of keys and records what was drawn.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    keys: VecDeque<char>,
    pub frames: Vec<Frame>,
    pub raw_mode: bool,
    pub cursor_hidden: bool,
    /// Number of times raw mode was entered
    pub sessions: usize,
    /// Cursor state at each key read
    pub hidden_while_reading: Vec<bool>,
}

impl ScriptedTerminal {
    pub fn new(keys: &str) -> Self {
        Self {
            keys: keys.chars().collect(),
            ..Self::default()
        }
    }

    pub fn interrupt() -> Self {
        Self::new(&KEY_INTERRUPT.to_string())
    }

    pub fn end_transmission() -> Self {
        Self::new(&KEY_END_TRANSMISSION.to_string())
    }

    pub fn last_frame(&self) -> &str {
        self.frames.last().map_or("", |frame| frame.plain.as_str())
    }

    /// Raw mode off and cursor visible.
    pub fn is_restored(&self) -> bool {
        !self.raw_mode && !self.cursor_hidden
    }
}

impl Terminal for ScriptedTerminal {
    fn render(&mut self, frame: &Frame) -> io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<char> {
        self.hidden_while_reading.push(self.cursor_hidden);
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more keys"))
    }

    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            self.sessions += 1;
        }
        self.raw_mode = enabled;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.cursor_hidden = !visible;
        Ok(())
    }

    fn editor_stdio(&self) -> EditorStdio {
        EditorStdio::null()
    }
}

// =============================================================================
// Scripted Editors
// =============================================================================

/// One editor launch as observed by a scripted editor.
#[derive(Debug, Clone)]
pub struct Launch {
    pub program: String,
    pub path: PathBuf,
    /// File content when the editor opened it
    pub initial: Vec<u8>,
}

/// What a scripted editor does to the file.
#[derive(Debug, Clone)]
pub enum Action {
    /// Leave the file alone
    Keep,
    /// Replace the whole file
    Overwrite(Vec<u8>),
    /// Write a new file and move it into place, like vim
    Swap(Vec<u8>),
    /// Delete the file
    Remove,
    /// Fail to start
    Fail,
}

/// Editor that records each launch and applies a fixed action.
#[derive(Debug)]
pub struct ScriptedEditor {
    action: Action,
    pub launches: RefCell<Vec<Launch>>,
}

impl ScriptedEditor {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            launches: RefCell::new(Vec::new()),
        }
    }

    pub fn keep() -> Self {
        Self::new(Action::Keep)
    }

    pub fn writing(content: impl Into<Vec<u8>>) -> Self {
        Self::new(Action::Overwrite(content.into()))
    }

    pub fn launch_count(&self) -> usize {
        self.launches.borrow().len()
    }

    pub fn last_launch(&self) -> Launch {
        self.launches
            .borrow()
            .last()
            .cloned()
            .expect("editor was never launched")
    }
}

impl Launcher for ScriptedEditor {
    fn launch(
        &self,
        editor: &EditorCommand,
        path: &Path,
        _stdio: EditorStdio,
    ) -> Result<(), PromptError> {
        let initial = fs::read(path).expect("edit buffer should exist when the editor starts");
        self.launches.borrow_mut().push(Launch {
            program: editor.program().to_string(),
            path: path.to_path_buf(),
            initial,
        });

        let io_err = |source| PromptError::EditorSpawn {
            program: editor.program().to_string(),
            source,
        };

        match &self.action {
            Action::Keep => Ok(()),
            Action::Overwrite(content) => fs::write(path, content).map_err(io_err),
            Action::Swap(content) => {
                let swap = path.with_extension("swp");
                fs::write(&swap, content).map_err(io_err)?;
                fs::rename(&swap, path).map_err(io_err)
            }
            Action::Remove => fs::remove_file(path).map_err(io_err),
            Action::Fail => Err(io_err(io::Error::new(
                io::ErrorKind::NotFound,
                "editor not found",
            ))),
        }
    }
}

// =============================================================================
// Test Environment
// =============================================================================

/// Private temp directory for edit buffers, so tests can check that nothing
/// is left behind.
pub struct TestEnv {
    pub temp_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// An editor question writing its buffer into this environment.
    pub fn prompt(&self, message: &str) -> EditorPrompt {
        let editor = EditorCommand::parse("vim").expect("valid editor");
        EditorPrompt::new(message, editor).with_temp_dir(self.temp_dir.path())
    }

    /// Files currently in the temp directory.
    pub fn leftover_files(&self) -> Vec<PathBuf> {
        fs::read_dir(self.temp_dir.path())
            .expect("Failed to read temp dir")
            .map(|entry| entry.expect("Failed to read entry").path())
            .collect()
    }

    pub fn assert_clean(&self) {
        let leftovers = self.leftover_files();
        assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
    }
}

/// Prompt config without colours, so frames compare as plain text.
pub fn plain_config() -> PromptConfig {
    PromptConfig::default().without_color()
}

/// The UTF-8 byte-order mark followed by `text`.
pub fn with_bom(text: &str) -> Vec<u8> {
    let mut bytes = editprompt::constants::BOM.to_vec();
    bytes.extend_from_slice(text.as_bytes());
    bytes
}
