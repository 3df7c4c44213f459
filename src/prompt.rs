//! # Editor Prompt
//!
//! A question answered in the user's text editor. The user presses `e` to
//! open the editor on a temporary file or enter to skip.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::{Path, PathBuf};

use crate::{
    buffer::EditBuffer,
    config::PromptConfig,
    constants::{
        ANSWER_RECEIVED, DEFAULT_FILE_PATTERN, KEY_EDIT, KEY_END_TRANSMISSION, KEY_INTERRUPT,
    },
    editor::{EditorCommand, Launcher},
    error::{PromptError, Result},
    render::{render_question, Frame, TemplateData},
    terminal::{Session, Terminal},
};

/// What a key press means while waiting for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Open the editor
    Edit,
    /// Accept the default without editing
    Skip,
    /// Abort the whole prompt sequence
    Interrupt,
    /// Show the help text and keep waiting
    ShowHelp,
    Ignore,
}

impl KeyAction {
    pub fn classify(key: char, config: &PromptConfig, has_help: bool) -> Self {
        match key {
            // Ctrl-D opens the editor too
            KEY_EDIT | KEY_END_TRANSMISSION => Self::Edit,
            '\r' | '\n' => Self::Skip,
            KEY_INTERRUPT => Self::Interrupt,
            _ if has_help && config.is_help_key(key) => Self::ShowHelp,
            _ => Self::Ignore,
        }
    }
}

/// An editor question.
#[derive(Debug, Clone)]
pub struct EditorPrompt {
    pub message: String,
    pub default: String,
    pub help: String,
    /// Don't show the default in the question
    pub hide_default: bool,
    /// Seed the editor with the default instead of substituting it for an
    /// empty answer
    pub append_default: bool,
    /// Temp file name pattern, e.g. `PR_BODY*.md`
    pub file_name: String,
    editor: EditorCommand,
    temp_dir: Option<PathBuf>,
}

impl EditorPrompt {
    pub fn new(message: impl Into<String>, editor: EditorCommand) -> Self {
        Self {
            message: message.into(),
            default: String::new(),
            help: String::new(),
            hide_default: false,
            append_default: false,
            file_name: String::new(),
            editor,
            temp_dir: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    #[must_use]
    pub const fn with_hide_default(mut self, hide: bool) -> Self {
        self.hide_default = hide;
        self
    }

    #[must_use]
    pub const fn with_append_default(mut self, append: bool) -> Self {
        self.append_default = append;
        self
    }

    #[must_use]
    pub fn with_file_name(mut self, pattern: impl Into<String>) -> Self {
        self.file_name = pattern.into();
        self
    }

    /// Creates the edit buffer in `dir` instead of the system temp directory.
    #[must_use]
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    pub const fn editor(&self) -> &EditorCommand {
        &self.editor
    }

    pub fn temp_dir(&self) -> Option<&Path> {
        self.temp_dir.as_deref()
    }

    /// Asks the question and returns the answer.
    ///
    /// Returns an empty string if the user skipped with enter; the caller
    /// decides what that means. Otherwise returns the edited text, or the
    /// default when the editor left the file empty.
    pub fn prompt<T, L>(&self, term: &mut T, launcher: &L, config: &PromptConfig) -> Result<String>
    where
        T: Terminal + ?Sized,
        L: Launcher + ?Sized,
    {
        let initial = if !self.default.is_empty() && self.append_default {
            self.default.as_str()
        } else {
            ""
        };
        self.run_edit(initial, term, launcher, config)
    }

    /// Redraws the question in its answered form.
    pub fn cleanup<T>(&self, term: &mut T, config: &PromptConfig) -> Result<()>
    where
        T: Terminal + ?Sized,
    {
        let data = TemplateData {
            answer: ANSWER_RECEIVED,
            show_answer: true,
            ..self.template_data()
        };
        term.render(&render_question(&data, config))
            .map_err(PromptError::Render)
    }

    /// [`prompt`](Self::prompt) followed by [`cleanup`](Self::cleanup).
    pub fn ask<T, L>(&self, term: &mut T, launcher: &L, config: &PromptConfig) -> Result<String>
    where
        T: Terminal + ?Sized,
        L: Launcher + ?Sized,
    {
        let answer = self.prompt(term, launcher, config)?;
        self.cleanup(term, config)?;
        Ok(answer)
    }

    fn run_edit<T, L>(
        &self,
        initial: &str,
        term: &mut T,
        launcher: &L,
        config: &PromptConfig,
    ) -> Result<String>
    where
        T: Terminal + ?Sized,
        L: Launcher + ?Sized,
    {
        term.render(&self.frame(config, false))
            .map_err(PromptError::Render)?;

        let mut session = Session::start(term).map_err(PromptError::Input)?;

        loop {
            let key = session.read_key().map_err(PromptError::Input)?;
            match KeyAction::classify(key, config, !self.help.is_empty()) {
                KeyAction::Edit => break,
                KeyAction::Skip => return Ok(String::new()),
                KeyAction::Interrupt => return Err(PromptError::Interrupted),
                KeyAction::ShowHelp => session
                    .render(&self.frame(config, true))
                    .map_err(PromptError::Render)?,
                KeyAction::Ignore => {}
            }
        }

        let pattern = if self.file_name.is_empty() {
            DEFAULT_FILE_PATTERN
        } else {
            &self.file_name
        };
        let buffer = EditBuffer::create(pattern, self.temp_dir(), initial)?;

        // The editor draws its own UI
        session
            .set_cursor_visible(true)
            .map_err(PromptError::Render)?;
        launcher.launch(&self.editor, buffer.path(), session.editor_stdio())?;

        let text = buffer.read_back()?;
        buffer.close()?;

        if text.is_empty() && !self.append_default {
            return Ok(self.default.clone());
        }

        Ok(text)
    }

    fn template_data(&self) -> TemplateData<'_> {
        TemplateData {
            message: &self.message,
            default: &self.default,
            help: &self.help,
            hide_default: self.hide_default,
            editor_name: self.editor.name(),
            ..TemplateData::default()
        }
    }

    fn frame(&self, config: &PromptConfig, show_help: bool) -> Frame {
        let data = TemplateData {
            show_help,
            ..self.template_data()
        };
        render_question(&data, config)
    }
}
