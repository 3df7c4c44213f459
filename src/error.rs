//! # Errors
//!
//! Error type returned by the editor prompt.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{io, process::ExitStatus};

use thiserror::Error;

/// Result alias for prompt operations.
pub type Result<T, E = PromptError> = std::result::Result<T, E>;

/// Something that went wrong while asking an editor question.
///
/// Every variant is fatal to the question being asked. [`PromptError::Interrupted`]
/// is the one callers are expected to match on: it means the user pressed
/// Ctrl-C and the whole question sequence should stop.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("could not render prompt: {0}")]
    Render(#[source] io::Error),

    #[error("could not read terminal input: {0}")]
    Input(#[source] io::Error),

    #[error("interrupted")]
    Interrupted,

    #[error("could not {action} temporary file: {source}")]
    TempFile {
        action: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("invalid editor command: {command:?}")]
    EditorCommand { command: String },

    #[error("failed to launch editor `{program}`: {source}")]
    EditorSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("editor `{program}` exited with error: {status}")]
    EditorFailed { program: String, status: ExitStatus },
}

impl PromptError {
    /// Returns true if the user pressed Ctrl-C.
    pub const fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted)
    }

    pub(crate) fn temp_file(action: &'static str) -> impl FnOnce(io::Error) -> Self {
        move |source| Self::TempFile { action, source }
    }
}
