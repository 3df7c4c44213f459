//! # Configuration
//!
//! Prompt settings: the help key, the icons and whether to colour output.
//! Settings can be loaded from `~/.config/editprompt/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;

use serde::{Deserialize, Serialize};

pub use self::global::{set_home_override, ConfigValidation};
use crate::constants::DEFAULT_HELP_INPUT;

/// Settings shared by every question of a prompt session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Key that reveals the help text (default: "?")
    pub help_input: String,

    /// Whether to style output with ANSI colours
    pub color: bool,

    /// Icons printed in front of the question and the help line
    pub icons: Icons,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            help_input: DEFAULT_HELP_INPUT.to_string(),
            color: true,
            icons: Icons::default(),
        }
    }
}

impl PromptConfig {
    /// Returns a copy with colours switched off.
    #[must_use]
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    /// Returns true if `key` is the configured help key.
    pub fn is_help_key(&self, key: char) -> bool {
        let mut buf = [0; 4];
        self.help_input.as_str() == &*key.encode_utf8(&mut buf)
    }
}

/// Icon set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Icons {
    pub question: Icon,
    pub help: Icon,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            question: Icon::new("?", IconColor::Green, true),
            help: Icon::new("?", IconColor::Cyan, false),
        }
    }
}

/// A glyph and the style it is printed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub text: String,
    #[serde(default)]
    pub color: IconColor,
    #[serde(default)]
    pub bold: bool,
}

impl Icon {
    pub fn new(text: impl Into<String>, color: IconColor, bold: bool) -> Self {
        Self {
            text: text.into(),
            color,
            bold,
        }
    }
}

/// Terminal colours an icon can use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconColor {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}
