//! # Rendering
//!
//! Builds the text of an editor question. Rendering is a pure function of
//! [`TemplateData`] and [`PromptConfig`]; writing it to the screen is the
//! terminal's job.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt::Write;

use owo_colors::{OwoColorize, Style};
use unicode_width::UnicodeWidthStr;

use crate::config::{Icon, IconColor, PromptConfig};

/// Everything the question template shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateData<'a> {
    pub message: &'a str,
    pub default: &'a str,
    pub help: &'a str,
    pub hide_default: bool,
    /// Editor name shown in the launch hint
    pub editor_name: &'a str,
    pub answer: &'a str,
    pub show_answer: bool,
    pub show_help: bool,
}

/// A rendered question.
///
/// `plain` is the same text without escape codes. The terminal uses it to
/// work out how many rows to erase before drawing the next frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub styled: String,
    pub plain: String,
}

impl Frame {
    /// Number of terminal rows the frame occupies at the given width.
    pub fn rows(&self, width: u16) -> usize {
        let width = usize::from(width.max(1));
        self.plain
            .split('\n')
            .map(|line| line.width().div_ceil(width).max(1))
            .sum()
    }
}

/// Renders the question.
///
/// ```text
/// ? <help text>                                   (only when show_help)
/// ? <message> [? for help] (<default>) [(e) to launch nano, enter to skip]
/// ```
///
/// Once answered the hints are replaced by the answer.
pub fn render_question(data: &TemplateData<'_>, config: &PromptConfig) -> Frame {
    let mut out = FrameBuilder::new(config.color);

    if data.show_help {
        out.icon(&config.icons.help);
        out.push(" ", Style::new());
        out.push(data.help, Style::new());
        out.push("\n", Style::new());
    }

    out.icon(&config.icons.question);
    out.push(" ", Style::new());
    out.push(data.message, Style::new().bold());
    out.push(" ", Style::new());

    if data.show_answer {
        out.push(data.answer, Style::new().cyan());
        out.push("\n", Style::new());
    } else {
        if !data.help.is_empty() && !data.show_help {
            out.push(
                &format!("[{} for help]", config.help_input),
                Style::new().cyan(),
            );
            out.push(" ", Style::new());
        }
        if !data.default.is_empty() && !data.hide_default {
            out.push(&format!("({})", data.default), Style::new().white());
            out.push(" ", Style::new());
        }
        out.push(
            &format!("[(e) to launch {}, enter to skip]", data.editor_name),
            Style::new().cyan(),
        );
        out.push(" ", Style::new());
    }

    out.finish()
}

struct FrameBuilder {
    color: bool,
    frame: Frame,
}

impl FrameBuilder {
    const fn new(color: bool) -> Self {
        Self {
            color,
            frame: Frame {
                styled: String::new(),
                plain: String::new(),
            },
        }
    }

    fn push(&mut self, text: &str, style: Style) {
        self.frame.plain.push_str(text);
        if self.color && !text.trim().is_empty() {
            // Writing to a String cannot fail
            let _ = write!(self.frame.styled, "{}", text.style(style));
        } else {
            self.frame.styled.push_str(text);
        }
    }

    fn icon(&mut self, icon: &Icon) {
        let mut style = color_style(icon.color);
        if icon.bold {
            style = style.bold();
        }
        self.push(&icon.text, style);
    }

    fn finish(self) -> Frame {
        self.frame
    }
}

fn color_style(color: IconColor) -> Style {
    let style = Style::new();
    match color {
        IconColor::Default => style,
        IconColor::Black => style.black(),
        IconColor::Red => style.red(),
        IconColor::Green => style.green(),
        IconColor::Yellow => style.yellow(),
        IconColor::Blue => style.blue(),
        IconColor::Magenta => style.magenta(),
        IconColor::Cyan => style.cyan(),
        IconColor::White => style.white(),
    }
}
