//! # Constants
//!
//! Centralized constants for magic values used throughout editprompt.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Edit Buffer
// =============================================================================

/// UTF-8 byte-order mark written at the start of every edit buffer.
///
/// notepad.exe picks the encoding of an "empty" file from the system locale
/// (GBK on a Chinese Windows, for example). A file starting with a BOM is not
/// empty, so it is always opened as UTF-8.
pub const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Temp file name pattern used when the question does not set one.
/// The last `*` is replaced by a random string.
pub const DEFAULT_FILE_PATTERN: &str = "survey*.txt";

// =============================================================================
// Keys
// =============================================================================

/// Key that opens the editor.
pub const KEY_EDIT: char = 'e';

/// Ctrl-C.
pub const KEY_INTERRUPT: char = '\u{3}';

/// Ctrl-D.
pub const KEY_END_TRANSMISSION: char = '\u{4}';

/// Default key that reveals the help text.
pub const DEFAULT_HELP_INPUT: &str = "?";

// =============================================================================
// Editor Selection
// =============================================================================

/// Environment variables consulted for the editor, highest priority first.
pub const EDITOR_ENV_VARS: [&str; 3] = ["GIT_EDITOR", "VISUAL", "EDITOR"];

/// Editor used on Windows when no environment variable is set.
pub const DEFAULT_EDITOR_WINDOWS: &str = "notepad";

/// Editor used everywhere else when no environment variable is set.
pub const DEFAULT_EDITOR_UNIX: &str = "nano";

// =============================================================================
// Rendering
// =============================================================================

/// Answer shown once the question has been answered.
pub const ANSWER_RECEIVED: &str = "<Received>";

// =============================================================================
// File System
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "editprompt";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";
