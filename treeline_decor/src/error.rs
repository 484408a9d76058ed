// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoration configuration errors.

use core::fmt;

/// A decoration configuration cannot be rendered.
///
/// This is a caller error surfaced when a decorator is constructed —
/// configuration is immutable afterwards, so nothing can fail later at line
/// construction time. The caller either fixes the configuration or falls
/// back to a simpler decorator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecorError {
    /// The per-level indent is narrower than the enabled mandatory glyphs.
    InsufficientIndent {
        /// Configured columns per indent level.
        indent: usize,
        /// Columns the enabled connector and tip glyphs need.
        required: usize,
    },
}

impl fmt::Display for DecorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientIndent { indent, required } => write!(
                f,
                "indent of {indent} column(s) cannot fit {required} column(s) of mandatory glyphs",
            ),
        }
    }
}

impl core::error::Error for DecorError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::DecorError;

    #[test]
    fn display_names_both_widths() {
        let err = DecorError::InsufficientIndent {
            indent: 1,
            required: 2,
        };
        let text = err.to_string();
        assert!(text.contains('1'), "message should name the indent: {text}");
        assert!(text.contains('2'), "message should name the requirement: {text}");
    }
}
