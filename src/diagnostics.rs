/*
 * ==========================================================================
 * FOLDEX - Parse with Claws!
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Github:   https://github.com/samwilcox/foldex
 *
 * License:
 * This file is part of the FOLDEX expression parser project.
 *
 * FOLDEX is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::error::FoldexError;

/// Responsible for rendering human-friendly, compiler-style
/// diagnostics for Foldex errors.
///
/// This printer:
/// - Formats errors with their stable code and message
/// - Displays the offending expression
/// - Highlights the offending token using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is intentionally compiler-flavored but simplified for a
/// one-line input, and designed to remain readable without color. The
/// library itself only returns structured [`FoldexError`] values; this
/// type is the CLI's presentation layer.
pub struct DiagnosticPrinter {
    /// The expression being parsed, kept so the offending token can be
    /// shown in context.
    expression: String,
}

impl DiagnosticPrinter {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }

    /// Prints a formatted error diagnostic to stderr.
    ///
    /// # Output Example
    /// ```text
    /// error[E_TOKEN]: '12' is not a valid token (token number 3)
    ///    |
    ///    | 1 + 12
    ///    |     ^
    ///
    /// help: valid tokens are a single digit 1-9, a single letter, or one of + - * / ( )
    /// ```
    pub fn print(&self, error: &FoldexError) {
        eprintln!("error[{}]: {}", error.code(), error);

        // Division by zero happens during folding and points at no
        // particular token, so it gets no caret line.
        if let Some(position) = error.position() {
            let column = self.column_of(position);

            eprintln!("   |");
            eprintln!("   | {}", self.expression);

            let mut underline = String::new();
            for _ in 0..column {
                underline.push(' ');
            }
            underline.push('^');

            eprintln!("   | {}", underline);
        }

        if let Some(help) = error.help() {
            eprintln!("\nhelp: {}", help);
        }
    }

    /// Character offset of the first character of the 1-based token
    /// `position`, recovered by re-splitting the expression the same
    /// way the tokenizer does. A position past the last field (an
    /// error at end of input) points just past the expression.
    fn column_of(&self, position: usize) -> usize {
        let mut column = 0;

        for (index, field) in self.expression.split(' ').enumerate() {
            if index + 1 == position {
                return column;
            }
            column += field.chars().count() + 1;
        }

        self.expression.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_column_matches_token_field() {
        let printer = DiagnosticPrinter::new("1 + 12 * x");
        assert_eq!(printer.column_of(1), 0);
        assert_eq!(printer.column_of(2), 2);
        assert_eq!(printer.column_of(3), 4);
        assert_eq!(printer.column_of(4), 7);
    }

    #[test]
    fn past_the_end_points_after_the_expression() {
        let printer = DiagnosticPrinter::new("( 1");
        assert_eq!(printer.column_of(4), 3);
    }
}
