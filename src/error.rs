/*
 * ==========================================================================
 * FOLDEX - Parse with Claws!
 * ==========================================================================
 *
 * File:     error.rs
 * Purpose:  The single structured error type surfaced by every stage of
 *           the Foldex pipeline (tokenizing, parsing, simplification).
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

use std::fmt;

/// Every way a Foldex parse can fail.
///
/// All three pipeline stages report through this one type so callers
/// only ever match on a single error channel:
/// - the tokenizer produces [`FoldexError::InvalidToken`]
/// - the parser produces [`FoldexError::UnexpectedToken`] and
///   [`FoldexError::NestingTooDeep`]
/// - the simplifier produces [`FoldexError::DivisionByZero`]
///
/// Token positions are 1-based, counting space-delimited fields from
/// the start of the expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoldexError {
    /// A space-delimited field matched none of the classification
    /// patterns. Carries the raw lexeme (possibly empty, when the
    /// input contains consecutive spaces or is empty altogether).
    InvalidToken { lexeme: String, position: usize },

    /// A grammar production required a token the input did not supply.
    UnexpectedToken {
        found: String,
        expected: &'static str,
        position: usize,
    },

    /// Parenthesis nesting exceeded the parser's depth cap.
    NestingTooDeep { position: usize },

    /// Constant folding evaluated a division whose right operand
    /// folded to zero.
    DivisionByZero,
}

impl FoldexError {
    /// Stable error code (E_TOKEN, E_PARSE, ...), used by diagnostics
    /// output and suitable for matching in scripts.
    pub fn code(&self) -> &'static str {
        match self {
            FoldexError::InvalidToken { .. } => "E_TOKEN",
            FoldexError::UnexpectedToken { .. } => "E_PARSE",
            FoldexError::NestingTooDeep { .. } => "E_DEPTH",
            FoldexError::DivisionByZero => "E_DIV_ZERO",
        }
    }

    /// 1-based token position the error points at, when the error is
    /// tied to a specific token. Division by zero happens during tree
    /// folding and carries no position.
    pub fn position(&self) -> Option<usize> {
        match self {
            FoldexError::InvalidToken { position, .. }
            | FoldexError::UnexpectedToken { position, .. }
            | FoldexError::NestingTooDeep { position } => Some(*position),
            FoldexError::DivisionByZero => None,
        }
    }

    /// Optional follow-up hint rendered below a diagnostic.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            FoldexError::InvalidToken { lexeme, .. } if lexeme.is_empty() => Some(
                "tokens must be separated by exactly one space; \
                 empty fields come from leading, trailing, or doubled spaces",
            ),
            FoldexError::InvalidToken { .. } => Some(
                "valid tokens are a single digit 1-9, a single letter, \
                 or one of + - * / ( )",
            ),
            FoldexError::UnexpectedToken { .. } => None,
            FoldexError::NestingTooDeep { .. } => {
                Some("flatten the expression or reduce parenthesis nesting")
            }
            FoldexError::DivisionByZero => {
                Some("the divisor subexpression folds to 0")
            }
        }
    }
}

impl fmt::Display for FoldexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldexError::InvalidToken { lexeme, position } => write!(
                f,
                "'{}' is not a valid token (token number {})",
                lexeme, position
            ),
            FoldexError::UnexpectedToken {
                found,
                expected,
                position,
            } => write!(
                f,
                "found {} but expected {} at token {}",
                found, expected, position
            ),
            FoldexError::NestingTooDeep { position } => write!(
                f,
                "parenthesis nesting is too deep at token {}",
                position
            ),
            FoldexError::DivisionByZero => {
                write!(f, "division by zero during simplification")
            }
        }
    }
}

impl std::error::Error for FoldexError {}
