/*
 * ==========================================================================
 * FOLDEX - Parse with Claws!
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the fundamental lexical token types used by the
 *            Foldex tokenizing and parsing stages.
 *
 * Author:    Sam Wilcox
 * Email:     sam@pawx-lang.com
 * GitHub:    https://github.com/samwilcox/foldex
 *
 * License:
 * This file is part of the FOLDEX expression parser project.
 *
 * FOLDEX is dual-licensed under the terms of:
 *   - The MIT License
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

use crate::span::Span;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Represents the **category of a lexical token** in a Foldex
/// expression.
///
/// # Pipeline Role
/// ```text
/// Expression → Tokenizer → TokenKind → Parser → AST
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A single-digit integer literal, `1` through `9`.
    ///
    /// There is deliberately no `0`, no multi-digit literal, and no
    /// negative literal; negation is only expressible through the `-`
    /// operator.
    Int,

    /// A single-letter variable name, `a`-`z` or `A`-`Z`.
    Var,

    /// The `+` operator.
    Plus,

    /// The `-` operator.
    Minus,

    /// The `*` operator.
    Times,

    /// The `/` operator.
    Div,

    /// An opening parenthesis `(`.
    LParen,

    /// A closing parenthesis `)`.
    RParen,

    /// End-of-input marker.
    ///
    /// Never produced by classification; the tokenizer synthesizes it
    /// on every request past the last real token.
    Eof,
}

/// Ordered classification table: each pattern must match the *entire*
/// lexeme. Compiled once on first use.
static CLASSIFIER: OnceLock<Vec<(Regex, TokenKind)>> = OnceLock::new();

fn classifier() -> &'static [(Regex, TokenKind)] {
    CLASSIFIER.get_or_init(|| {
        // The patterns are literal and known-good, so compilation
        // cannot fail at runtime.
        vec![
            (Regex::new(r"^[1-9]$").unwrap(), TokenKind::Int),
            (Regex::new(r"^[a-zA-Z]$").unwrap(), TokenKind::Var),
            (Regex::new(r"^\+$").unwrap(), TokenKind::Plus),
            (Regex::new(r"^-$").unwrap(), TokenKind::Minus),
            (Regex::new(r"^\*$").unwrap(), TokenKind::Times),
            (Regex::new(r"^/$").unwrap(), TokenKind::Div),
            (Regex::new(r"^\($").unwrap(), TokenKind::LParen),
            (Regex::new(r"^\)$").unwrap(), TokenKind::RParen),
        ]
    })
}

/// Classifies a raw space-delimited lexeme into a token kind.
///
/// This is a pure, total function over the input alphabet: a lexeme
/// either matches exactly one pattern in the table or it is not a
/// token at all (`None`). It never returns [`TokenKind::Eof`].
pub fn classify(lexeme: &str) -> Option<TokenKind> {
    classifier()
        .iter()
        .find(|(pattern, _)| pattern.is_match(lexeme))
        .map(|(_, kind)| *kind)
}

/// Represents a **single classified token** produced by the tokenizer.
///
/// The lexeme is preserved verbatim; it only carries meaning for
/// `Int` and `Var` tokens (the operator kinds already say everything).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token. Empty for the
    /// synthetic `Eof` token.
    pub lexeme: String,

    /// Where the token sits in the expression.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: &str, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.to_string(),
            span,
        }
    }

    /// Synthetic end-of-input sentinel.
    pub fn eof(span: Span) -> Self {
        Self {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            span,
        }
    }

    /// Integer value of an `Int` token.
    ///
    /// # Panics
    /// If called on a token whose lexeme is not a digit. Classification
    /// guarantees a single `1`-`9` digit for every `Int` token the
    /// tokenizer produces.
    pub fn int_value(&self) -> i64 {
        self.lexeme
            .parse()
            .expect("Int token lexeme is a single digit")
    }

    /// Variable name of a `Var` token.
    ///
    /// # Panics
    /// If called on a token with an empty lexeme. Classification
    /// guarantees a single letter for every `Var` token.
    pub fn var_name(&self) -> char {
        self.lexeme
            .chars()
            .next()
            .expect("Var token lexeme is a single letter")
    }
}

impl fmt::Display for Token {
    /// Formats a token for user-facing error output: the exact source
    /// text the user wrote, or `end of input` for the sentinel.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::Eof {
            write!(f, "end of input")
        } else {
            write!(f, "{}", self.lexeme)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_digits_one_through_nine() {
        for d in '1'..='9' {
            assert_eq!(classify(&d.to_string()), Some(TokenKind::Int));
        }
    }

    #[test]
    fn rejects_zero_and_multi_digit_literals() {
        assert_eq!(classify("0"), None);
        assert_eq!(classify("12"), None);
        assert_eq!(classify("-1"), None);
    }

    #[test]
    fn classifies_single_letters_of_both_cases() {
        assert_eq!(classify("x"), Some(TokenKind::Var));
        assert_eq!(classify("Z"), Some(TokenKind::Var));
        assert_eq!(classify("xy"), None);
        assert_eq!(classify("_"), None);
    }

    #[test]
    fn classifies_operators_and_parens() {
        assert_eq!(classify("+"), Some(TokenKind::Plus));
        assert_eq!(classify("-"), Some(TokenKind::Minus));
        assert_eq!(classify("*"), Some(TokenKind::Times));
        assert_eq!(classify("/"), Some(TokenKind::Div));
        assert_eq!(classify("("), Some(TokenKind::LParen));
        assert_eq!(classify(")"), Some(TokenKind::RParen));
    }

    #[test]
    fn rejects_empty_and_compound_lexemes() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("++"), None);
        assert_eq!(classify("1+2"), None);
        assert_eq!(classify(" "), None);
    }
}
