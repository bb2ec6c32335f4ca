/*
 * ==========================================================================
 * FOLDEX - Parse with Claws!
 * ==========================================================================
 *
 * File:      tokenizer.rs
 * Purpose:   Splits a one-line expression into classified tokens and
 *            hands them to the parser one at a time.
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

use crate::error::FoldexError;
use crate::lexer::token::{classify, Token};
use crate::span::Span;

/// Splits an expression into tokens and identifies their kinds.
///
/// The input contract is strict: one logical line, every token its own
/// field separated by exactly one ASCII space. Splitting on `' '` is
/// therefore the entire lexing algorithm; consecutive spaces produce
/// empty fields, which fail classification like any other bad lexeme.
///
/// Classification is eager: the whole expression is tokenized during
/// construction, and the first unclassifiable field aborts with
/// [`FoldexError::InvalidToken`]. Empty input fails the same way (it
/// splits into a single empty field).
#[derive(Debug)]
pub struct Tokenizer {
    tokens: Vec<Token>,
    current: usize,
    eof_span: Span,
}

impl Tokenizer {
    /// Tokenizes the full expression up front.
    pub fn new(expression: &str) -> Result<Self, FoldexError> {
        let mut tokens = Vec::new();
        let mut column = 0;

        for (index, lexeme) in expression.split(' ').enumerate() {
            let position = index + 1;
            match classify(lexeme) {
                Some(kind) => {
                    tokens.push(Token::new(kind, lexeme, Span::new(position, column)));
                }
                None => {
                    return Err(FoldexError::InvalidToken {
                        lexeme: lexeme.to_string(),
                        position,
                    });
                }
            }
            column += lexeme.chars().count() + 1;
        }

        let eof_span = Span::new(tokens.len() + 1, expression.chars().count());

        Ok(Self {
            tokens,
            current: 0,
            eof_span,
        })
    }

    /// Returns the next token in sequence.
    ///
    /// Once the real tokens are exhausted this yields a synthetic
    /// `Eof` token on every further call. Running past the end is not
    /// an error by itself; it only becomes one when a grammar
    /// production demands a token the sentinel cannot satisfy.
    pub fn next_token(&mut self) -> Token {
        if self.current < self.tokens.len() {
            let token = self.tokens[self.current].clone();
            self.current += 1;
            token
        } else {
            Token::eof(self.eof_span)
        }
    }

    /// Number of real (non-sentinel) tokens in the expression.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::TokenKind;

    #[test]
    fn tokenizes_in_order_with_positions() {
        let mut tokenizer = Tokenizer::new("1 + x").unwrap();
        let kinds = [TokenKind::Int, TokenKind::Plus, TokenKind::Var];

        for (i, kind) in kinds.iter().enumerate() {
            let token = tokenizer.next_token();
            assert_eq!(token.kind, *kind);
            assert_eq!(token.span.index, i + 1);
            assert_eq!(token.span.column, i * 2);
        }
    }

    #[test]
    fn yields_eof_forever_after_last_token() {
        let mut tokenizer = Tokenizer::new("7").unwrap();
        assert_eq!(tokenizer.next_token().kind, TokenKind::Int);
        assert_eq!(tokenizer.next_token().kind, TokenKind::Eof);
        assert_eq!(tokenizer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn empty_input_fails_classification() {
        let err = Tokenizer::new("").unwrap_err();
        assert_eq!(
            err,
            FoldexError::InvalidToken {
                lexeme: String::new(),
                position: 1,
            }
        );
    }

    #[test]
    fn doubled_spaces_produce_an_empty_invalid_field() {
        let err = Tokenizer::new("1  +").unwrap_err();
        assert_eq!(
            err,
            FoldexError::InvalidToken {
                lexeme: String::new(),
                position: 2,
            }
        );
    }

    #[test]
    fn reports_first_bad_lexeme_with_its_field_number() {
        let err = Tokenizer::new("1 + 23 * zz").unwrap_err();
        assert_eq!(
            err,
            FoldexError::InvalidToken {
                lexeme: "23".to_string(),
                position: 3,
            }
        );
    }
}
