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
use crate::lexer::{Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser {
    /// Returns the current lookahead token, pulling the next one from
    /// the tokenizer if the buffer is empty.
    ///
    /// The token stays buffered until something consumes it; repeated
    /// peeks see the same token. Past the last real token this yields
    /// the `Eof` sentinel.
    pub(crate) fn peek(&mut self) -> &Token {
        if self.lookahead.is_none() {
            self.token_count += 1;
            let token = self.tokenizer.next_token();
            self.lookahead = Some(token);
        }

        // Filled just above.
        self.lookahead.as_ref().expect("lookahead buffer is filled")
    }

    /// Kind of the current lookahead token.
    pub(crate) fn peek_kind(&mut self) -> TokenKind {
        self.peek().kind
    }

    /// Consumes and returns the current lookahead token.
    pub(crate) fn advance(&mut self) -> Token {
        match self.lookahead.take() {
            Some(token) => token,
            None => {
                self.token_count += 1;
                self.tokenizer.next_token()
            }
        }
    }

    /// Asserts that the current token matches `kind` and consumes it.
    ///
    /// On a mismatch the parse aborts with an error naming what was
    /// found, what was required, and the 1-based token index. The
    /// `Eof` sentinel fails here like any other wrong token (this is
    /// how a missing `)` is reported).
    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<Token, FoldexError> {
        if self.peek_kind() == kind {
            let token = self.advance();
            if self.debug {
                eprintln!("Match: {} ({:?})", token, token.kind);
            }
            Ok(token)
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Builds the error for a token the grammar cannot accept here.
    pub(crate) fn unexpected(&mut self, expected: &'static str) -> FoldexError {
        let found = self.peek().to_string();
        let position = self.token_count;
        FoldexError::UnexpectedToken {
            found,
            expected,
            position,
        }
    }

    /// Logs a grammar production expansion when debug mode is on.
    pub(crate) fn trace(&self, production: &str) {
        if self.debug {
            eprintln!("{}", production);
        }
    }
}
