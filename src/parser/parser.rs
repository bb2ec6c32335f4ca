/*
 * ==========================================================================
 * FOLDEX - Parse with Claws!
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public
 * `parse()` driver function used to transform a one-line infix
 * expression into a binary syntax tree.
 *
 * The parsing implementation itself is split across multiple modules:
 * - `grammar.rs` → The five LL(1) grammar productions
 * - `helpers.rs` → Lookahead, matching, and consumption utilities
 *
 * This file serves as the root coordinator of the parsing process.
 *
 * --------------------------------------------------------------------------
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

use crate::ast::Expr;
use crate::error::FoldexError;
use crate::lexer::{Token, Tokenizer};
use crate::simplify::simplify;

/// Parenthesis nesting cap. Recursion depth follows nesting depth, so
/// an explicit limit turns a would-be stack overflow into a reportable
/// [`FoldexError::NestingTooDeep`].
pub const MAX_NESTING_DEPTH: usize = 512;

/// The Foldex recursive-descent parser.
///
/// Holds the per-parse cursor state: the tokenizer it pulls from, a
/// one-token lookahead buffer, and how many tokens have been pulled so
/// far (for 1-based error positions). A `Parser` is single-use and not
/// shareable across threads without external synchronization; parse
/// each independent expression with a fresh instance.
///
/// The grammar logic lives in additional `impl Parser` blocks in the
/// `grammar` and `helpers` modules.
pub struct Parser {
    /// Token source, already fully classified.
    pub(crate) tokenizer: Tokenizer,

    /// One-token lookahead, held until a production consumes it.
    pub(crate) lookahead: Option<Token>,

    /// Count of tokens pulled from the tokenizer, 1-based once the
    /// first token is in the lookahead buffer.
    pub(crate) token_count: usize,

    /// Current parenthesis nesting depth.
    pub(crate) depth: usize,

    /// When set, each grammar production logs its expansion to stderr.
    pub(crate) debug: bool,
}

/// Public entry point for the Foldex pipeline.
///
/// Tokenizes `expression`, parses it, and when `fold` is set runs the
/// simplifier over the result. Each call is a pure function of its
/// arguments; no state survives between calls.
///
/// # Example
/// ```
/// let tree = foldex::parse("2 * 5 + 1", false).unwrap();
/// assert_eq!(tree.to_string(), "(+ (* 2 5) 1)");
/// ```
pub fn parse(expression: &str, fold: bool) -> Result<Expr, FoldexError> {
    let mut parser = Parser::new(expression)?;
    parser.parse(fold)
}

impl Parser {
    /// Creates a parser for one expression.
    ///
    /// Tokenization happens eagerly here, so a malformed lexeme fails
    /// construction before any grammar production runs.
    pub fn new(expression: &str) -> Result<Self, FoldexError> {
        Ok(Self {
            tokenizer: Tokenizer::new(expression)?,
            lookahead: None,
            token_count: 0,
            depth: 0,
            debug: false,
        })
    }

    /// Enables or disables grammar production tracing (builder-style).
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Drives the full parse starting from the `Start -> Expr`
    /// production, optionally folding the result.
    pub fn parse(&mut self, fold: bool) -> Result<Expr, FoldexError> {
        let result = self.expr()?;
        if fold {
            simplify(result)
        } else {
            Ok(result)
        }
    }
}
