/*
 * ==========================================================================
 * FOLDEX - Parse with Claws!
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root for the Foldex expression parser.
 *
 * Foldex parses a whitespace-tokenized infix arithmetic expression
 * (single digits, single-letter variables, + - * /, parentheses) into
 * a binary syntax tree, and optionally folds constant subexpressions
 * into single integer literals.
 *
 * Pipeline:
 * ```text
 * Expression → Tokenizer → Tokens → Parser → AST → Simplifier → AST
 * ```
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

/// Syntax tree node definitions and prefix rendering.
pub mod ast;

/// Compiler-style caret diagnostics for the CLI.
pub mod diagnostics;

/// The structured error type shared by every pipeline stage.
pub mod error;

/// Token model and the split-on-space tokenizer.
pub mod lexer;

/// The recursive-descent LL(1) parser.
pub mod parser;

/// Constant folding over parsed trees.
pub mod simplify;

/// Token position data.
pub mod span;

pub use ast::{BinaryOp, Expr};
pub use diagnostics::DiagnosticPrinter;
pub use error::FoldexError;
pub use lexer::{Token, TokenKind, Tokenizer};
pub use parser::{parse, Parser};
pub use simplify::simplify;
pub use span::Span;
