/*
 * ==========================================================================
 * FOLDEX - Parse with Claws!
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for the Foldex lexing stage.
 *
 * This module wires together the lexer sub-modules:
 *   - Token kinds and lexeme classification
 *   - The split-on-space tokenizer
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

/// Token kinds, the `Token` struct, and the regex classification table.
pub mod token;

/// The eager split-on-space tokenizer with its `Eof` sentinel.
pub mod tokenizer;

pub use token::{classify, Token, TokenKind};
pub use tokenizer::Tokenizer;
