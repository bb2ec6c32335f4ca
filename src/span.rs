/*
 * ==========================================================================
 * FOLDEX - Parse with Claws!
 * ==========================================================================
 *
 * File:     span.rs
 * Purpose:  Defines where a token sits inside the source expression.
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

/// Position of a token within a one-line expression.
///
/// Foldex input is always a single logical line, so instead of a
/// line/column pair a span records:
/// - which space-delimited field the token came from (for error
///   messages, which count tokens from 1)
/// - the character offset of the field's first character (for caret
///   diagnostics)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// 1-based token number within the expression.
    pub index: usize,

    /// 0-based character offset of the lexeme's first character.
    pub column: usize,
}

impl Span {
    pub fn new(index: usize, column: usize) -> Self {
        Self { index, column }
    }
}
