/*
 * ==========================================================================
 * FOLDEX - Parse with Claws!
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the Foldex recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic
 *   - The LL(1) grammar productions
 *   - Shared helper utilities
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

/// Core parser orchestration:
/// - Owns the `Parser` struct and its per-parse cursor state
/// - Exposes the main `parse(expression, fold)` entry point
pub mod parser;

/// The five grammar productions:
/// - Expr / SimpleExpr / Term / TermCont / Factor
pub mod grammar;

/// Shared parser helpers:
/// - single-token lookahead management
/// - token matching and required consumption
/// - debug tracing
pub mod helpers;

/// Re-export the public entry points so callers can use
/// `crate::parser::parse(...)`.
pub use parser::{parse, Parser, MAX_NESTING_DEPTH};
