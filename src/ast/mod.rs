/*
 * ==========================================================================
 * FOLDEX - Parse with Claws!
 * ==========================================================================
 *
 * File:     ast/mod.rs
 * Purpose:  Root module for the Foldex syntax tree.
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

/// Tree node definitions and the canonical prefix rendering.
pub mod expr;

pub use expr::{BinaryOp, Expr};
