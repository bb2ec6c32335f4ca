/*
 * ==========================================================================
 * FOLDEX - Parse with Claws!
 * ==========================================================================
 *
 * File:     expr.rs
 * Purpose:  The binary syntax tree produced by the parser, plus its
 *           canonical prefix rendering.
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

use serde::Serialize;
use std::fmt;

/// The four binary operators a tree node can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// The operator's source symbol, used by the prefix rendering.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        }
    }
}

/// A node in the parsed expression tree.
///
/// The tree has exactly two shapes of node: a leaf (integer literal or
/// variable) and a binary operation owning both of its children. Every
/// tree handed out by the parser is fully built; there is no "half
/// constructed" public state. A single leaf is a valid whole tree
/// (single-token input parses to just `Int` or `Var`).
///
/// Leaves start as single digits, but constant folding replaces whole
/// subtrees with their computed value, so `Int` holds a full `i64`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// Integer literal leaf.
    Int(i64),

    /// Single-letter variable leaf.
    Var(char),

    /// Binary operation over two exclusively-owned subtrees.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Total number of nodes in the tree, leaves included.
    ///
    /// Simplification guarantees this never grows; the count is what
    /// the test suite checks that guarantee against.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Int(_) | Expr::Var(_) => 1,
            Expr::Binary { left, right, .. } => {
                1 + left.node_count() + right.node_count()
            }
        }
    }

    /// True for `Int` and `Var` nodes.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Expr::Binary { .. })
    }
}

impl fmt::Display for Expr {
    /// Canonical prefix rendering: leaves print their literal text and
    /// operations print as `(op left right)`.
    ///
    /// ```text
    /// 2 * 5 + 1   →   (+ (* 2 5) 1)
    /// ```
    ///
    /// This format is display-only. It is not re-parseable by the
    /// infix grammar, so it is never treated as a serialization
    /// round-trip (use the JSON output for that).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Int(value) => write!(f, "{}", value),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Binary { op, left, right } => {
                write!(f, "({} {} {})", op.symbol(), left, right)
            }
        }
    }
}
