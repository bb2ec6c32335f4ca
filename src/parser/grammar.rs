/*
 * ==========================================================================
 * FOLDEX - Parse with Claws!
 * ==========================================================================
 *
 * File:     grammar.rs
 * Purpose:  Implements the Foldex expression grammar using recursive
 *           descent with a single token of lookahead.
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Github:   https://github.com/samwilcox/foldex
 *
 * --------------------------------------------------------------------------
 *  LICENSE
 * --------------------------------------------------------------------------
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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * This module contains the entire LL(1) grammar, with left recursion
 * already eliminated:
 *
 *   Start      -> Expr
 *   Expr       -> Term SimpleExpr
 *   SimpleExpr -> '+' Term SimpleExpr | '-' Term SimpleExpr | EMPTY
 *   Term       -> Factor TermCont
 *   TermCont   -> '*' Term | '/' Term | EMPTY
 *   Factor     -> INT | VAR | '(' Expr ')'
 *
 * Two observable properties fall out of this shape and are pinned by
 * the test suite:
 *
 *  - `*` and `/` bind tighter than `+` and `-`, because `Term` is the
 *    unit `SimpleExpr` combines.
 *  - Same-precedence chains nest to the RIGHT: `1 + 2 + 3` parses as
 *    `(+ 1 (+ 2 3))`, because the continuation productions recurse
 *    before their caller supplies the left operand. This is the
 *    intended shape, not left-association.
 *
 * ==========================================================================
 */

use crate::ast::{BinaryOp, Expr};
use crate::error::FoldexError;
use crate::lexer::TokenKind;
use crate::parser::parser::{Parser, MAX_NESTING_DEPTH};

/// A binary node still waiting for its left operand.
///
/// The continuation productions (`TermCont`, `SimpleExpr`) know their
/// operator and right subtree before the caller knows the left one, so
/// they hand back this partially-specified node and the caller
/// completes it. Keeping the hole in a separate type (instead of an
/// optional child inside [`Expr`]) means every tree that leaves the
/// parser is fully built by construction.
pub(crate) struct Pending {
    op: BinaryOp,
    right: Expr,
}

impl Pending {
    fn complete(self, left: Expr) -> Expr {
        Expr::Binary {
            op: self.op,
            left: Box::new(left),
            right: Box::new(self.right),
        }
    }
}

impl Parser {
    /// `Expr -> Term SimpleExpr`
    ///
    /// Parses one term, then lets `SimpleExpr` extend it with an
    /// additive chain. A bare term (single leaf included) propagates
    /// unchanged all the way to the root. Tokens after a complete
    /// expression are left unconsumed.
    pub(crate) fn expr(&mut self) -> Result<Expr, FoldexError> {
        self.trace("Expr -> Term SimpleExpr");

        let term = self.term()?;

        match self.simple_expr()? {
            Some(pending) => Ok(pending.complete(term)),
            None => Ok(term),
        }
    }

    /// `SimpleExpr -> '+' Term SimpleExpr | '-' Term SimpleExpr | EMPTY`
    ///
    /// On an additive operator this parses the following term, recurses
    /// for the rest of the chain, and threads the term into the inner
    /// result's empty left slot. The node it returns still has its own
    /// left slot open for the caller, which is exactly what makes the
    /// chain nest rightward.
    fn simple_expr(&mut self) -> Result<Option<Pending>, FoldexError> {
        let op = match self.peek_kind() {
            TokenKind::Plus => {
                self.trace("SimpleExpr -> PLUS Term SimpleExpr");
                BinaryOp::Add
            }
            TokenKind::Minus => {
                self.trace("SimpleExpr -> MINUS Term SimpleExpr");
                BinaryOp::Subtract
            }
            // Includes Eof: running out of input is a valid EMPTY here.
            _ => {
                self.trace("SimpleExpr -> EMPTY");
                return Ok(None);
            }
        };

        self.advance();
        let term = self.term()?;

        let right = match self.simple_expr()? {
            Some(pending) => pending.complete(term),
            None => term,
        };

        Ok(Some(Pending { op, right }))
    }

    /// `Term -> Factor TermCont`
    ///
    /// Parses a factor and, when `TermCont` produced a multiplicative
    /// continuation, fills its left slot with that factor.
    fn term(&mut self) -> Result<Expr, FoldexError> {
        self.trace("Term -> Factor TermCont");

        let factor = self.factor()?;

        match self.term_cont()? {
            Some(pending) => Ok(pending.complete(factor)),
            None => Ok(factor),
        }
    }

    /// `TermCont -> '*' Term | '/' Term | EMPTY`
    ///
    /// Recurses into `Term` (not `Factor`) for the right operand, so
    /// multiplicative chains nest rightward just like additive ones.
    fn term_cont(&mut self) -> Result<Option<Pending>, FoldexError> {
        let op = match self.peek_kind() {
            TokenKind::Times => {
                self.trace("TermCont -> TIMES Term");
                BinaryOp::Multiply
            }
            TokenKind::Div => {
                self.trace("TermCont -> DIV Term");
                BinaryOp::Divide
            }
            _ => {
                self.trace("TermCont -> EMPTY");
                return Ok(None);
            }
        };

        self.advance();
        let right = self.term()?;

        Ok(Some(Pending { op, right }))
    }

    /// `Factor -> INT | VAR | '(' Expr ')'`
    ///
    /// The only production that can reject a token outright: anything
    /// other than a leaf or an opening parenthesis (the `Eof` sentinel
    /// included) fails here naming the expected set.
    fn factor(&mut self) -> Result<Expr, FoldexError> {
        match self.peek_kind() {
            TokenKind::Int => {
                self.trace("Factor -> INT");
                let token = self.expect(TokenKind::Int, "INT")?;
                Ok(Expr::Int(token.int_value()))
            }
            TokenKind::Var => {
                self.trace("Factor -> VAR");
                let token = self.expect(TokenKind::Var, "VAR")?;
                Ok(Expr::Var(token.var_name()))
            }
            TokenKind::LParen => {
                self.trace("Factor -> LPAREN Expr RPAREN");
                self.expect(TokenKind::LParen, "'('")?;

                self.depth += 1;
                if self.depth > MAX_NESTING_DEPTH {
                    return Err(FoldexError::NestingTooDeep {
                        position: self.token_count,
                    });
                }

                let inner = self.expr()?;
                self.expect(TokenKind::RParen, "')'")?;
                self.depth -= 1;

                Ok(inner)
            }
            _ => Err(self.unexpected("INT, VAR, or '('")),
        }
    }
}
