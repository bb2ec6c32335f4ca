/*
 * ==========================================================================
 * FOLDEX - Parse with Claws!
 * ==========================================================================
 *
 * File:     parse_tests.rs
 * Purpose:  Integration tests for tokenizing and parsing: grammar
 *           shape, precedence, associativity, and error reporting.
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

use foldex::{parse, FoldexError};

/// Parses without folding and renders the prefix form.
fn render(expression: &str) -> String {
    parse(expression, false)
        .unwrap_or_else(|err| panic!("'{}' failed to parse: {}", expression, err))
        .to_string()
}

// ---------------------------------------------------------------------------
// Well-formed expressions
// ---------------------------------------------------------------------------

#[test]
fn single_digit_is_a_leaf() {
    for d in 1..=9 {
        let expression = d.to_string();
        assert_eq!(render(&expression), expression);
    }
}

#[test]
fn single_variable_is_a_leaf() {
    assert_eq!(render("x"), "x");
    assert_eq!(render("Q"), "Q");
}

#[test]
fn simple_addition() {
    assert_eq!(render("1 + 1"), "(+ 1 1)");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(render("2 * 5 + 1"), "(+ (* 2 5) 1)");
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(render("2 / ( 5 + 1 )"), "(/ 2 (+ 5 1))");
}

#[test]
fn additive_chains_nest_to_the_right() {
    // Deliberate property of the grammar: same-precedence chains nest
    // rightward, not leftward.
    assert_eq!(render("1 + 2 + 3"), "(+ 1 (+ 2 3))");
}

#[test]
fn subtraction_chains_nest_to_the_right() {
    assert_eq!(render("9 - 2 - 3"), "(- 9 (- 2 3))");
}

#[test]
fn mixed_additive_chains_nest_to_the_right() {
    assert_eq!(render("1 - 2 + 3"), "(- 1 (+ 2 3))");
    assert_eq!(render("1 + 2 - 3"), "(+ 1 (- 2 3))");
}

#[test]
fn multiplicative_chains_nest_to_the_right() {
    assert_eq!(render("2 * 3 * 4"), "(* 2 (* 3 4))");
    assert_eq!(render("8 / 4 / 2"), "(/ 8 (/ 4 2))");
}

#[test]
fn parenthesized_subexpressions_combine() {
    assert_eq!(
        render("( 1 + 2 + 3 ) * ( 4 + 5 + 6 ) / 7"),
        "(* (+ 1 (+ 2 3)) (/ (+ 4 (+ 5 6)) 7))"
    );
}

#[test]
fn outer_parentheses_leave_no_trace() {
    assert_eq!(render("( 1 + 2 + 3 )"), "(+ 1 (+ 2 3))");
}

#[test]
fn variables_and_integers_mix() {
    assert_eq!(
        render("3 * x + ( 9 + y ) / 4"),
        "(+ (* 3 x) (/ (+ 9 y) 4))"
    );
}

#[test]
fn deep_nesting_within_the_cap_parses() {
    let depth = 100;
    let expression = format!("{}5{}", "( ".repeat(depth), " )".repeat(depth));
    assert_eq!(render(&expression), "5");
}

// ---------------------------------------------------------------------------
// Tokenizer failures
// ---------------------------------------------------------------------------

#[test]
fn empty_input_is_an_invalid_token() {
    assert_eq!(
        parse("", false),
        Err(FoldexError::InvalidToken {
            lexeme: String::new(),
            position: 1,
        })
    );
}

#[test]
fn zero_is_not_a_literal() {
    assert_eq!(
        parse("0", false),
        Err(FoldexError::InvalidToken {
            lexeme: "0".to_string(),
            position: 1,
        })
    );
}

#[test]
fn multi_digit_literals_are_rejected() {
    assert_eq!(
        parse("1 + 23", false),
        Err(FoldexError::InvalidToken {
            lexeme: "23".to_string(),
            position: 3,
        })
    );
}

#[test]
fn multi_letter_identifiers_are_rejected() {
    assert_eq!(
        parse("xy + 1", false),
        Err(FoldexError::InvalidToken {
            lexeme: "xy".to_string(),
            position: 1,
        })
    );
}

#[test]
fn consecutive_spaces_are_rejected() {
    assert_eq!(
        parse("1  +  2", false),
        Err(FoldexError::InvalidToken {
            lexeme: String::new(),
            position: 2,
        })
    );
}

#[test]
fn unspaced_tokens_are_one_bad_lexeme() {
    assert_eq!(
        parse("1+2", false),
        Err(FoldexError::InvalidToken {
            lexeme: "1+2".to_string(),
            position: 1,
        })
    );
}

// ---------------------------------------------------------------------------
// Parser failures
// ---------------------------------------------------------------------------

#[test]
fn missing_closing_paren_fails_at_end_of_input() {
    let err = parse("( 1 + 2", false).unwrap_err();
    assert_eq!(
        err,
        FoldexError::UnexpectedToken {
            found: "end of input".to_string(),
            expected: "')'",
            position: 5,
        }
    );
}

#[test]
fn dangling_operator_fails_in_factor() {
    let err = parse("1 +", false).unwrap_err();
    assert_eq!(
        err,
        FoldexError::UnexpectedToken {
            found: "end of input".to_string(),
            expected: "INT, VAR, or '('",
            position: 3,
        }
    );
}

#[test]
fn leading_operator_fails_in_factor() {
    let err = parse("* 2", false).unwrap_err();
    assert_eq!(
        err,
        FoldexError::UnexpectedToken {
            found: "*".to_string(),
            expected: "INT, VAR, or '('",
            position: 1,
        }
    );
}

#[test]
fn stray_closing_paren_cannot_start_a_factor() {
    let err = parse(") 1", false).unwrap_err();
    assert_eq!(
        err,
        FoldexError::UnexpectedToken {
            found: ")".to_string(),
            expected: "INT, VAR, or '('",
            position: 1,
        }
    );
}

#[test]
fn empty_parentheses_are_rejected() {
    let err = parse("( )", false).unwrap_err();
    assert_eq!(
        err,
        FoldexError::UnexpectedToken {
            found: ")".to_string(),
            expected: "INT, VAR, or '('",
            position: 2,
        }
    );
}

#[test]
fn trailing_tokens_after_a_complete_expression_are_ignored() {
    // Start -> Expr consumes a maximal expression and stops; a
    // trailing unbalanced ')' is left unconsumed rather than reported.
    assert_eq!(render("1 + 2 )"), "(+ 1 2)");
}

#[test]
fn nesting_past_the_cap_is_a_structured_error() {
    let depth = 600;
    let expression = format!("{}1{}", "( ".repeat(depth), " )".repeat(depth));
    let err = parse(&expression, false).unwrap_err();
    assert!(matches!(err, FoldexError::NestingTooDeep { .. }));
}

// ---------------------------------------------------------------------------
// Error surface
// ---------------------------------------------------------------------------

#[test]
fn errors_expose_stable_codes_and_positions() {
    let token_err = parse("1 + 0", false).unwrap_err();
    assert_eq!(token_err.code(), "E_TOKEN");
    assert_eq!(token_err.position(), Some(3));

    let parse_err = parse("1 *", false).unwrap_err();
    assert_eq!(parse_err.code(), "E_PARSE");
    assert_eq!(parse_err.position(), Some(3));
}
