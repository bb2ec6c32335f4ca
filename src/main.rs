/*
 * ==========================================================================
 * FOLDEX - Parse with Claws!
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  Command-line entry point. Reads a one-line expression file,
 *           parses it (optionally folding constants), and prints the
 *           canonical prefix rendering or a JSON tree.
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

use std::fs;
use std::path::Path;
use std::process;

use foldex::{DiagnosticPrinter, Parser};

struct Options {
    reduce: bool,
    debug: bool,
    json: bool,
    filename: String,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(|s| s.as_str()).unwrap_or("foldex");
    let options = parse_args(program, &args[1..]);

    if !Path::new(&options.filename).exists() {
        eprintln!("Error: File '{}' not found", options.filename);
        fail();
    }

    let source = match fs::read_to_string(&options.filename) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: Could not read '{}': {}", options.filename, err);
            fail();
        }
    };

    // The input contract is exactly one line holding at least one
    // character; anything else is a file format error, not a parse
    // error.
    let lines: Vec<&str> = source.lines().collect();
    if lines.len() != 1 {
        eprintln!(
            "Error: Unknown file format. Must contain exactly 1 line, found {}.",
            lines.len()
        );
        fail();
    }

    let expression = lines[0].trim();
    if expression.is_empty() {
        eprintln!("Error: Invalid file format. Must contain at least one character.");
        fail();
    }

    let printer = DiagnosticPrinter::new(expression);

    let mut parser = match Parser::new(expression) {
        Ok(parser) => parser.with_debug(options.debug),
        Err(err) => {
            printer.print(&err);
            fail();
        }
    };

    let result = match parser.parse(options.reduce) {
        Ok(result) => result,
        Err(err) => {
            printer.print(&err);
            fail();
        }
    };

    if options.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Error: Could not serialize tree: {}", err);
                fail();
            }
        }
    } else {
        println!("{}", result);
    }

    println!("Success.");
}

fn parse_args(program: &str, args: &[String]) -> Options {
    let mut reduce = false;
    let mut debug = false;
    let mut json = false;
    let mut filename = None;

    for arg in args {
        match arg.as_str() {
            "-r" | "--reduce" => reduce = true,
            "-d" | "--debug" => debug = true,
            "--json" => json = true,
            "-h" | "--help" => {
                usage(program);
                process::exit(0);
            }
            _ if arg.starts_with('-') => {
                eprintln!("Error: Unknown option '{}'", arg);
                eprintln!();
                usage(program);
                process::exit(1);
            }
            _ => filename = Some(arg.clone()),
        }
    }

    let Some(filename) = filename else {
        eprintln!("Error: No input file provided");
        eprintln!();
        usage(program);
        process::exit(1);
    };

    Options {
        reduce,
        debug,
        json,
        filename,
    }
}

fn usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS] <file>", program);
    eprintln!();
    eprintln!("The file must contain exactly one line: an infix expression with");
    eprintln!("every token separated by a single space, e.g. `2 * ( x + 3 )`.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -r, --reduce   fold constant subexpressions into literals");
    eprintln!("  -d, --debug    trace grammar productions to stderr");
    eprintln!("      --json     print the syntax tree as JSON");
    eprintln!("  -h, --help     show this message");
}

fn fail() -> ! {
    println!("Failure.");
    process::exit(1);
}
