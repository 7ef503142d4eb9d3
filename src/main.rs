//! block-template CLI
//!
//! Usage:
//!   block-template [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>  Parser configuration (TOML format)
//!   -p, --path <PATH>    Print only the subtree at this block path
//!   -g, --grammar        Show directive grammar reference
//!   -h, --help           Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use block_template::{ParseConfig, Source};

#[derive(Parser)]
#[command(name = "block-template")]
#[command(about = "Block-structured template parser and resolver")]
struct Cli {
    /// Input template file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Parser configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print only the subtree at this block path (e.g. /outer/inner)
    #[arg(short, long)]
    path: Option<String>,

    /// Show directive grammar reference
    #[arg(short, long)]
    grammar: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.grammar {
        print_grammar();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load parser configuration
    let config = match &cli.config {
        Some(path) => match ParseConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ParseConfig::default(),
    };

    // Read input
    let (text, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let source = match Source::parse_with_config(text.as_str(), &config) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}", e.format(&text, &filename));
            std::process::exit(1);
        }
    };

    match &cli.path {
        Some(path) => match source.get(path) {
            Some(block) => print!("{}", block.outline()),
            None => {
                eprintln!("Error: block '{}' not exists", path);
                std::process::exit(1);
            }
        },
        None => print!("{}", source.outline()),
    }
}

fn print_intro() {
    println!(
        r#"block-template - block-structured template parser and resolver

USAGE:
    block-template [OPTIONS] [FILE]
    echo '<template>' | block-template

OPTIONS:
    -g, --grammar   Show directive grammar reference
    -c, --config    Parser configuration (TOML file)
    -p, --path      Print only the subtree at this block path
    -h, --help      Print help

QUICK START:
    echo '<!-- START BLOCK: row -->cell<!-- END BLOCK: row -->' | block-template

This parses the template and prints its block tree outline.
Run --grammar for the directive syntax reference."#
    );
}

fn print_grammar() {
    println!(
        r#"BLOCK TEMPLATE DIRECTIVES
=========================

Directives are comment markers embedded in otherwise-opaque text:

    <!-- START BLOCK: name -->      open an ordinary block
    <!-- TEMPLATE BLOCK: name -->   open a readonly template block
    <!-- WRAPPER BLOCK: name -->    open a wrapper block
    <!-- END BLOCK: name -->        close the innermost open block
    <!-- USE src BLOCK: alias -->   alias an existing block into scope
    <!-- RECURSION BLOCK: name -->  alias an open ancestor (or self)

RULES
-----
Sibling names must be unique at one nesting level.
USE resolves src against the current block's children, then each
enclosing scope outward; the nearest match wins and the alias shares
identity with the original (no copy).
RECURSION matches the innermost open block of that name, self included,
which lets a block reference itself without unbounded nesting.
Nesting depth is capped (100 by default, see --config max_depth).

NAMES
-----
Names may carry delimiters when quoted or escaped:

    <!-- START BLOCK: "a:b" -->

Comments that match no directive form pass through as literal text."#
    );
}
