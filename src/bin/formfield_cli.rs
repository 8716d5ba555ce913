//! CLI tool for formfield - exercises the masking engine natively
//!
//! Usage:
//!   formfield_cli format <text> [config.json]    # committed display string
//!   formfield_cli typing <text> [config.json]    # live-typing display string
//!   formfield_cli extract <display> [config.json] # numeric value (or null)
//!
//! The optional config file holds a FormatConfig JSON object
//! (camelCase fields); defaults are `$`-prefix, 2 decimals, `,` grouping.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;

use formfield::mask::{extract_numeric_value, format_currency, MaskMode};
use formfield::FormatConfig;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: formfield_cli <format|typing|extract> <text> [config.json]");
        std::process::exit(1);
    }

    let command = &args[1];
    let text = &args[2];

    let config = match args.get(3) {
        Some(path) => {
            let data = match fs::read_to_string(path) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("Error reading {}: {}", path, e);
                    std::process::exit(1);
                }
            };
            match serde_json::from_str::<FormatConfig>(&data) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error parsing config: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => FormatConfig::default(),
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    }

    match command.as_str() {
        "format" => println!("{}", format_currency(text, &config, MaskMode::Committed)),
        "typing" => println!("{}", format_currency(text, &config, MaskMode::Typing)),
        "extract" => match extract_numeric_value(text, &config) {
            Some(n) => println!("{}", n),
            None => println!("null"),
        },
        other => {
            eprintln!("Unknown command: {}", other);
            std::process::exit(1);
        }
    }
}
