//! CLI tool for gridedit - evaluates a bounds request and outputs JSON
//!
//! Usage:
//!   gridedit_cli <request.json>              # Output JSON to stdout
//!   gridedit_cli <request.json> -o out.json  # Output JSON to file
//!
//! Set `RUST_LOG=gridedit=trace` to log each computation.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use gridedit::BoundsRequest;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: gridedit_cli <request.json> [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };

    // Read input file
    let data = match fs::read_to_string(input_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    // Parse request
    let request = match BoundsRequest::from_json(&data) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error parsing request: {}", e);
            std::process::exit(1);
        }
    };

    let response = request.evaluate();
    tracing::info!(position = %request.position, bounds = ?response.bounds, "evaluated request");

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&response) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
