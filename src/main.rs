//! Theater Billing CLI
//!
//! Computes a subscriber's billing statement from a play catalog document
//! and an invoice document, printing it as text or HTML.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- pecas.json fatura.json > statement.txt
//! cargo run -- pecas.json fatura.json --html > statement.html
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` to trace per-performance charges

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process;
use theater_billing::{statement, BillingEngine, BillingError, Catalog, Invoice, Result};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        return Err(BillingError::MissingArgument);
    }
    let html = args.iter().skip(3).any(|arg| arg == "--html");

    let catalog = Catalog::from_json(BufReader::new(File::open(&args[1])?))?;
    let invoice = Invoice::from_json(BufReader::new(File::open(&args[2])?))?;

    let engine = BillingEngine::new(&catalog);
    let computed = engine.statement(&invoice)?;

    if html {
        println!("{}", statement::render_html(&computed));
    } else {
        print!("{}", statement::render_text(&computed));
    }

    Ok(())
}
