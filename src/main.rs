//! vstamp - cache-busting version stamper
//!
//! Rewrites `?v=<timestamp>` query parameters on local CSS and JS references
//! in a fixed set of HTML files so browsers fetch fresh copies after a deploy.

use chrono::Utc;
use clap::Parser;

mod cli;
mod error;
mod report;
mod stamper;

use cli::Cli;
use error::Result;
use stamper::Stamper;

fn run(cli: &Cli) -> Result<()> {
    // One token per run: every reference in every file gets the same value.
    let stamper = Stamper::new(Utc::now().timestamp());

    for (name, outcome) in stamper.stamp(&cli.root_dir)? {
        report::print_outcome(name, &outcome, stamper.token());
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
