//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// vstamp - cache-busting version stamper
///
/// Rewrite the `?v=` query parameter on local CSS and JS references in a fixed
/// set of HTML files so browsers fetch fresh copies after a deploy.
#[derive(Parser, Debug)]
#[command(
    name = "vstamp",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Stamp local CSS/JS references in static HTML with a fresh cache-busting version",
    long_about = "vstamp rewrites href=\"css/<name>.css\" and src=\"js/<name>.js\" references \
                  in index.html and mobile.html, replacing or appending a ?v=<timestamp> query \
                  parameter. All references stamped in one run share the same timestamp. Files \
                  with no matching references are left untouched; missing files are skipped.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  vstamp\n    \
                  vstamp ./public\n    \
                  vstamp /srv/www/site"
)]
pub struct Cli {
    /// Root directory containing the target HTML files
    #[arg(value_name = "ROOT_DIR", default_value = ".")]
    pub root_dir: PathBuf,
}
