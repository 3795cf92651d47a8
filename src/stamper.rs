//! Core rewrite engine
//!
//! Rewrites cache-busting `?v=` query parameters on local asset references.
//! Matching is purely lexical over the raw file text: references inside HTML
//! comments or disabled markup are rewritten too if they match the pattern.

use regex::{Captures, Regex};
use std::fs;
use std::path::Path;

use crate::error::{Result, VstampError};

/// The fixed set of HTML files processed per run, in order.
pub const TARGET_FILES: [&str; 2] = ["index.html", "mobile.html"];

/// Outcome of processing a single target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// At least one reference was rewritten and the file was written back.
    Updated { css: usize, js: usize },
    /// The file exists but contains no matching references; left untouched.
    NoMatches,
    /// The file does not exist; skipped.
    Missing,
}

/// Rewrites asset references with a single version token.
///
/// The token is injected at construction so a run stamps every reference in
/// every file with the same value, and tests can pin it.
pub struct Stamper {
    css_pattern: Regex,
    js_pattern: Regex,
    token: i64,
}

impl Stamper {
    /// Create a stamper for the given version token.
    #[allow(clippy::expect_used)]
    pub fn new(token: i64) -> Self {
        // <name> excludes '/', so nested paths like css/sub/app.css never match.
        let css_pattern = Regex::new(r#"href="(css/[A-Za-z0-9_-]+\.css)(?:\?v=[^"]*)?""#)
            .expect("hardcoded CSS pattern is valid");
        let js_pattern = Regex::new(r#"src="(js/[A-Za-z0-9_-]+\.js)(?:\?v=[^"]*)?""#)
            .expect("hardcoded JS pattern is valid");
        Self {
            css_pattern,
            js_pattern,
            token,
        }
    }

    /// The version token this stamper applies.
    pub fn token(&self) -> i64 {
        self.token
    }

    /// Rewrite all matching references in `text`.
    ///
    /// Runs the CSS pass first, then the JS pass over the CSS-updated text.
    /// Any prior `?v=` value is discarded and replaced, never appended to.
    /// Returns the new text and the (css, js) replacement counts.
    pub fn rewrite(&self, text: &str) -> (String, usize, usize) {
        let (text, css) = substitute(&self.css_pattern, "href", self.token, text);
        let (text, js) = substitute(&self.js_pattern, "src", self.token, &text);
        (text, css, js)
    }

    /// Process one target file.
    ///
    /// A missing file is a handled condition, not an error. The file is only
    /// written back when at least one reference was rewritten, so zero-match
    /// files keep their modification time.
    pub fn stamp_file(&self, path: &Path) -> Result<FileOutcome> {
        if !path.exists() {
            return Ok(FileOutcome::Missing);
        }

        let bytes = fs::read(path).map_err(|e| VstampError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let text = String::from_utf8(bytes).map_err(|_| VstampError::DecodeFailed {
            path: path.display().to_string(),
        })?;

        let (updated, css, js) = self.rewrite(&text);
        if css + js == 0 {
            return Ok(FileOutcome::NoMatches);
        }

        fs::write(path, updated).map_err(|e| VstampError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(FileOutcome::Updated { css, js })
    }

    /// Process every target file under `root`, in the fixed order.
    ///
    /// Fails fast on the first I/O or decode error; missing files are
    /// reported in the outcome list and do not stop the run.
    pub fn stamp(&self, root: &Path) -> Result<Vec<(&'static str, FileOutcome)>> {
        let mut outcomes = Vec::with_capacity(TARGET_FILES.len());
        for name in TARGET_FILES {
            let outcome = self.stamp_file(&root.join(name))?;
            outcomes.push((name, outcome));
        }
        Ok(outcomes)
    }
}

fn substitute(pattern: &Regex, attr: &str, token: i64, text: &str) -> (String, usize) {
    let mut count = 0;
    let out = pattern.replace_all(text, |caps: &Captures<'_>| {
        count += 1;
        format!("{attr}=\"{}?v={token}\"", &caps[1])
    });
    (out.into_owned(), count)
}
