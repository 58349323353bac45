//! # scaffold
//!
//! Writes the placeholder skeleton of the Wulkan Kibo static site: a fixed
//! list of pages, assets, and deployment files under `wulkan-kibo/`.
//!
//! Content is chosen per file by [`content_for`], which walks an ordered
//! table of path patterns and falls back to a generic placeholder. All dates
//! come from an injected [`Stamp`], so output is deterministic under test.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

mod templates;

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Folder created under the chosen root.
pub const SITE_DIR: &str = "wulkan-kibo";

/// Every file the scaffold writes, relative to [`SITE_DIR`].
pub const FILES: &[&str] = &[
    "index.html",
    "recipes/index.html",
    "recipes/african-jollof.html",
    "recipes/peanut-stew.html",
    "recipes/plantain-fritters.html",
    "about.html",
    "contact.html",
    "assets/css/styles.css",
    "assets/js/main.js",
    "assets/images/hero.jpg",
    "assets/images/jollof-thumb.jpg",
    "assets/images/peanut-thumb.jpg",
    "assets/images/plantain-thumb.jpg",
    "assets/icons/favicon.svg",
    "vercel.json",
    "robots.txt",
    "sitemap.xml",
    "README.md",
    "LICENSE",
    ".gitignore",
];

#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> ScaffoldError + '_ {
    move |source| ScaffoldError::Io { path: path.to_path_buf(), source }
}

/// Generation time as it appears in file content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stamp {
    /// Copyright year.
    pub year: i32,
    /// RFC 3339 timestamp for sitemap `lastmod`.
    pub timestamp: String,
}

impl Stamp {
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Timestamp`] if `at` cannot be rendered as RFC 3339.
    pub fn at(at: OffsetDateTime) -> Result<Self, ScaffoldError> {
        Ok(Self { year: at.year(), timestamp: at.format(&Rfc3339)? })
    }

    /// # Errors
    ///
    /// See [`Stamp::at`].
    pub fn now() -> Result<Self, ScaffoldError> {
        Self::at(OffsetDateTime::now_utc())
    }
}

/// How a relative path selects its generator.
#[derive(Clone, Copy, Debug)]
enum PathPattern {
    Suffix(&'static str),
    Exact(&'static str),
    Prefix(&'static str),
}

impl PathPattern {
    fn matches(self, rel: &str) -> bool {
        match self {
            Self::Suffix(s) => rel.ends_with(s),
            Self::Exact(s) => rel == s,
            Self::Prefix(s) => rel.starts_with(s),
        }
    }
}

type Generator = fn(&str, &Stamp) -> String;

/// First match wins.
const GENERATORS: &[(PathPattern, Generator)] = &[
    (PathPattern::Suffix(".html"), templates::html_page),
    (PathPattern::Suffix("styles.css"), templates::stylesheet),
    (PathPattern::Suffix("main.js"), templates::main_script),
    (PathPattern::Exact("vercel.json"), templates::vercel_config),
    (PathPattern::Exact("robots.txt"), templates::robots),
    (PathPattern::Exact("sitemap.xml"), templates::sitemap),
    (PathPattern::Exact("README.md"), templates::readme),
    (PathPattern::Exact("LICENSE"), templates::license),
    (PathPattern::Exact(".gitignore"), templates::gitignore),
    (PathPattern::Suffix("favicon.svg"), templates::favicon),
    (PathPattern::Prefix("assets/images/"), templates::image_note),
];

/// Placeholder content for `rel`.
#[must_use]
pub fn content_for(rel: &str, stamp: &Stamp) -> String {
    GENERATORS
        .iter()
        .find(|(pattern, _)| pattern.matches(rel))
        .map_or_else(|| templates::fallback(rel, stamp), |(_, generate)| generate(rel, stamp))
}

/// What happened to one file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Overwritten,
    Skipped,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "CREATED",
            Self::Overwritten => "OVERWRITTEN",
            Self::Skipped => "SKIP (exists)",
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Whether the site folder itself was new.
    pub root_created: bool,
    pub files: Vec<(&'static str, Outcome)>,
}

impl Report {
    #[must_use]
    pub fn count(&self, outcome: Outcome) -> usize {
        self.files.iter().filter(|(_, o)| *o == outcome).count()
    }
}

/// Write [`FILES`] under `root/`[`SITE_DIR`], creating parent directories.
/// Existing files are skipped unless `force` is set.
///
/// # Errors
///
/// Returns [`ScaffoldError::Io`] on the first directory or file that cannot
/// be written; files written before it stay on disk.
pub fn generate(root: &Path, force: bool, stamp: &Stamp) -> Result<Report, ScaffoldError> {
    let site = root.join(SITE_DIR);
    let root_created = !site.exists();
    fs::create_dir_all(&site).map_err(io_error(&site))?;

    let mut report = Report { root_created, files: Vec::with_capacity(FILES.len()) };
    for &rel in FILES {
        let path = site.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
        let existed = path.exists();
        if existed && !force {
            report.files.push((rel, Outcome::Skipped));
            continue;
        }
        fs::write(&path, content_for(rel, stamp)).map_err(io_error(&path))?;
        report.files.push((rel, if existed { Outcome::Overwritten } else { Outcome::Created }));
    }
    Ok(report)
}
