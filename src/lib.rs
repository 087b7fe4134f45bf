//! # Tierlist Manifest
//!
//! Builds the JSON manifests a static tierlist front end reads to discover
//! its content. Browsers cannot list directories, so the folder tree under
//! `tierlists/` is scanned once at build time and described in files:
//!
//! ```text
//! 1. Config    tierlists/config.toml  →  ScanConfig        (optional)
//! 2. Scan      tierlists/             →  Vec<ScanNode>     (filesystem → tree)
//! 3. Generate  Vec<ScanNode>          →  <collection>/manifest.json + root manifest.json
//! ```
//!
//! Folders holding images are **collections** (one tierlist each); folders
//! holding only folders are **categories**. Display names are derived from
//! folder and file names, ids from paths, so the filesystem is the only
//! source of truth and every run recomputes everything.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `ScanConfig`: image extensions and output file names, loaded from `config.toml` |
//! | [`naming`] | Display-name formatting for folders and files |
//! | [`types`] | Shapes written to disk (`Descriptor`, `IndexNode`) |
//! | [`scan`] | Folder classification and recursive tree building |
//! | [`generate`] | Writes descriptors and the aggregate index |
//! | [`output`] | CLI output formatting |

pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

use std::path::Path;

use crate::generate::GenerateSummary;
use crate::scan::{ScanError, ScanNode};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Generate(#[from] generate::GenerateError),
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Scan only; write nothing.
    pub dry_run: bool,
}

/// How a run ended. None of these is a failure.
#[derive(Debug)]
pub enum RunOutcome {
    /// The root directory does not exist. Nothing written.
    MissingRoot,
    /// The tree holds no collections. Nothing written.
    NothingFound,
    /// Dry run: the tree that would have been written.
    Checked(Vec<ScanNode>),
    Generated {
        nodes: Vec<ScanNode>,
        summary: GenerateSummary,
    },
}

/// Load config, scan `root` and write all manifests.
pub fn run(root: &Path, options: &RunOptions) -> Result<RunOutcome, Error> {
    let config = config::load_config(root)?;

    let nodes = match scan::scan(root, &config) {
        Ok(nodes) => nodes,
        Err(ScanError::MissingRoot(_)) => return Ok(RunOutcome::MissingRoot),
        Err(e) => return Err(e.into()),
    };
    if nodes.is_empty() {
        return Ok(RunOutcome::NothingFound);
    }
    if options.dry_run {
        return Ok(RunOutcome::Checked(nodes));
    }

    let summary = generate::generate(root, &nodes, &config)?;
    Ok(RunOutcome::Generated { nodes, summary })
}
