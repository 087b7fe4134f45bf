//! Manifest generation.
//!
//! Takes the scanned tree and writes it out:
//!
//! ```text
//! tierlists/
//! ├── manifest.json              # Aggregate index: categories + collection summaries
//! ├── heroes/
//! │   └── manifest.json          # Descriptor: id, name, images
//! └── maps/
//!     └── categoryA/
//!         └── manifest.json
//! ```
//!
//! Every run overwrites every file it owns. Descriptors of folders that are
//! no longer collections are left in place; the index no longer points at
//! them.

use crate::config::ScanConfig;
use crate::scan::{self, ScanNode};
use crate::types::IndexNode;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A descriptor file written for one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenDescriptor {
    pub path: PathBuf,
    pub image_count: usize,
}

/// What a generate run wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateSummary {
    pub descriptors: Vec<WrittenDescriptor>,
    pub index_path: PathBuf,
    pub categories: usize,
}

impl GenerateSummary {
    pub fn collections(&self) -> usize {
        self.descriptors.len()
    }

    pub fn images(&self) -> usize {
        self.descriptors.iter().map(|d| d.image_count).sum()
    }
}

/// Pretty JSON with a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, GenerateError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// The index representation of a scanned tree.
pub fn build_index(nodes: &[ScanNode]) -> Vec<IndexNode> {
    nodes.iter().filter_map(ScanNode::to_index_node).collect()
}

/// Write one descriptor per collection, depth-first.
pub fn write_descriptors(
    nodes: &[ScanNode],
    config: &ScanConfig,
) -> Result<Vec<WrittenDescriptor>, GenerateError> {
    let mut written = Vec::new();
    for collection in scan::collections(nodes) {
        let path = collection.dir.join(&config.descriptor_file);
        fs::write(&path, to_json(&collection.descriptor())?)?;
        written.push(WrittenDescriptor {
            path,
            image_count: collection.images.len(),
        });
    }
    Ok(written)
}

/// Write the aggregate index under `root`. Returns its path.
pub fn write_index(
    root: &Path,
    nodes: &[ScanNode],
    config: &ScanConfig,
) -> Result<PathBuf, GenerateError> {
    let path = root.join(&config.index_file);
    fs::write(&path, to_json(&build_index(nodes))?)?;
    Ok(path)
}

pub fn generate(
    root: &Path,
    nodes: &[ScanNode],
    config: &ScanConfig,
) -> Result<GenerateSummary, GenerateError> {
    let descriptors = write_descriptors(nodes, config)?;
    let index_path = write_index(root, nodes, config)?;
    Ok(GenerateSummary {
        descriptors,
        index_path,
        categories: scan::count_categories(nodes),
    })
}
