//! Shared test utilities.
//!
//! Tree builders for temp directories plus lookup helpers over scan results.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_tree(tmp.path(), &["heroes/zeus.png", "maps/categoryA/forest.png", "empty/"]);
//! let nodes = scan(tmp.path(), &ScanConfig::default()).unwrap();
//!
//! let heroes = find_collection(&nodes, "heroes");
//! assert_eq!(image_srcs(heroes), vec!["zeus.png"]);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::scan::{Category, Collection, ScanNode};

// =========================================================================
// Fixture setup
// =========================================================================

/// Create files (and folders for entries ending in `/`) under `root`.
///
/// Files get placeholder bytes: the scanner only looks at names.
pub fn write_tree(root: &Path, paths: &[&str]) {
    for rel in paths {
        let path = root.join(rel);
        if rel.ends_with('/') {
            fs::create_dir_all(&path).unwrap();
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, "fake image").unwrap();
        }
    }
}

/// Copy `fixtures/tierlists/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/tierlists");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Parse a written JSON file.
pub fn read_json(path: &Path) -> serde_json::Value {
    let text = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&text).unwrap()
}

// =========================================================================
// Tree lookups — panic with a clear message on miss
// =========================================================================

fn find_node<'a>(nodes: &'a [ScanNode], id: &str) -> Option<&'a ScanNode> {
    nodes.iter().find_map(|node| match node {
        ScanNode::Category(c) if c.id == id => Some(node),
        ScanNode::Collection(c) if c.id == id => Some(node),
        ScanNode::Category(c) => find_node(&c.children, id),
        _ => None,
    })
}

/// Find a collection anywhere in the tree by id. Panics if not found.
pub fn find_collection<'a>(nodes: &'a [ScanNode], id: &str) -> &'a Collection {
    match find_node(nodes, id) {
        Some(ScanNode::Collection(c)) => c,
        other => panic!(
            "collection '{id}' not found (got {other:?}). Top level: {:?}",
            top_level_ids(nodes)
        ),
    }
}

/// Find a category anywhere in the tree by id. Panics if not found.
pub fn find_category<'a>(nodes: &'a [ScanNode], id: &str) -> &'a Category {
    match find_node(nodes, id) {
        Some(ScanNode::Category(c)) => c,
        other => panic!(
            "category '{id}' not found (got {other:?}). Top level: {:?}",
            top_level_ids(nodes)
        ),
    }
}

// =========================================================================
// Bulk extractors
// =========================================================================

fn node_id(node: &ScanNode) -> &str {
    match node {
        ScanNode::Category(c) => &c.id,
        ScanNode::Collection(c) => &c.id,
        ScanNode::Empty => "<empty>",
    }
}

pub fn top_level_ids(nodes: &[ScanNode]) -> Vec<&str> {
    nodes.iter().map(node_id).collect()
}

pub fn child_ids(category: &Category) -> Vec<&str> {
    category.children.iter().map(node_id).collect()
}

pub fn image_ids(collection: &Collection) -> Vec<&str> {
    collection.images.iter().map(|i| i.id.as_str()).collect()
}

pub fn image_srcs(collection: &Collection) -> Vec<&str> {
    collection.images.iter().map(|i| i.src.as_str()).collect()
}

pub fn image_names(collection: &Collection) -> Vec<&str> {
    collection.images.iter().map(|i| i.name.as_str()).collect()
}
