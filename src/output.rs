//! CLI output formatting.
//!
//! Each stage has a `format_*` function returning lines (pure, testable)
//! and a `print_*` wrapper that writes them to stdout.
//!
//! ## Scan
//!
//! ```text
//! 001 Heroes (2 images)
//!     Source: heroes/
//!     001 Thor
//!     002 Zeus
//! 002 Maps
//!     001 Category A (1 image)
//!         Source: maps/categoryA/
//!         001 Forest
//! ```
//!
//! ## Generate
//!
//! ```text
//! Wrote heroes/manifest.json
//! Wrote maps/categoryA/manifest.json
//!
//! Generated tierlists/manifest.json
//! Total: 2 tierlist(s) in 1 category, 3 images
//! ```

use crate::generate::GenerateSummary;
use crate::scan::ScanNode;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Positional index + name, with an image count for collections.
fn entity_header(index: usize, name: &str, images: Option<usize>) -> String {
    match images {
        Some(n) => format!(
            "{} {} ({})",
            format_index(index),
            name,
            plural(n, "image", "images")
        ),
        None => format!("{} {}", format_index(index), name),
    }
}

/// Path shown relative to `root` when possible.
fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

// ============================================================================
// Scan output
// ============================================================================

/// Format the scanned tree: categories, collections and their images.
pub fn format_scan_output(nodes: &[ScanNode]) -> Vec<String> {
    let mut lines = Vec::new();
    format_nodes(nodes, 0, &mut lines);
    lines
}

fn format_nodes(nodes: &[ScanNode], depth: usize, lines: &mut Vec<String>) {
    let base = indent(depth);
    let mut position = 0;
    for node in nodes {
        match node {
            ScanNode::Category(category) => {
                position += 1;
                lines.push(format!(
                    "{base}{}",
                    entity_header(position, &category.name, None)
                ));
                format_nodes(&category.children, depth + 1, lines);
            }
            ScanNode::Collection(collection) => {
                position += 1;
                lines.push(format!(
                    "{base}{}",
                    entity_header(position, &collection.name, Some(collection.images.len()))
                ));
                lines.push(format!("{base}    Source: {}/", collection.id));
                for (i, image) in collection.images.iter().enumerate() {
                    lines.push(format!("{base}    {} {}", format_index(i + 1), image.name));
                }
            }
            ScanNode::Empty => {}
        }
    }
}

pub fn print_scan_output(nodes: &[ScanNode]) {
    print_lines(&format_scan_output(nodes));
}

// ============================================================================
// Generate output
// ============================================================================

/// Format the files written and the closing summary.
pub fn format_generate_output(summary: &GenerateSummary, root: &Path) -> Vec<String> {
    let mut lines: Vec<String> = summary
        .descriptors
        .iter()
        .map(|d| format!("Wrote {}", display_relative(&d.path, root)))
        .collect();

    lines.push(String::new());
    lines.push(format!("Generated {}", summary.index_path.display()));
    lines.push(format_totals(
        summary.collections(),
        summary.categories,
        summary.images(),
    ));
    lines
}

fn format_totals(collections: usize, categories: usize, images: usize) -> String {
    format!(
        "Total: {} tierlist(s) in {}, {}",
        collections,
        plural(categories, "category", "categories"),
        plural(images, "image", "images")
    )
}

pub fn print_generate_output(summary: &GenerateSummary, root: &Path) {
    print_lines(&format_generate_output(summary, root));
}

// ============================================================================
// Nothing to do
// ============================================================================

pub fn format_missing_root(root: &Path) -> Vec<String> {
    vec![
        format!("Error: '{}' directory not found!", root.display()),
        "Make sure to run this from the project root, or pass --root.".to_string(),
    ]
}

pub fn format_nothing_found(root: &Path) -> Vec<String> {
    vec![
        "No tierlists found!".to_string(),
        format!("Add subdirectories with images to '{}/'", root.display()),
    ]
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
