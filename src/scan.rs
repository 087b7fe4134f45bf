//! Directory scanning.
//!
//! Walks the scan root and turns the folder tree into [`ScanNode`]s. Nothing
//! is written here; the [`generate`](crate::generate) stage consumes the
//! result.
//!
//! ## Directory Structure
//!
//! ```text
//! tierlists/                       # Scan root
//! ├── config.toml                  # Optional scan config
//! ├── manifest.json                # Aggregate index (written)
//! ├── heroes/                      # Collection (has images)
//! │   ├── manifest.json            # Descriptor (written, ignored by the scan)
//! │   ├── thor.jpg                 # heroes-1
//! │   └── zeus.png                 # heroes-2
//! ├── maps/                        # Category (only subfolders)
//! │   ├── categoryA/               # Nested collection, id "maps/categoryA"
//! │   │   └── forest.png
//! │   └── categoryB/               # No images anywhere: dropped
//! └── .drafts/                     # Hidden: never visited
//! ```
//!
//! ## Classification
//!
//! Each folder's direct entries are listed once, hidden entries dropped:
//! - at least one image → **Collection** (subfolders are not traversed)
//! - no images, at least one subfolder → **Category**
//! - neither → **Empty**
//!
//! A Category whose children all turn out Empty is itself Empty, so empty
//! branches vanish from the index entirely.
//!
//! ## Ordering and Ids
//!
//! Siblings are visited in byte-wise file name order. Ids accumulate the
//! relative path (`maps/categoryA`), images are numbered from 1 in that same
//! order and prefixed with their folder's name (`categoryA-1`).

use crate::config::ScanConfig;
use crate::naming::{file_display_name, format_name};
use crate::types::{CollectionSummary, Descriptor, FolderEntry, Image, IndexNode, NodeKind};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Scan root not found: {0}")]
    MissingRoot(PathBuf),
}

/// Result of scanning one folder.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanNode {
    Category(Category),
    Collection(Collection),
    Empty,
}

/// A folder grouping further folders. `children` never contains `Empty`.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub children: Vec<ScanNode>,
}

/// A folder of images: one tierlist.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub id: String,
    pub name: String,
    /// Folder on disk; the descriptor is written here.
    pub dir: PathBuf,
    pub images: Vec<Image>,
}

impl Collection {
    pub fn descriptor(&self) -> Descriptor {
        Descriptor {
            id: self.id.clone(),
            name: self.name.clone(),
            images: self.images.clone(),
        }
    }

    pub fn summary(&self) -> CollectionSummary {
        CollectionSummary {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

impl ScanNode {
    /// Index representation; `None` for `Empty`.
    pub fn to_index_node(&self) -> Option<IndexNode> {
        match self {
            ScanNode::Category(category) => Some(IndexNode::Folder(FolderEntry {
                kind: NodeKind::Folder,
                id: category.id.clone(),
                name: category.name.clone(),
                children: category
                    .children
                    .iter()
                    .filter_map(ScanNode::to_index_node)
                    .collect(),
            })),
            ScanNode::Collection(collection) => {
                Some(IndexNode::Collection(collection.summary()))
            }
            ScanNode::Empty => None,
        }
    }

    fn push_collections<'a>(&'a self, out: &mut Vec<&'a Collection>) {
        match self {
            ScanNode::Category(category) => {
                for child in &category.children {
                    child.push_collections(out);
                }
            }
            ScanNode::Collection(collection) => out.push(collection),
            ScanNode::Empty => {}
        }
    }

    fn category_count(&self) -> usize {
        match self {
            ScanNode::Category(category) => 1 + count_categories(&category.children),
            _ => 0,
        }
    }
}

/// Every collection in the tree, depth-first in index order.
pub fn collections(nodes: &[ScanNode]) -> Vec<&Collection> {
    let mut out = Vec::new();
    for node in nodes {
        node.push_collections(&mut out);
    }
    out
}

/// Number of categories anywhere in the tree.
pub fn count_categories(nodes: &[ScanNode]) -> usize {
    nodes.iter().map(ScanNode::category_count).sum()
}

/// How a folder's direct contents classify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderKind {
    Category,
    Collection,
    Empty,
}

/// Direct, non-hidden contents of one folder, sorted by file name.
#[derive(Debug, Default)]
pub struct Listing {
    /// Image file names (already filtered by extension and descriptor name).
    pub images: Vec<String>,
    pub subdirs: Vec<PathBuf>,
}

pub fn classify(listing: &Listing) -> FolderKind {
    if !listing.images.is_empty() {
        FolderKind::Collection
    } else if !listing.subdirs.is_empty() {
        FolderKind::Category
    } else {
        FolderKind::Empty
    }
}

/// Whether a file name counts as an image for this config.
///
/// Hidden names and the descriptor file never do.
pub fn is_image_name(name: &str, config: &ScanConfig) -> bool {
    if name.starts_with('.') || name == config.descriptor_file {
        return false;
    }
    Path::new(name)
        .extension()
        .map(|ext| config.is_image_extension(&ext.to_string_lossy()))
        .unwrap_or(false)
}

/// Scan the root folder and return its non-empty top-level nodes.
///
/// The root itself is always treated as the top-level category: image files
/// directly inside it are ignored.
pub fn scan(root: &Path, config: &ScanConfig) -> Result<Vec<ScanNode>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }
    let listing = list_directory(root, config)?;
    scan_children(&listing.subdirs, None, config)
}

/// Classify `path` and build its node, recursing into categories.
pub fn scan_directory(
    path: &Path,
    id: String,
    config: &ScanConfig,
) -> Result<ScanNode, ScanError> {
    let listing = list_directory(path, config)?;
    let folder_name = dir_name(path);

    let node = match classify(&listing) {
        FolderKind::Collection => ScanNode::Collection(build_collection(
            path,
            id,
            &folder_name,
            listing.images,
        )),
        FolderKind::Category => {
            let children = scan_children(&listing.subdirs, Some(&id), config)?;
            if children.is_empty() {
                ScanNode::Empty
            } else {
                ScanNode::Category(Category {
                    id,
                    name: format_name(&folder_name),
                    children,
                })
            }
        }
        FolderKind::Empty => ScanNode::Empty,
    };
    Ok(node)
}

fn scan_children(
    subdirs: &[PathBuf],
    parent_id: Option<&str>,
    config: &ScanConfig,
) -> Result<Vec<ScanNode>, ScanError> {
    let mut children = Vec::new();
    for subdir in subdirs {
        let name = dir_name(subdir);
        let id = match parent_id {
            Some(parent) => format!("{parent}/{name}"),
            None => name,
        };
        match scan_directory(subdir, id, config)? {
            ScanNode::Empty => {}
            node => children.push(node),
        }
    }
    Ok(children)
}

/// List a folder's direct entries once.
///
/// Symlinks are followed: a link counts as whatever it points at. A dangling
/// link, or a cycle the OS refuses to resolve, is a walk error.
pub fn list_directory(path: &Path, config: &ScanConfig) -> Result<Listing, ScanError> {
    let mut listing = Listing::default();
    for entry in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') {
            continue;
        }
        let file_type = entry.file_type();
        if file_type.is_dir() {
            listing.subdirs.push(entry.path().to_path_buf());
        } else if file_type.is_file() && is_image_name(&name, config) {
            listing.images.push(name.into_owned());
        }
    }
    Ok(listing)
}

fn build_collection(dir: &Path, id: String, folder_name: &str, files: Vec<String>) -> Collection {
    let images = files
        .into_iter()
        .enumerate()
        .map(|(i, src)| Image {
            id: format!("{folder_name}-{}", i + 1),
            name: file_display_name(&src),
            src,
        })
        .collect();

    Collection {
        id,
        name: format_name(folder_name),
        dir: dir.to_path_buf(),
        images,
    }
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
