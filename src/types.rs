//! JSON shapes written to disk.
//!
//! These are the only types the front end ever sees. Field order here is the
//! field order in the files, so reruns over an unchanged tree stay
//! byte-identical.

use serde::Serialize;

/// One image inside a collection descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    /// `<folder-name>-<position>`, position 1-based in sorted file order.
    pub id: String,
    /// File name relative to the collection folder, as on disk.
    pub src: String,
    /// Display name formatted from the file stem.
    pub name: String,
}

/// Contents of the per-collection descriptor file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    pub id: String,
    pub name: String,
    pub images: Vec<Image>,
}

/// A collection as referenced from the index: images live in its descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionSummary {
    pub id: String,
    pub name: String,
}

/// Marker serialized as `"type": "folder"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
}

/// A category in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderEntry {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub id: String,
    pub name: String,
    pub children: Vec<IndexNode>,
}

/// An entry of the aggregate index.
///
/// Collections carry no `type` field; the front end tells the two apart by
/// the presence of `children`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IndexNode {
    Folder(FolderEntry),
    Collection(CollectionSummary),
}
