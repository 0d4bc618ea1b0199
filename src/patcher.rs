//! The patch operation: merge variables, insert folders before the anchor, save

use crate::collection::Collection;
use crate::constants::ANCHOR_NAME;
use crate::endpoints::{new_folders, new_variables};
use crate::error::Result;
use crate::models::Folder;
use crate::storage;
use std::fmt;
use std::path::Path;

/// Knobs for a patch run
#[derive(Clone, Debug, PartialEq)]
pub struct PatchOptions {
    /// Item the folders are inserted in front of
    pub anchor: String,
    /// Skip folders whose name already exists among the top-level items.
    /// Off by default: re-running on a patched file inserts the folders again.
    pub skip_existing: bool,
}

impl Default for PatchOptions {
    fn default() -> Self {
        PatchOptions {
            anchor: String::from(ANCHOR_NAME),
            skip_existing: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FolderSummary {
    pub name: String,
    pub endpoints: usize,
}

impl From<&Folder> for FolderSummary {
    fn from(folder: &Folder) -> Self {
        FolderSummary {
            name: folder.name.clone(),
            endpoints: folder.endpoint_count(),
        }
    }
}

/// What a patch run changed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatchReport {
    pub added_variables: Vec<String>,
    pub inserted: Vec<FolderSummary>,
    /// Folders left out because `skip_existing` found them already present
    pub skipped: Vec<String>,
    /// Position of the first inserted folder
    pub anchor_index: usize,
}

impl PatchReport {
    pub fn endpoint_total(&self) -> usize {
        self.inserted.iter().map(|f| f.endpoints).sum()
    }
}

impl fmt::Display for PatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Postman collection updated successfully!")?;
        write!(
            f,
            "Added {} new folders with {} endpoints:",
            self.inserted.len(),
            self.endpoint_total()
        )?;
        for folder in &self.inserted {
            write!(f, "\n   - {} ({} endpoints)", folder.name, folder.endpoints)?;
        }
        if !self.added_variables.is_empty() {
            write!(f, "\nAdded variables: {}", self.added_variables.join(", "))?;
        }
        if !self.skipped.is_empty() {
            write!(f, "\nSkipped existing folders: {}", self.skipped.join(", "))?;
        }
        Ok(())
    }
}

/// Patch the collection at `path` with default options
pub fn patch(path: &Path) -> Result<PatchReport> {
    patch_with(path, &PatchOptions::default())
}

/// Load, apply and save. The file is only written once every step succeeded.
pub fn patch_with(path: &Path, options: &PatchOptions) -> Result<PatchReport> {
    let mut collection = storage::load(path)?;
    tracing::info!(
        path = %path.display(),
        name = collection.name().unwrap_or("<unnamed>"),
        "Patching collection"
    );

    let report = apply(&mut collection, options)?;
    storage::save(path, &collection)?;

    tracing::info!(
        folders = report.inserted.len(),
        endpoints = report.endpoint_total(),
        variables = report.added_variables.len(),
        "Collection written"
    );
    Ok(report)
}

/// In-memory part of the patch
pub fn apply(collection: &mut Collection, options: &PatchOptions) -> Result<PatchReport> {
    let added_variables = collection.merge_variables(&new_variables())?;
    for key in &added_variables {
        tracing::debug!(key = %key, "Added collection variable");
    }

    let anchor_index = collection.anchor_index(&options.anchor)?;

    let mut folders = new_folders();
    let mut skipped = Vec::new();
    if options.skip_existing {
        let mut kept = Vec::with_capacity(folders.len());
        for folder in folders {
            if collection.has_folder(&folder.name)? {
                tracing::warn!(folder = %folder.name, "Folder already present, skipping");
                skipped.push(folder.name);
            } else {
                kept.push(folder);
            }
        }
        folders = kept;
    }

    collection.insert_before(anchor_index, &folders)?;

    Ok(PatchReport {
        added_variables,
        inserted: folders.iter().map(FolderSummary::from).collect(),
        skipped,
        anchor_index,
    })
}
