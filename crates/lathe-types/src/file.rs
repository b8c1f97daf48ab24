//! Instruction and outcome records for file-level engine capabilities.

use serde::{Deserialize, Serialize};

use crate::constraint::Constraint;
use crate::geometry::Transform;

/// Typed arguments for the `open` capability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenInstructions {
    /// Directory to open from; the engine resolves its working directory
    /// when absent.
    pub dirname: Option<String>,
    /// Single filename to open.
    pub file: Option<String>,
    /// Batch of filenames to open instead of a single file.
    pub files: Option<Vec<String>>,
    /// Generic model name when opening a family-table instance.
    pub generic: Option<String>,
    /// Display the model after opening.
    pub display: bool,
    /// Activate the model window after opening.
    pub activate: bool,
    /// Open in a new window.
    pub new_window: bool,
    /// Force a regeneration after opening.
    pub force_regen: bool,
}

/// Typed arguments for the `assemble` capability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssembleInstructions {
    pub dirname: Option<String>,
    /// Component filename to assemble. Always present; the handler rejects
    /// requests without one before the engine is called.
    pub file: String,
    /// Generic model name when assembling a family-table instance.
    pub generic: Option<String>,
    /// Target assembly; the engine uses the active assembly when absent.
    pub into_asm: Option<String>,
    /// Component id path selecting the subassembly to assemble into.
    pub component_path: Option<Vec<i32>>,
    /// Initial placement transform.
    pub transform: Option<Transform>,
    /// Placement constraints.
    pub constraints: Option<Vec<Constraint>>,
    /// Package the component instead of fully constraining it.
    pub package_assembly: bool,
    /// Reference model for constraint resolution.
    pub ref_model: Option<String>,
    /// Walk child components of the reference model looking for placements.
    pub walk_children: bool,
    /// Assemble into the root assembly rather than the resolved target.
    pub assemble_to_root: bool,
    /// Suppress the new component after assembly.
    pub suppress: bool,
}

/// Result of opening one or more files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenOutcome {
    /// Directory the files were opened from.
    pub dirname: Option<String>,
    /// Filenames that were opened.
    pub files: Option<Vec<String>>,
    /// File revision number; non-positive means unknown.
    pub revision: i32,
}

impl OpenOutcome {
    /// Whether the outcome names at least one file.
    #[must_use]
    pub fn has_file(&self) -> bool {
        self.files.as_ref().is_some_and(|files| !files.is_empty())
    }
}

/// Metadata for a single file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    pub dirname: Option<String>,
    pub file: Option<String>,
    /// File revision number; non-positive means unknown.
    pub revision: i32,
}

/// Family-table instance listing for a generic model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceList {
    pub dirname: Option<String>,
    /// The generic model the instances belong to.
    pub generic: Option<String>,
    /// Instance filenames; `None` when the engine reported no list at all.
    pub instances: Option<Vec<String>>,
}

/// Result of assembling a component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssembleOutcome {
    pub dirname: Option<String>,
    pub files: Option<Vec<String>>,
    /// File revision number; non-positive means unknown.
    pub revision: i32,
    /// Feature id of the new component; non-positive means unknown.
    pub feature_id: i32,
}
