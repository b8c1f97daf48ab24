//! Material listing value objects.

use serde::{Deserialize, Serialize};

/// One entry in a material listing: the file it was found on and the
/// material name. Either side can be unset when the engine has no value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialEntry {
    /// Filename the material belongs to.
    pub file: Option<String>,
    /// Material name.
    pub material: Option<String>,
}

impl MaterialEntry {
    /// Creates an entry for a named file and material.
    #[must_use]
    pub fn new(file: impl Into<String>, material: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            material: Some(material.into()),
        }
    }
}
