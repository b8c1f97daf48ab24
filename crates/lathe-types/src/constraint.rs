//! Assembly constraint value objects.

use serde::{Deserialize, Serialize};

/// Which face of a referenced datum a constraint applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatumSide {
    /// No datum side qualifier.
    #[default]
    None,
    /// The red face of the datum.
    Red,
    /// The yellow face of the datum.
    Yellow,
}

/// A single assembly constraint between an assembly reference and a
/// component reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// Constraint type token, forwarded verbatim to the engine.
    pub kind: String,
    /// Datum reference on the assembly side.
    pub asm_ref: Option<String>,
    /// Datum reference on the component side.
    pub comp_ref: Option<String>,
    /// Side qualifier for the assembly datum.
    pub asm_datum: DatumSide,
    /// Side qualifier for the component datum.
    pub comp_datum: DatumSide,
    /// Numeric offset between the references.
    pub offset: Option<f64>,
}
