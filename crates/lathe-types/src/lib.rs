//! Domain value objects shared between the dispatch layer and the CAD
//! engine boundary.
//!
//! Every type here is a plain owned value constructed fresh for a single
//! request and discarded once the response has been produced. Nothing in
//! this crate owns external resources or carries behaviour beyond small
//! constructors; marshaling to and from the untyped wire shape lives in
//! `lathed::dispatch`.

mod constraint;
mod file;
mod geometry;
mod material;

pub use constraint::{Constraint, DatumSide};
pub use file::{
    AssembleInstructions, AssembleOutcome, FileInfo, InstanceList, OpenInstructions, OpenOutcome,
};
pub use geometry::{Accuracy, Inertia, Massprops, Point3, Transform};
pub use material::MaterialEntry;
