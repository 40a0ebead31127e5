//! Schema descriptors and finalized model types.
//!
//! Descriptors are the raw shapes a [`crate::provider::SchemaProvider`] returns;
//! models are the normalized, relationship-aware output of the
//! [`crate::assemble::ModelAssembler`]. The model graph is built once per run and
//! never mutated afterwards; emitters only read it.

mod descriptor;
mod entity;
mod procedure;

pub use descriptor::{
    ColumnDescriptor, ForeignKeyDescriptor, ProcedureDescriptor, TableDescriptor,
    UniqueConstraintDescriptor, UNBOUNDED_LENGTH,
};
pub use entity::{DeleteBehavior, EntityModel, NavigationKind, NavigationProperty, PropertyModel};
pub use procedure::ProcedureModel;
