//! # modelforge-schema
//!
//! Schema descriptors and model assembly for modelforge.
//!
//! This crate provides:
//! - Raw schema descriptors as returned by a database provider
//! - Identifier normalization (PascalCase, abbreviations) and English inflection
//! - A total native-type to C# type mapping
//! - Foreign-key relationship resolution into navigation properties
//! - The `ModelAssembler` that turns raw descriptors into a finalized model graph
//! - The `SchemaProvider` capability trait implemented by database backends
//!
//! ## Example
//!
//! ```rust
//! use modelforge_schema::assemble::{AssemblerOptions, ModelAssembler};
//! use modelforge_schema::model::{ColumnDescriptor, TableDescriptor};
//!
//! let table = TableDescriptor {
//!     name: "OrderItems".to_string(),
//!     columns: vec![ColumnDescriptor {
//!         name: "Id".to_string(),
//!         native_type: "int".to_string(),
//!         length: -2,
//!         nullable: false,
//!     }],
//! };
//!
//! let assembler = ModelAssembler::new(AssemblerOptions::default());
//! let entity = assembler.entity(&table);
//! assert_eq!(entity.type_name, "OrderItem");
//! ```

pub mod assemble;
pub mod error;
pub mod inflect;
pub mod model;
pub mod naming;
pub mod provider;
pub mod resolve;
pub mod typemap;

pub use assemble::{AssemblerOptions, ModelAssembler, SchemaModel};
pub use error::{SchemaError, SchemaResult};
pub use model::{
    ColumnDescriptor, DeleteBehavior, EntityModel, ForeignKeyDescriptor, NavigationKind,
    NavigationProperty, ProcedureDescriptor, ProcedureModel, PropertyModel, TableDescriptor,
    UniqueConstraintDescriptor,
};
pub use naming::CaseMode;
pub use provider::SchemaProvider;
pub use resolve::ResolvedRelationship;
pub use typemap::{CsType, TypeDescriptor};
