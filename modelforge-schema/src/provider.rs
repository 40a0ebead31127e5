//! The schema-provider capability trait.
//!
//! Database backends implement [`SchemaProvider`]; everything downstream depends
//! on the trait only, with the configuration passed in at construction time.
//! All sequences come back in the provider's stable order, and that order flows
//! through the model graph and the emitted artifacts unmodified.

use crate::error::SchemaResult;
use crate::model::{ColumnDescriptor, ForeignKeyDescriptor, UniqueConstraintDescriptor};

/// Read access to a database's schema catalog.
#[allow(async_fn_in_trait)]
pub trait SchemaProvider {
    /// List base table names.
    async fn tables(&self) -> SchemaResult<Vec<String>>;

    /// List one table's columns in declaration order.
    async fn columns(&self, table: &str) -> SchemaResult<Vec<ColumnDescriptor>>;

    /// List every foreign-key column pair in the database.
    async fn foreign_keys(&self) -> SchemaResult<Vec<ForeignKeyDescriptor>>;

    /// List one table's non-primary-key unique index columns.
    async fn unique_constraints(
        &self,
        table: &str,
    ) -> SchemaResult<Vec<UniqueConstraintDescriptor>>;

    /// List stored procedure names.
    async fn procedures(&self) -> SchemaResult<Vec<String>>;

    /// Describe one procedure's first result set; may be empty.
    async fn procedure_result_columns(
        &self,
        procedure: &str,
    ) -> SchemaResult<Vec<ColumnDescriptor>>;

    /// List one procedure's parameters; names carry a leading `@` marker.
    async fn procedure_parameters(&self, procedure: &str) -> SchemaResult<Vec<ColumnDescriptor>>;
}
