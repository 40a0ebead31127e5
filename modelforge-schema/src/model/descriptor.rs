//! Raw schema descriptors, one-to-one with provider result rows.

use serde::{Deserialize, Serialize};

/// Declared length value meaning "unbounded/unknown" (e.g. `nvarchar(max)`).
pub const UNBOUNDED_LENGTH: i32 = -1;

/// One column of a table or procedure result set, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Raw column name, unnormalized.
    pub name: String,
    /// Native type keyword (`int`, `nvarchar`, ...), without length suffix.
    pub native_type: String,
    /// Declared character length; [`UNBOUNDED_LENGTH`] means unbounded/unknown.
    pub length: i32,
    /// Whether the column accepts NULL.
    pub nullable: bool,
}

/// One table with its columns in provider-returned order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    /// Raw table name.
    pub name: String,
    /// Columns in declaration order.
    pub columns: Vec<ColumnDescriptor>,
}

/// One foreign-key column pair.
///
/// Order is provider-returned order and carries no implied uniqueness; two
/// foreign keys may share the same (fk_table, pk_table) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyDescriptor {
    /// Table holding the foreign-key column (the "many" side).
    pub fk_table: String,
    /// The foreign-key column.
    pub fk_column: String,
    /// Referenced table (the "one" side).
    pub pk_table: String,
    /// Referenced column.
    pub pk_column: String,
    /// Nullability of the foreign-key column.
    pub nullable: bool,
}

/// A non-primary-key unique index column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueConstraintDescriptor {
    /// Owning table.
    pub table: String,
    /// Constrained column.
    pub column: String,
}

/// One stored procedure with its result columns and parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureDescriptor {
    /// Raw procedure name.
    pub name: String,
    /// First result set columns; may be empty.
    pub result_columns: Vec<ColumnDescriptor>,
    /// Parameters; may be empty. Names carry a leading `@` marker that is
    /// stripped before normalization.
    pub parameters: Vec<ColumnDescriptor>,
}
