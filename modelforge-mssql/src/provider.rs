//! Catalog introspection against the SQL Server system views.
//!
//! Implements [`SchemaProvider`] with one catalog query per call. Result order
//! comes from the server: tables and procedures in catalog order, foreign keys
//! ordered by parent table then column, unique index columns by table then
//! column. That order flows through the model unmodified.

use modelforge_schema::error::{SchemaError, SchemaResult};
use modelforge_schema::model::{
    ColumnDescriptor, ForeignKeyDescriptor, UniqueConstraintDescriptor, UNBOUNDED_LENGTH,
};
use modelforge_schema::provider::SchemaProvider;
use tiberius::Row;

use crate::pool::MssqlPool;

/// Sentinel for a NULL `CHARACTER_MAXIMUM_LENGTH` in the catalog.
pub const CATALOG_NULL_LENGTH: i32 = -2;

const TABLES_SQL: &str =
    "SELECT TABLE_NAME FROM INFORMATION_SCHEMA.TABLES WHERE TABLE_TYPE = 'BASE TABLE'";

const COLUMNS_SQL: &str = "\
SELECT COLUMN_NAME, DATA_TYPE, CHARACTER_MAXIMUM_LENGTH, IS_NULLABLE
FROM INFORMATION_SCHEMA.COLUMNS
WHERE TABLE_NAME = @P1
ORDER BY ORDINAL_POSITION";

const PROCEDURES_SQL: &str =
    "SELECT SPECIFIC_NAME FROM INFORMATION_SCHEMA.ROUTINES WHERE ROUTINE_TYPE = 'PROCEDURE'";

const PROCEDURE_RESULT_SQL: &str = "\
SELECT name, system_type_name, is_nullable
FROM sys.dm_exec_describe_first_result_set(@P1, NULL, 0)";

const PROCEDURE_PARAMETERS_SQL: &str = "\
SELECT p.name, t.name, p.has_default_value
FROM sys.parameters p
JOIN sys.types t ON p.user_type_id = t.user_type_id
WHERE p.object_id = OBJECT_ID(@P1)
ORDER BY p.parameter_id";

const UNIQUE_COLUMNS_SQL: &str = "\
SELECT col.name, tab.name
FROM sys.indexes idx
INNER JOIN sys.index_columns ic ON idx.object_id = ic.object_id AND idx.index_id = ic.index_id
INNER JOIN sys.columns col ON ic.object_id = col.object_id AND ic.column_id = col.column_id
INNER JOIN sys.tables tab ON idx.object_id = tab.object_id
WHERE idx.is_unique = 1 AND idx.is_primary_key = 0 AND tab.name = @P1
ORDER BY tab.name, col.name";

const FOREIGN_KEYS_SQL: &str = "\
SELECT
    cp.name AS fk_column,
    cr.name AS pk_column,
    tp.name AS fk_table,
    tr.name AS pk_table,
    cp.is_nullable
FROM sys.foreign_keys fk
INNER JOIN sys.foreign_key_columns fkc ON fk.object_id = fkc.constraint_object_id
INNER JOIN sys.tables tp ON fkc.parent_object_id = tp.object_id
INNER JOIN sys.columns cp ON fkc.parent_object_id = cp.object_id AND fkc.parent_column_id = cp.column_id
INNER JOIN sys.tables tr ON fkc.referenced_object_id = tr.object_id
INNER JOIN sys.columns cr ON fkc.referenced_object_id = cr.object_id AND fkc.referenced_column_id = cr.column_id
ORDER BY tp.name, cp.name";

/// Split a catalog type rendering like `nvarchar(50)` into its keyword and
/// length. `(max)` maps to the unbounded sentinel; anything unparseable maps to
/// the catalog-NULL sentinel.
fn split_native_type(rendered: &str) -> (String, i32) {
    let Some((keyword, rest)) = rendered.split_once('(') else {
        return (rendered.trim().to_string(), CATALOG_NULL_LENGTH);
    };

    let inner = rest.trim_end_matches(')');
    let first = inner.split(',').next().unwrap_or(inner).trim();
    let length = if first.eq_ignore_ascii_case("max") {
        UNBOUNDED_LENGTH
    } else {
        first.parse().unwrap_or(CATALOG_NULL_LENGTH)
    };

    (keyword.trim().to_string(), length)
}

/// [`SchemaProvider`] backed by a SQL Server connection pool.
#[derive(Clone)]
pub struct MssqlSchemaProvider {
    pool: MssqlPool,
}

impl MssqlSchemaProvider {
    /// Create a provider over an existing pool.
    pub fn new(pool: MssqlPool) -> Self {
        Self { pool }
    }

    /// The pool this provider reads through.
    pub fn pool(&self) -> &MssqlPool {
        &self.pool
    }

    async fn query(
        &self,
        item: &str,
        sql: &str,
        params: &[&dyn tiberius::ToSql],
    ) -> SchemaResult<Vec<Row>> {
        self.pool
            .query(sql, params)
            .await
            .map_err(|e| SchemaError::introspection(item, e.to_string()))
    }
}

impl SchemaProvider for MssqlSchemaProvider {
    async fn tables(&self) -> SchemaResult<Vec<String>> {
        let rows = self.query("<tables>", TABLES_SQL, &[]).await?;
        Ok(rows
            .iter()
            .filter_map(|row| row.get::<&str, _>(0).map(String::from))
            .collect())
    }

    async fn columns(&self, table: &str) -> SchemaResult<Vec<ColumnDescriptor>> {
        let rows = self.query(table, COLUMNS_SQL, &[&table]).await?;
        Ok(rows
            .iter()
            .map(|row| ColumnDescriptor {
                name: row.get::<&str, _>(0).unwrap_or_default().to_string(),
                native_type: row.get::<&str, _>(1).unwrap_or_default().to_string(),
                length: row.get::<i32, _>(2).unwrap_or(CATALOG_NULL_LENGTH),
                nullable: row.get::<&str, _>(3) == Some("YES"),
            })
            .collect())
    }

    async fn foreign_keys(&self) -> SchemaResult<Vec<ForeignKeyDescriptor>> {
        let rows = self
            .query("<foreign keys>", FOREIGN_KEYS_SQL, &[])
            .await?;
        Ok(rows
            .iter()
            .map(|row| ForeignKeyDescriptor {
                fk_column: row.get::<&str, _>(0).unwrap_or_default().to_string(),
                pk_column: row.get::<&str, _>(1).unwrap_or_default().to_string(),
                fk_table: row.get::<&str, _>(2).unwrap_or_default().to_string(),
                pk_table: row.get::<&str, _>(3).unwrap_or_default().to_string(),
                nullable: row.get::<bool, _>(4).unwrap_or(false),
            })
            .collect())
    }

    async fn unique_constraints(
        &self,
        table: &str,
    ) -> SchemaResult<Vec<UniqueConstraintDescriptor>> {
        let rows = self.query(table, UNIQUE_COLUMNS_SQL, &[&table]).await?;
        Ok(rows
            .iter()
            .map(|row| UniqueConstraintDescriptor {
                column: row.get::<&str, _>(0).unwrap_or_default().to_string(),
                table: row.get::<&str, _>(1).unwrap_or_default().to_string(),
            })
            .collect())
    }

    async fn procedures(&self) -> SchemaResult<Vec<String>> {
        let rows = self.query("<procedures>", PROCEDURES_SQL, &[]).await?;
        Ok(rows
            .iter()
            .filter_map(|row| row.get::<&str, _>(0).map(String::from))
            .collect())
    }

    async fn procedure_result_columns(
        &self,
        procedure: &str,
    ) -> SchemaResult<Vec<ColumnDescriptor>> {
        let exec = format!("EXEC {}", procedure);
        let rows = self
            .query(procedure, PROCEDURE_RESULT_SQL, &[&exec.as_str()])
            .await?;
        Ok(rows
            .iter()
            .map(|row| {
                let (native_type, length) =
                    split_native_type(row.get::<&str, _>(1).unwrap_or_default());
                ColumnDescriptor {
                    name: row.get::<&str, _>(0).unwrap_or_default().to_string(),
                    native_type,
                    length,
                    nullable: row.get::<bool, _>(2).unwrap_or(false),
                }
            })
            .collect())
    }

    async fn procedure_parameters(&self, procedure: &str) -> SchemaResult<Vec<ColumnDescriptor>> {
        let qualified = format!("dbo.{}", procedure);
        let rows = self
            .query(procedure, PROCEDURE_PARAMETERS_SQL, &[&qualified.as_str()])
            .await?;
        Ok(rows
            .iter()
            .map(|row| ColumnDescriptor {
                name: row.get::<&str, _>(0).unwrap_or_default().to_string(),
                native_type: row.get::<&str, _>(1).unwrap_or_default().to_string(),
                length: CATALOG_NULL_LENGTH,
                // Parameters with a default can be omitted at the call site.
                nullable: row.get::<bool, _>(2).unwrap_or(false),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_native_type_plain() {
        assert_eq!(split_native_type("int"), ("int".to_string(), CATALOG_NULL_LENGTH));
    }

    #[test]
    fn test_split_native_type_bounded() {
        assert_eq!(split_native_type("nvarchar(50)"), ("nvarchar".to_string(), 50));
    }

    #[test]
    fn test_split_native_type_max() {
        assert_eq!(
            split_native_type("nvarchar(max)"),
            ("nvarchar".to_string(), UNBOUNDED_LENGTH)
        );
    }

    #[test]
    fn test_split_native_type_precision_scale() {
        let (keyword, length) = split_native_type("decimal(18,2)");
        assert_eq!(keyword, "decimal");
        assert_eq!(length, 18);
    }
}
