//! End-to-end generation runs against an in-memory schema provider.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Mutex;

use modelforge_emit::{ArtifactKind, ErrorSink, FailureKind, Generator, GeneratorOptions};
use modelforge_schema::error::{SchemaError, SchemaResult};
use modelforge_schema::model::{
    ColumnDescriptor, ForeignKeyDescriptor, UniqueConstraintDescriptor,
};
use modelforge_schema::provider::SchemaProvider;
use pretty_assertions::assert_eq;

/// Collects every sink message for assertions.
#[derive(Default)]
struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ErrorSink for RecordingSink {
    fn log(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// In-memory schema; listed tables whose columns are in `failing` error out.
#[derive(Default)]
struct FakeSchema {
    tables: Vec<String>,
    columns: HashMap<String, Vec<ColumnDescriptor>>,
    foreign_keys: Vec<ForeignKeyDescriptor>,
    uniques: Vec<UniqueConstraintDescriptor>,
    procedures: Vec<String>,
    procedure_results: HashMap<String, Vec<ColumnDescriptor>>,
    procedure_params: HashMap<String, Vec<ColumnDescriptor>>,
    failing: HashSet<String>,
}

impl SchemaProvider for FakeSchema {
    async fn tables(&self) -> SchemaResult<Vec<String>> {
        Ok(self.tables.clone())
    }

    async fn columns(&self, table: &str) -> SchemaResult<Vec<ColumnDescriptor>> {
        if self.failing.contains(table) {
            return Err(SchemaError::introspection(table, "connection reset"));
        }
        Ok(self.columns.get(table).cloned().unwrap_or_default())
    }

    async fn foreign_keys(&self) -> SchemaResult<Vec<ForeignKeyDescriptor>> {
        Ok(self.foreign_keys.clone())
    }

    async fn unique_constraints(
        &self,
        table: &str,
    ) -> SchemaResult<Vec<UniqueConstraintDescriptor>> {
        Ok(self
            .uniques
            .iter()
            .filter(|u| u.table == table)
            .cloned()
            .collect())
    }

    async fn procedures(&self) -> SchemaResult<Vec<String>> {
        Ok(self.procedures.clone())
    }

    async fn procedure_result_columns(
        &self,
        procedure: &str,
    ) -> SchemaResult<Vec<ColumnDescriptor>> {
        Ok(self
            .procedure_results
            .get(procedure)
            .cloned()
            .unwrap_or_default())
    }

    async fn procedure_parameters(&self, procedure: &str) -> SchemaResult<Vec<ColumnDescriptor>> {
        Ok(self
            .procedure_params
            .get(procedure)
            .cloned()
            .unwrap_or_default())
    }
}

fn column(name: &str, native: &str, length: i32, nullable: bool) -> ColumnDescriptor {
    ColumnDescriptor {
        name: name.to_string(),
        native_type: native.to_string(),
        length,
        nullable,
    }
}

fn shop_schema() -> FakeSchema {
    let mut schema = FakeSchema {
        tables: vec![
            "Categories".to_string(),
            "Customers".to_string(),
            "Products".to_string(),
            "Orders".to_string(),
            "OrderItems".to_string(),
        ],
        ..FakeSchema::default()
    };
    schema.columns.insert(
        "Categories".to_string(),
        vec![
            column("Id", "int", -2, false),
            column("Name", "nvarchar", 50, false),
        ],
    );
    schema.columns.insert(
        "Customers".to_string(),
        vec![
            column("Id", "int", -2, false),
            column("Email", "nvarchar", 200, false),
        ],
    );
    schema.columns.insert(
        "Products".to_string(),
        vec![
            column("Id", "int", -2, false),
            column("CategoryId", "int", -2, false),
            column("Price", "decimal", -2, false),
        ],
    );
    schema.columns.insert(
        "Orders".to_string(),
        vec![
            column("Id", "int", -2, false),
            column("CustomerId", "int", -2, false),
            column("SalesRepId", "int", -2, true),
            column("CreatedAt", "datetime", -2, false),
        ],
    );
    schema.columns.insert(
        "OrderItems".to_string(),
        vec![
            column("Id", "int", -2, false),
            column("OrderId", "int", -2, false),
            column("ProductId", "int", -2, false),
        ],
    );
    schema.foreign_keys = vec![
        ForeignKeyDescriptor {
            fk_table: "Products".to_string(),
            fk_column: "CategoryId".to_string(),
            pk_table: "Categories".to_string(),
            pk_column: "Id".to_string(),
            nullable: false,
        },
        ForeignKeyDescriptor {
            fk_table: "Orders".to_string(),
            fk_column: "CustomerId".to_string(),
            pk_table: "Customers".to_string(),
            pk_column: "Id".to_string(),
            nullable: false,
        },
        ForeignKeyDescriptor {
            fk_table: "OrderItems".to_string(),
            fk_column: "OrderId".to_string(),
            pk_table: "Orders".to_string(),
            pk_column: "Id".to_string(),
            nullable: false,
        },
    ];
    schema.uniques = vec![UniqueConstraintDescriptor {
        table: "Customers".to_string(),
        column: "Email".to_string(),
    }];
    schema
}

#[tokio::test]
async fn test_full_run_produces_entity_and_context_artifacts() {
    let schema = shop_schema();
    let sink = RecordingSink::default();
    let report = Generator::new(GeneratorOptions::default())
        .generate(&schema, &sink)
        .await;

    assert!(report.is_clean());
    assert!(sink.messages().is_empty());
    // Five entities plus the context.
    assert_eq!(report.artifacts.len(), 6);

    let names: Vec<&PathBuf> = report.artifacts.iter().map(|a| &a.file_name).collect();
    assert!(names.contains(&&PathBuf::from("Models/OrderItem.cs")));
    assert!(names.contains(&&PathBuf::from("Data/AppDbContext.cs")));

    let context = report
        .artifacts
        .iter()
        .find(|a| a.kind == ArtifactKind::Context)
        .unwrap();
    assert!(context.content.contains("public DbSet<Category> Categories { get; set; }"));
    assert!(context.content.contains(".HasConstraintName(\"FK_Orders_Customers\")"));
    assert!(context.content.contains(".OnDelete(DeleteBehavior.Cascade)"));
    assert!(context
        .content
        .contains("modelBuilder.Entity<Customer>().HasIndex(e => e.Email).IsUnique();"));
}

#[tokio::test]
async fn test_reruns_are_byte_identical() {
    let schema = shop_schema();
    let sink = RecordingSink::default();
    let generator = Generator::new(GeneratorOptions::default());

    let first = generator.generate(&schema, &sink).await;
    let second = generator.generate(&schema, &sink).await;

    assert_eq!(first.artifacts.len(), second.artifacts.len());
    for (a, b) in first.artifacts.iter().zip(second.artifacts.iter()) {
        assert_eq!(a.file_name, b.file_name);
        assert_eq!(a.content, b.content);
    }
}

#[tokio::test]
async fn test_one_failing_table_is_isolated() {
    let mut schema = shop_schema();
    schema.failing.insert("Products".to_string());
    let sink = RecordingSink::default();
    let report = Generator::new(GeneratorOptions::default())
        .generate(&schema, &sink)
        .await;

    // Four entity artifacts plus the context; no Product artifact.
    assert_eq!(report.artifacts.len(), 5);
    assert!(!report
        .artifacts
        .iter()
        .any(|a| a.file_name == PathBuf::from("Models/Product.cs")));

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].kind, FailureKind::Introspection);
    assert_eq!(report.failures[0].item, "Products");

    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("Products"));

    // The FK into the dropped table is dropped too; the rest survive.
    let context = report
        .artifacts
        .iter()
        .find(|a| a.kind == ArtifactKind::Context)
        .unwrap();
    assert!(!context.content.contains("FK_Products_Categories"));
    assert!(context.content.contains("FK_OrderItems_Orders"));
}

#[tokio::test]
async fn test_procedure_gating() {
    let mut schema = shop_schema();
    schema.procedures = vec![
        "sp_Noop".to_string(),
        "sp_Purge".to_string(),
        "GetOrderTotals".to_string(),
    ];
    schema
        .procedure_params
        .insert("sp_Purge".to_string(), vec![column("@Days", "int", -2, false)]);
    schema.procedure_results.insert(
        "GetOrderTotals".to_string(),
        vec![column("Total", "money", -2, false)],
    );
    let sink = RecordingSink::default();
    let report = Generator::new(GeneratorOptions::default())
        .generate(&schema, &sink)
        .await;

    let procedures: Vec<&PathBuf> = report
        .artifacts
        .iter()
        .filter(|a| a.kind == ArtifactKind::Procedure)
        .map(|a| &a.file_name)
        .collect();

    // sp_Noop has neither results nor parameters, so no artifact for it.
    assert_eq!(procedures.len(), 2);
    assert!(procedures.contains(&&PathBuf::from("Procedures/SpPurge.cs")));
    assert!(procedures.contains(&&PathBuf::from("Procedures/GetOrderTotals.cs")));

    let purge = report
        .artifacts
        .iter()
        .find(|a| a.file_name == PathBuf::from("Procedures/SpPurge.cs"))
        .unwrap();
    assert!(purge.content.contains("public class SpPurgeParams"));
    assert!(!purge.content.contains("public class SpPurge\n"));
}

#[tokio::test]
async fn test_nullable_fk_emits_set_null() {
    let mut schema = shop_schema();
    schema.tables.push("Employees".to_string());
    schema.columns.insert(
        "Employees".to_string(),
        vec![column("Id", "int", -2, false)],
    );
    schema.foreign_keys.push(ForeignKeyDescriptor {
        fk_table: "Orders".to_string(),
        fk_column: "SalesRepId".to_string(),
        pk_table: "Employees".to_string(),
        pk_column: "Id".to_string(),
        nullable: true,
    });
    let sink = RecordingSink::default();
    let report = Generator::new(GeneratorOptions::default())
        .generate(&schema, &sink)
        .await;

    let context = report
        .artifacts
        .iter()
        .find(|a| a.kind == ArtifactKind::Context)
        .unwrap();
    assert!(context.content.contains(".HasOne(o => o.SalesRep)"));
    assert!(context.content.contains(".OnDelete(DeleteBehavior.SetNull)"));

    let order = report
        .artifacts
        .iter()
        .find(|a| a.file_name == PathBuf::from("Models/Order.cs"))
        .unwrap();
    assert!(order.content.contains("public Employee? SalesRep { get; set; }"));
}
