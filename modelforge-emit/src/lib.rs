//! Artifact generation for modelforge.
//!
//! [`Generator`] drives a full run: fetch the schema through a
//! [`SchemaProvider`], assemble the model graph, render one artifact per table
//! and procedure plus the database context, and return everything in a
//! [`GenerationReport`]. A failure on one item never aborts the run; it is
//! recorded as a [`Failure`], reported once through the [`ErrorSink`], and the
//! remaining items proceed.

pub mod context;
pub mod entity;
pub mod error;
pub mod procedure;

use std::path::PathBuf;

use modelforge_schema::assemble::{AssemblerOptions, ModelAssembler, SchemaModel};
use modelforge_schema::model::{
    ForeignKeyDescriptor, ProcedureDescriptor, TableDescriptor, UniqueConstraintDescriptor,
};
use modelforge_schema::naming::CaseMode;
use modelforge_schema::provider::SchemaProvider;
use tracing::{debug, warn};

pub use crate::error::{EmitError, EmitResult, Failure, FailureKind};

/// Receives one message per recoverable failure.
pub trait ErrorSink {
    /// Report a single failure message.
    fn log(&self, message: &str);
}

/// Default sink; forwards to `tracing::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn log(&self, message: &str) {
        warn!("{message}");
    }
}

/// What a rendered artifact contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// One entity class for a table.
    Entity,
    /// Result/parameters classes for a stored procedure.
    Procedure,
    /// The database context class.
    Context,
}

/// One rendered output file, not yet persisted.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub kind: ArtifactKind,
    /// Relative path under the output root, e.g. `Models/Order.cs`.
    pub file_name: PathBuf,
    pub content: String,
}

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Namespace for entity classes.
    pub model_namespace: String,
    /// Namespace for procedure classes.
    pub procedure_namespace: String,
    /// Namespace for the context class.
    pub context_namespace: String,
    /// Output subdirectory for entity artifacts.
    pub model_dir: PathBuf,
    /// Output subdirectory for procedure artifacts.
    pub procedure_dir: PathBuf,
    /// Output subdirectory for the context artifact.
    pub context_dir: PathBuf,
    /// Name of the generated context class.
    pub context_class_name: String,
    /// Identifier normalization mode.
    pub case_mode: CaseMode,
    /// Emit `= DateTime.Now;` defaults for non-nullable date/time columns.
    pub datetime_now_default: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            model_namespace: "App.Models".to_string(),
            procedure_namespace: "App.Procedures".to_string(),
            context_namespace: "App.Data".to_string(),
            model_dir: PathBuf::from("Models"),
            procedure_dir: PathBuf::from("Procedures"),
            context_dir: PathBuf::from("Data"),
            context_class_name: "AppDbContext".to_string(),
            case_mode: CaseMode::Preserve,
            datetime_now_default: true,
        }
    }
}

/// The outcome of one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Every artifact that rendered successfully, in model order.
    pub artifacts: Vec<Artifact>,
    /// Every recoverable failure, in the order it occurred.
    pub failures: Vec<Failure>,
}

impl GenerationReport {
    /// Whether the run completed without a single failure.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn fail(
        &mut self,
        sink: &dyn ErrorSink,
        kind: FailureKind,
        item: impl Into<String>,
        message: impl Into<String>,
    ) {
        let failure = Failure::new(kind, item, message);
        sink.log(&failure.to_message());
        self.failures.push(failure);
    }
}

/// Drives schema fetch, model assembly, and artifact rendering.
#[derive(Debug, Clone)]
pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    /// Create a generator with the given options.
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// The options this generator was created with.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Run the full pipeline against one schema provider.
    ///
    /// Never returns an error: every per-item failure is recorded in the
    /// report and logged to the sink, and the rest of the run continues.
    pub async fn generate(
        &self,
        provider: &impl SchemaProvider,
        sink: &dyn ErrorSink,
    ) -> GenerationReport {
        let mut report = GenerationReport::default();

        let model = self.fetch_and_assemble(provider, sink, &mut report).await;
        self.render(&model, sink, &mut report);

        debug!(
            artifacts = report.artifacts.len(),
            failures = report.failures.len(),
            "generation run finished"
        );
        report
    }

    async fn fetch_and_assemble(
        &self,
        provider: &impl SchemaProvider,
        sink: &dyn ErrorSink,
        report: &mut GenerationReport,
    ) -> SchemaModel {
        let table_names = match provider.tables().await {
            Ok(names) => names,
            Err(err) => {
                report.fail(sink, FailureKind::Introspection, "<tables>", err.to_string());
                Vec::new()
            }
        };

        let mut tables: Vec<TableDescriptor> = Vec::with_capacity(table_names.len());
        let mut uniques: Vec<UniqueConstraintDescriptor> = Vec::new();
        for name in &table_names {
            // A failed column fetch drops the whole table from the run.
            match provider.columns(name).await {
                Ok(columns) => tables.push(TableDescriptor {
                    name: name.clone(),
                    columns,
                }),
                Err(err) => {
                    report.fail(sink, FailureKind::Introspection, name, err.to_string());
                    continue;
                }
            }
            match provider.unique_constraints(name).await {
                Ok(mut constraints) => uniques.append(&mut constraints),
                Err(err) => {
                    report.fail(sink, FailureKind::Introspection, name, err.to_string());
                }
            }
        }

        let foreign_keys: Vec<ForeignKeyDescriptor> = match provider.foreign_keys().await {
            Ok(fks) => fks,
            Err(err) => {
                report.fail(
                    sink,
                    FailureKind::Introspection,
                    "<foreign keys>",
                    err.to_string(),
                );
                Vec::new()
            }
        };

        let procedure_names = match provider.procedures().await {
            Ok(names) => names,
            Err(err) => {
                report.fail(
                    sink,
                    FailureKind::Introspection,
                    "<procedures>",
                    err.to_string(),
                );
                Vec::new()
            }
        };

        let mut procedures: Vec<ProcedureDescriptor> = Vec::with_capacity(procedure_names.len());
        for name in &procedure_names {
            let result_columns = match provider.procedure_result_columns(name).await {
                Ok(columns) => columns,
                Err(err) => {
                    report.fail(sink, FailureKind::Introspection, name, err.to_string());
                    continue;
                }
            };
            let parameters = match provider.procedure_parameters(name).await {
                Ok(parameters) => parameters,
                Err(err) => {
                    report.fail(sink, FailureKind::Introspection, name, err.to_string());
                    continue;
                }
            };
            procedures.push(ProcedureDescriptor {
                name: name.clone(),
                result_columns,
                parameters,
            });
        }

        let assembler = ModelAssembler::new(AssemblerOptions {
            case_mode: self.options.case_mode,
            datetime_now_default: self.options.datetime_now_default,
            ..AssemblerOptions::default()
        });
        assembler.assemble(&tables, &foreign_keys, &uniques, &procedures)
    }

    fn render(&self, model: &SchemaModel, sink: &dyn ErrorSink, report: &mut GenerationReport) {
        for entity in &model.entities {
            match entity::render(entity, &self.options.model_namespace) {
                Ok(content) => report.artifacts.push(Artifact {
                    kind: ArtifactKind::Entity,
                    file_name: self
                        .options
                        .model_dir
                        .join(format!("{}.cs", entity.type_name)),
                    content,
                }),
                Err(err) => {
                    report.fail(
                        sink,
                        FailureKind::Generation,
                        &entity.table_name,
                        err.to_string(),
                    );
                }
            }
        }

        for procedure in &model.procedures {
            match procedure::render(procedure, &self.options.procedure_namespace) {
                Ok(content) => report.artifacts.push(Artifact {
                    kind: ArtifactKind::Procedure,
                    file_name: self
                        .options
                        .procedure_dir
                        .join(format!("{}.cs", procedure.class_name)),
                    content,
                }),
                Err(err) => {
                    report.fail(
                        sink,
                        FailureKind::Generation,
                        &procedure.procedure_name,
                        err.to_string(),
                    );
                }
            }
        }

        match context::render(
            model,
            &self.options.context_namespace,
            &self.options.context_class_name,
        ) {
            Ok(content) => report.artifacts.push(Artifact {
                kind: ArtifactKind::Context,
                file_name: self
                    .options
                    .context_dir
                    .join(format!("{}.cs", self.options.context_class_name)),
                content,
            }),
            Err(err) => {
                report.fail(
                    sink,
                    FailureKind::Generation,
                    &self.options.context_class_name,
                    err.to_string(),
                );
            }
        }
    }
}
