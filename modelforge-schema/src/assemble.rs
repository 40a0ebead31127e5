//! Model assembly.
//!
//! Two hard phases separated by a barrier: per-table and per-procedure models
//! are built independently of each other, then relationship resolution runs over
//! the complete table list and its output is merged into the owning entities.
//! The resulting [`SchemaModel`] is never mutated after assembly.

use tracing::debug;

use crate::inflect;
use crate::model::{
    ColumnDescriptor, EntityModel, ForeignKeyDescriptor, NavigationKind, NavigationProperty,
    ProcedureDescriptor, ProcedureModel, PropertyModel, TableDescriptor,
    UniqueConstraintDescriptor, UNBOUNDED_LENGTH,
};
use crate::naming::{self, CaseMode};
use crate::resolve::{self, ResolvedRelationship};
use crate::typemap::{self, CsType};

/// Default `[MaxLength]` bound substituted for unbounded text columns.
pub const DEFAULT_TEXT_LENGTH: i32 = 4000;

/// Marker character prefixed to procedure parameter names by the provider.
const PARAMETER_MARKER: char = '@';

/// First name derived from `base` that no declared property or already-merged
/// navigation on the owner claims. A `Customer` column beside a `CustomerId`
/// foreign key would otherwise collide with the scalar navigation; the suffixed
/// form (`CustomerNavigation`) follows EF Core's own scaffolding convention.
fn navigation_name(owner: &EntityModel, base: &str) -> String {
    let mut name = base.to_string();
    while owner.has_member(&name) {
        name.push_str("Navigation");
    }
    name
}

/// Options controlling model assembly.
#[derive(Debug, Clone)]
pub struct AssemblerOptions {
    /// Identifier normalization mode.
    pub case_mode: CaseMode,
    /// Emit a creation-moment default for non-nullable date/time columns.
    pub datetime_now_default: bool,
    /// Bound substituted for unbounded text columns.
    pub default_text_length: i32,
}

impl Default for AssemblerOptions {
    fn default() -> Self {
        Self {
            case_mode: CaseMode::Preserve,
            datetime_now_default: true,
            default_text_length: DEFAULT_TEXT_LENGTH,
        }
    }
}

/// The finalized model graph for one generation run.
#[derive(Debug, Clone, Default)]
pub struct SchemaModel {
    /// One entity per table, in provider table order.
    pub entities: Vec<EntityModel>,
    /// Resolved relationships in foreign-key discovery order.
    pub relationships: Vec<ResolvedRelationship>,
    /// One model per procedure that has result columns or parameters.
    pub procedures: Vec<ProcedureModel>,
}

impl SchemaModel {
    /// Look up an entity by its type name.
    pub fn entity(&self, type_name: &str) -> Option<&EntityModel> {
        self.entities.iter().find(|e| e.type_name == type_name)
    }

    fn entity_mut(&mut self, type_name: &str) -> Option<&mut EntityModel> {
        self.entities.iter_mut().find(|e| e.type_name == type_name)
    }
}

/// Builds entity and procedure models from raw descriptors.
#[derive(Debug, Clone)]
pub struct ModelAssembler {
    options: AssemblerOptions,
}

impl ModelAssembler {
    /// Create an assembler with the given options.
    pub fn new(options: AssemblerOptions) -> Self {
        Self { options }
    }

    /// The options this assembler was created with.
    pub fn options(&self) -> &AssemblerOptions {
        &self.options
    }

    /// Build the entity model for one table (phase 1; no relationships yet).
    pub fn entity(&self, table: &TableDescriptor) -> EntityModel {
        let type_name = inflect::to_singular(&naming::pascal_case(&table.name, self.options.case_mode));
        let pk_alias = format!("{}Id", type_name);

        let properties = table
            .columns
            .iter()
            .map(|column| self.column_property(column, &pk_alias))
            .collect();

        EntityModel {
            type_name,
            table_name: table.name.clone(),
            properties,
            navigations: Vec::new(),
            unique_columns: Vec::new(),
        }
    }

    fn column_property(&self, column: &ColumnDescriptor, pk_alias: &str) -> PropertyModel {
        let name = naming::pascal_case(&column.name, self.options.case_mode);
        let ty = typemap::map(&column.native_type, column.nullable);

        let is_primary_key =
            name.eq_ignore_ascii_case("Id") || name.eq_ignore_ascii_case(pk_alias);

        let is_text = ty.cs_type == CsType::String;
        let is_required = is_text && !column.nullable;

        let max_length = if is_text {
            if column.length == UNBOUNDED_LENGTH {
                Some(self.options.default_text_length)
            } else if column.length > 0 {
                Some(column.length)
            } else {
                None
            }
        } else {
            None
        };

        let has_generated_default = self.options.datetime_now_default
            && ty.cs_type == CsType::DateTime
            && !column.nullable;

        let foreign_key_hint = if !is_primary_key
            && column.name.len() > 2
            && column.name.to_ascii_lowercase().ends_with("id")
        {
            Some(column.name[..column.name.len() - 2].to_string())
        } else {
            None
        };

        PropertyModel {
            name,
            ty,
            is_primary_key,
            is_required,
            max_length,
            has_generated_default,
            foreign_key_hint,
        }
    }

    /// Build the model for one stored procedure, or `None` when the procedure
    /// has neither result columns nor parameters.
    pub fn procedure(&self, procedure: &ProcedureDescriptor) -> Option<ProcedureModel> {
        if procedure.result_columns.is_empty() && procedure.parameters.is_empty() {
            return None;
        }

        let class_name = naming::pascal_case(&procedure.name, self.options.case_mode);

        let result_properties = procedure
            .result_columns
            .iter()
            .map(|c| self.plain_property(&c.name, &c.native_type, c.nullable))
            .collect();

        let params_class_name = if procedure.parameters.is_empty() {
            None
        } else {
            Some(format!("{}Params", class_name))
        };

        let parameter_properties = procedure
            .parameters
            .iter()
            .map(|p| {
                let stripped = p.name.trim_start_matches(PARAMETER_MARKER);
                self.plain_property(stripped, &p.native_type, p.nullable)
            })
            .collect();

        Some(ProcedureModel {
            procedure_name: procedure.name.clone(),
            class_name,
            result_properties,
            params_class_name,
            parameter_properties,
        })
    }

    /// A property with no table-level annotations (procedure results/parameters).
    fn plain_property(&self, name: &str, native_type: &str, nullable: bool) -> PropertyModel {
        PropertyModel {
            name: naming::pascal_case(name, self.options.case_mode),
            ty: typemap::map(native_type, nullable),
            is_primary_key: false,
            is_required: false,
            max_length: None,
            has_generated_default: false,
            foreign_key_hint: None,
        }
    }

    /// Assemble the full model graph: phase-1 entities and procedures, then the
    /// cross-table relationship merge.
    pub fn assemble(
        &self,
        tables: &[TableDescriptor],
        foreign_keys: &[ForeignKeyDescriptor],
        unique_constraints: &[UniqueConstraintDescriptor],
        procedures: &[ProcedureDescriptor],
    ) -> SchemaModel {
        let mut model = SchemaModel {
            entities: tables.iter().map(|t| self.entity(t)).collect(),
            relationships: Vec::new(),
            procedures: procedures.iter().filter_map(|p| self.procedure(p)).collect(),
        };

        for unique in unique_constraints {
            let entity_name =
                inflect::to_singular(&naming::pascal_case(&unique.table, self.options.case_mode));
            let column = naming::pascal_case(&unique.column, self.options.case_mode);
            match model.entity_mut(&entity_name) {
                Some(entity) => entity.unique_columns.push(column),
                None => debug!(table = %unique.table, "unique constraint on unknown table"),
            }
        }

        // Barrier: every table is known before any relationship is resolved.
        let resolved = resolve::resolve(foreign_keys, self.options.case_mode);
        for mut rel in resolved {
            if model.entity(&rel.fk_entity).is_none() || model.entity(&rel.pk_entity).is_none() {
                debug!(
                    fk_table = %rel.fk_table,
                    pk_table = %rel.pk_table,
                    "foreign key references a table missing from the model"
                );
                continue;
            }

            // The resolver only sees other navigations; declared columns can
            // still claim a navigation's name and must win.
            if let Some(owner) = model.entity(&rel.fk_entity) {
                rel.scalar_name = navigation_name(owner, &rel.scalar_name);
            }
            if let Some(owner) = model.entity(&rel.pk_entity) {
                rel.collection_name = navigation_name(owner, &rel.collection_name);
            }

            if let Some(owner) = model.entity_mut(&rel.fk_entity) {
                owner.navigations.push(NavigationProperty {
                    kind: NavigationKind::Scalar,
                    owner_entity: rel.fk_entity.clone(),
                    related_type_name: rel.pk_entity.clone(),
                    property_name: rel.scalar_name.clone(),
                    nullable: rel.nullable,
                    delete_behavior: Some(rel.delete_behavior),
                });
            }
            if let Some(owner) = model.entity_mut(&rel.pk_entity) {
                owner.navigations.push(NavigationProperty {
                    kind: NavigationKind::Collection,
                    owner_entity: rel.pk_entity.clone(),
                    related_type_name: rel.fk_entity.clone(),
                    property_name: rel.collection_name.clone(),
                    nullable: false,
                    delete_behavior: None,
                });
            }

            model.relationships.push(rel);
        }

        model
    }
}
