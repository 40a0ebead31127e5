//! Foreign-key relationship resolution.
//!
//! Runs strictly after every table is known (the cross-table phase): resolving a
//! relationship's collection-side name requires the complete table list. Each
//! foreign key yields exactly one scalar navigation on the "many" side and one
//! collection navigation on the "one" side.

use std::collections::HashSet;

use crate::inflect;
use crate::model::{DeleteBehavior, ForeignKeyDescriptor};
use crate::naming::{self, CaseMode};

/// One resolved foreign-key relationship, with both navigation names fixed.
///
/// Consumed twice: merged into the owning entities as navigation properties, and
/// read by the context emitter to render the relationship configuration chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRelationship {
    /// Raw table holding the FK column.
    pub fk_table: String,
    /// Raw referenced table.
    pub pk_table: String,
    /// Entity type name on the "many" side.
    pub fk_entity: String,
    /// Entity type name on the "one" side.
    pub pk_entity: String,
    /// Normalized FK column property name (e.g. `CustomerId`).
    pub fk_property: String,
    /// Scalar navigation name on the "many" side.
    pub scalar_name: String,
    /// Collection navigation name on the "one" side.
    pub collection_name: String,
    /// Nullability of the FK column.
    pub nullable: bool,
    /// Delete policy: nullable FK column -> SetNull, otherwise Cascade.
    pub delete_behavior: DeleteBehavior,
}

/// Strip one trailing `Id` suffix (case-insensitively) from a normalized
/// property name. Returns `None` when nothing meaningful would remain.
fn strip_id_suffix(property: &str) -> Option<String> {
    if property.len() > 2 && property.to_ascii_lowercase().ends_with("id") {
        Some(property[..property.len() - 2].to_string())
    } else {
        None
    }
}

/// Resolve every foreign key into a [`ResolvedRelationship`].
///
/// Naming collisions on one owner (self-references, or several FKs between the
/// same two tables) are resolved by prefixing later collection names with the FK
/// column's semantic name; the first relationship always keeps the plain names.
pub fn resolve(foreign_keys: &[ForeignKeyDescriptor], mode: CaseMode) -> Vec<ResolvedRelationship> {
    let mut used: HashSet<(String, String)> = HashSet::new();
    let mut relationships = Vec::with_capacity(foreign_keys.len());

    for fk in foreign_keys {
        let fk_entity = inflect::to_singular(&naming::pascal_case(&fk.fk_table, mode));
        let pk_entity = inflect::to_singular(&naming::pascal_case(&fk.pk_table, mode));
        let fk_property = naming::pascal_case(&fk.fk_column, mode);

        // The FK column's semantic name: `SalesRepId` -> `SalesRep`. A column
        // named just `Id` has no semantic part, so the related type stands in.
        let semantic = strip_id_suffix(&fk_property).unwrap_or_else(|| pk_entity.clone());

        let scalar_name = if used.contains(&(fk_entity.clone(), semantic.clone())) {
            format!("{}{}", semantic, pk_entity)
        } else {
            semantic.clone()
        };
        used.insert((fk_entity.clone(), scalar_name.clone()));

        let plural = inflect::to_plural(&fk_entity);
        let collection_name = if used.contains(&(pk_entity.clone(), plural.clone())) {
            format!("{}{}", semantic, plural)
        } else {
            plural
        };
        used.insert((pk_entity.clone(), collection_name.clone()));

        relationships.push(ResolvedRelationship {
            fk_table: fk.fk_table.clone(),
            pk_table: fk.pk_table.clone(),
            fk_entity,
            pk_entity,
            fk_property,
            scalar_name,
            collection_name,
            nullable: fk.nullable,
            delete_behavior: if fk.nullable {
                DeleteBehavior::SetNull
            } else {
                DeleteBehavior::Cascade
            },
        });
    }

    relationships
}
