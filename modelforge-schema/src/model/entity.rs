//! Finalized per-table entity model.

use serde::{Deserialize, Serialize};

use crate::typemap::TypeDescriptor;

/// Whether a navigation property holds one related instance or a set of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationKind {
    /// A single related instance on the "many" side.
    Scalar,
    /// A set of related instances on the "one" side.
    Collection,
}

/// Policy applied to dependent rows when the referenced entity is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeleteBehavior {
    /// Remove dependents along with the referenced entity.
    Cascade,
    /// Clear the reference on dependents.
    SetNull,
}

impl DeleteBehavior {
    /// The EF Core `DeleteBehavior` member name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cascade => "Cascade",
            Self::SetNull => "SetNull",
        }
    }
}

/// A relationship property attached to an entity by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationProperty {
    pub kind: NavigationKind,
    /// Type name of the entity this property lives on.
    pub owner_entity: String,
    /// Type name of the related entity.
    pub related_type_name: String,
    /// Emitted property name.
    pub property_name: String,
    /// Scalar only: mirrors the FK column's nullability.
    pub nullable: bool,
    /// Scalar only: delete-behavior policy for the relationship.
    pub delete_behavior: Option<DeleteBehavior>,
}

/// One declared property of an entity, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyModel {
    /// Normalized property name.
    pub name: String,
    /// Mapped target type.
    pub ty: TypeDescriptor,
    /// Whether this column is the entity's primary key.
    pub is_primary_key: bool,
    /// `[Required]`: text type on a non-nullable column.
    pub is_required: bool,
    /// `[MaxLength(n)]` bound for text columns, when annotated.
    pub max_length: Option<i32>,
    /// Emit a creation-moment default (`= DateTime.Now;`).
    pub has_generated_default: bool,
    /// `[ForeignKey("X")]` hint for non-key `*Id` columns.
    pub foreign_key_hint: Option<String>,
}

/// The normalized, relationship-aware representation of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityModel {
    /// PascalCase singular of the table name.
    pub type_name: String,
    /// Raw table name, kept for `[Table]` attributes and constraint names.
    pub table_name: String,
    /// Declared properties in column order.
    pub properties: Vec<PropertyModel>,
    /// Navigation properties in foreign-key discovery order.
    pub navigations: Vec<NavigationProperty>,
    /// Columns with a non-primary-key unique index, normalized, in provider order.
    pub unique_columns: Vec<String>,
}

impl EntityModel {
    /// Whether the entity already claims this member name, either as a declared
    /// column property or as a previously attached navigation.
    pub fn has_member(&self, name: &str) -> bool {
        self.properties.iter().any(|p| p.name == name)
            || self.navigations.iter().any(|n| n.property_name == name)
    }
}
