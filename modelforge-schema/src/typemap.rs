//! Native SQL type to C# type mapping.
//!
//! One data-driven keyword table consumed by a single [`map`] entry point. The
//! table is total: any keyword it does not know maps to the `string` fallback and
//! never fails.

use serde::{Deserialize, Serialize};

/// A C# target type produced by the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CsType {
    Int,
    Long,
    Short,
    Byte,
    Bool,
    Decimal,
    Double,
    Float,
    DateTime,
    DateTimeOffset,
    Guid,
    TimeSpan,
    String,
    /// `byte[]`.
    Bytes,
    /// `object` (sql_variant).
    Object,
}

impl CsType {
    /// The C# source spelling of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Long => "long",
            Self::Short => "short",
            Self::Byte => "byte",
            Self::Bool => "bool",
            Self::Decimal => "decimal",
            Self::Double => "double",
            Self::Float => "float",
            Self::DateTime => "DateTime",
            Self::DateTimeOffset => "DateTimeOffset",
            Self::Guid => "Guid",
            Self::TimeSpan => "TimeSpan",
            Self::String => "string",
            Self::Bytes => "byte[]",
            Self::Object => "object",
        }
    }

    /// Reference-like types are always nullable in the target representation and
    /// never receive a `?` marker.
    pub fn is_reference_like(&self) -> bool {
        matches!(self, Self::String | Self::Bytes | Self::Object)
    }
}

/// The mapped type for one column, plus its derived nullability marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Canonical C# type.
    pub cs_type: CsType,
    /// Whether the emitted property type carries a `?` suffix.
    pub needs_nullable_marker: bool,
}

impl TypeDescriptor {
    /// The emitted C# type text, including the `?` marker when needed.
    pub fn render(&self) -> String {
        if self.needs_nullable_marker {
            format!("{}?", self.cs_type.as_str())
        } else {
            self.cs_type.as_str().to_string()
        }
    }
}

/// Fixed keyword table: native SQL Server type keyword to C# type.
fn keyword_type(native: &str) -> CsType {
    match native {
        "int" => CsType::Int,
        "bigint" => CsType::Long,
        "smallint" => CsType::Short,
        "tinyint" => CsType::Byte,
        "bit" => CsType::Bool,
        "decimal" | "numeric" | "money" | "smallmoney" => CsType::Decimal,
        "float" => CsType::Double,
        "real" => CsType::Float,
        "date" | "datetime" | "smalldatetime" | "datetime2" => CsType::DateTime,
        "datetimeoffset" => CsType::DateTimeOffset,
        "uniqueidentifier" => CsType::Guid,
        "time" => CsType::TimeSpan,
        "char" | "nchar" | "varchar" | "nvarchar" | "text" | "ntext" | "xml" => CsType::String,
        "binary" | "varbinary" | "image" | "rowversion" | "timestamp" => CsType::Bytes,
        "sql_variant" => CsType::Object,
        // Designed default, not an error path.
        _ => CsType::String,
    }
}

/// Map a native column type and its nullability to a [`TypeDescriptor`].
///
/// Reference-like targets never get a nullable marker; value targets get one iff
/// the column is nullable. The declared length does not influence the mapped
/// type, only emission-time annotations.
pub fn map(native: &str, nullable: bool) -> TypeDescriptor {
    let cs_type = keyword_type(native);
    TypeDescriptor {
        cs_type,
        needs_nullable_marker: nullable && !cs_type.is_reference_like(),
    }
}
