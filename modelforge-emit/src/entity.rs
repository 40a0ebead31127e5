//! Table model emitter.
//!
//! Renders one C# entity class per [`EntityModel`]: declared properties in
//! column order with their annotations, then navigation properties in
//! resolver-assigned order. Pure rendering; iteration order is inherited from
//! the model unmodified.

use modelforge_schema::model::{EntityModel, NavigationKind};

use crate::error::{EmitError, EmitResult};

/// Render the entity class artifact for one table.
pub fn render(entity: &EntityModel, namespace: &str) -> EmitResult<String> {
    if entity.type_name.is_empty() {
        return Err(EmitError::malformed(
            &entity.table_name,
            "table name normalizes to an empty type name",
        ));
    }

    let mut out = String::new();

    out.push_str("using Microsoft.EntityFrameworkCore;\n");
    out.push_str("using System.ComponentModel.DataAnnotations;\n");
    out.push_str("using System.ComponentModel.DataAnnotations.Schema;\n");
    out.push('\n');
    out.push_str(&format!("namespace {}\n", namespace));
    out.push_str("{\n");
    out.push_str(&format!("    [Table(\"{}\")]\n", entity.table_name));
    out.push_str(&format!("    public class {}\n", entity.type_name));
    out.push_str("    {\n");

    for property in &entity.properties {
        if property.is_primary_key {
            out.push_str("        [Key]\n");
        } else if let Some(ref hint) = property.foreign_key_hint {
            out.push_str(&format!("        [ForeignKey(\"{}\")]\n", hint));
        }
        if property.is_required {
            out.push_str("        [Required]\n");
        }
        if let Some(bound) = property.max_length {
            out.push_str(&format!("        [MaxLength({})]\n", bound));
        }

        if property.has_generated_default {
            out.push_str(&format!(
                "        public {} {} {{ get; set; }} = DateTime.Now;\n",
                property.ty.render(),
                property.name
            ));
        } else {
            out.push_str(&format!(
                "        public {} {} {{ get; set; }}\n",
                property.ty.render(),
                property.name
            ));
        }
        out.push('\n');
    }

    for nav in &entity.navigations {
        match nav.kind {
            NavigationKind::Scalar => {
                let marker = if nav.nullable { "?" } else { "" };
                out.push_str(&format!(
                    "        public {}{} {} {{ get; set; }}\n",
                    nav.related_type_name, marker, nav.property_name
                ));
            }
            NavigationKind::Collection => {
                out.push_str(&format!(
                    "        public List<{}> {} {{ get; set; }} = new List<{}>();\n",
                    nav.related_type_name, nav.property_name, nav.related_type_name
                ));
            }
        }
    }

    out.push_str("    }\n");
    out.push_str("}\n");

    Ok(out)
}
