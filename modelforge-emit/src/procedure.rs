//! Procedure model emitter.
//!
//! Renders the result class (when the procedure has result columns) and the
//! parameters class (when it has parameters) as siblings in one artifact. The
//! two are independently gated; the artifact exists whenever at least one class
//! does.

use modelforge_schema::model::{ProcedureModel, PropertyModel};

use crate::error::{EmitError, EmitResult};

fn push_class(out: &mut String, class_name: &str, properties: &[PropertyModel]) {
    out.push_str(&format!("    public class {}\n", class_name));
    out.push_str("    {\n");
    for property in properties {
        out.push_str(&format!(
            "        public {} {} {{ get; set; }}\n",
            property.ty.render(),
            property.name
        ));
        out.push('\n');
    }
    out.push_str("    }\n");
}

/// Render the result/parameters artifact for one stored procedure.
pub fn render(procedure: &ProcedureModel, namespace: &str) -> EmitResult<String> {
    if procedure.class_name.is_empty() {
        return Err(EmitError::malformed(
            &procedure.procedure_name,
            "procedure name normalizes to an empty class name",
        ));
    }

    let mut out = String::new();
    out.push_str(&format!("namespace {}\n", namespace));
    out.push_str("{\n");

    if procedure.has_result() {
        push_class(&mut out, &procedure.class_name, &procedure.result_properties);
    }

    if let Some(ref params_class) = procedure.params_class_name {
        push_class(&mut out, params_class, &procedure.parameter_properties);
    }

    out.push_str("}\n");
    Ok(out)
}
