//! Finalized per-procedure model.

use serde::{Deserialize, Serialize};

use super::entity::PropertyModel;

/// The normalized representation of one stored procedure.
///
/// The result class and the parameters class are independently gated: a
/// procedure with no result columns still yields a parameters class when it has
/// parameters, and vice versa. A procedure with neither produces no model at all
/// (the assembler returns `None`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureModel {
    /// Raw procedure name.
    pub procedure_name: String,
    /// PascalCase class name for the result type.
    pub class_name: String,
    /// Result-set properties; empty means no result class is emitted.
    pub result_properties: Vec<PropertyModel>,
    /// Parameters class name (`<class_name>Params`), present iff parameters exist.
    pub params_class_name: Option<String>,
    /// Parameter properties, `@` marker already stripped from names.
    pub parameter_properties: Vec<PropertyModel>,
}

impl ProcedureModel {
    /// Whether a result class is emitted for this procedure.
    pub fn has_result(&self) -> bool {
        !self.result_properties.is_empty()
    }

    /// Whether a parameters class is emitted for this procedure.
    pub fn has_params(&self) -> bool {
        self.params_class_name.is_some()
    }
}
