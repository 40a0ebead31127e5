//! Database context emitter.
//!
//! Renders the single context class: one set property per entity, table
//! mappings, unique indexes, and the relationship configuration chains. Runs
//! over the finalized model only; every name it prints was fixed during
//! assembly.

use modelforge_schema::assemble::SchemaModel;
use modelforge_schema::{inflect, naming};

use crate::error::{EmitError, EmitResult};

/// Render the context class artifact for the whole model.
pub fn render(model: &SchemaModel, namespace: &str, context_class: &str) -> EmitResult<String> {
    if context_class.is_empty() {
        return Err(EmitError::malformed(
            "<context>",
            "context class name is empty",
        ));
    }

    let mut out = String::new();

    out.push_str("using Microsoft.EntityFrameworkCore;\n");
    out.push('\n');
    out.push_str(&format!("namespace {}\n", namespace));
    out.push_str("{\n");
    out.push_str(&format!("    public class {} : DbContext\n", context_class));
    out.push_str("    {\n");
    out.push_str(&format!(
        "        public {}(DbContextOptions<{}> options) : base(options)\n",
        context_class, context_class
    ));
    out.push_str("        {\n");
    out.push_str("        }\n");
    out.push('\n');

    for entity in &model.entities {
        out.push_str(&format!(
            "        public DbSet<{}> {} {{ get; set; }}\n",
            entity.type_name,
            inflect::to_plural(&entity.type_name)
        ));
    }
    out.push('\n');

    out.push_str("        protected override void OnModelCreating(ModelBuilder modelBuilder)\n");
    out.push_str("        {\n");

    for entity in &model.entities {
        out.push_str(&format!(
            "            modelBuilder.Entity<{}>().ToTable(\"{}\");\n",
            entity.type_name, entity.table_name
        ));
        for column in &entity.unique_columns {
            out.push_str(&format!(
                "            modelBuilder.Entity<{}>().HasIndex(e => e.{}).IsUnique();\n",
                entity.type_name, column
            ));
        }
    }

    for rel in &model.relationships {
        let many = naming::abbreviation(&rel.fk_entity);
        let one = naming::abbreviation(&rel.pk_entity);
        out.push('\n');
        out.push_str(&format!(
            "            modelBuilder.Entity<{}>()\n",
            rel.fk_entity
        ));
        out.push_str(&format!(
            "                .HasOne({} => {}.{})\n",
            many, many, rel.scalar_name
        ));
        out.push_str(&format!(
            "                .WithMany({} => {}.{})\n",
            one, one, rel.collection_name
        ));
        out.push_str(&format!(
            "                .HasForeignKey({} => {}.{})\n",
            many, many, rel.fk_property
        ));
        out.push_str(&format!(
            "                .OnDelete(DeleteBehavior.{})\n",
            rel.delete_behavior.as_str()
        ));
        out.push_str(&format!(
            "                .HasConstraintName(\"FK_{}_{}\");\n",
            rel.fk_table, rel.pk_table
        ));
    }

    out.push_str("        }\n");
    out.push_str("    }\n");
    out.push_str("}\n");

    Ok(out)
}
