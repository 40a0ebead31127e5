//! modelforge CLI - scaffold EF Core model classes from a live SQL Server
//! schema.
//!
//! This crate provides the `modelforge` binary: project initialization and the
//! generation run that reads the database catalog and writes one C# file per
//! table, procedure, and context.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
