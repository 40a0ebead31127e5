//! # modelforge-mssql
//!
//! Microsoft SQL Server schema provider for modelforge, built on `tiberius`
//! with `bb8` connection pooling.
//!
//! This crate provides:
//! - Connection configuration from builders or ADO.NET/URL connection strings
//! - A pooled catalog reader over the INFORMATION_SCHEMA and sys views
//! - A [`SchemaProvider`](modelforge_schema::provider::SchemaProvider)
//!   implementation consumed by the generator
//!
//! ## Example
//!
//! ```rust,ignore
//! use modelforge_mssql::{MssqlConfig, MssqlPool, MssqlSchemaProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MssqlConfig::from_connection_string(
//!         "Server=localhost;Database=shop;Trusted_Connection=True;TrustServerCertificate=True;",
//!     )?;
//!     let pool = MssqlPool::new(config).await?;
//!     let provider = MssqlSchemaProvider::new(pool);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod pool;
pub mod provider;

pub use config::{MssqlConfig, MssqlConfigBuilder};
pub use error::{MssqlError, MssqlResult};
pub use pool::{MssqlPool, PoolConfig};
pub use provider::MssqlSchemaProvider;
