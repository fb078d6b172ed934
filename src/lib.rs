//! energidataservice
//!
//! A lightweight Rust client for the Energi Data Service open-data API
//! (<https://api.energidataservice.dk>), Denmark's public energy market and grid
//! data portal. Pairs with the `eds` CLI.
//!
//! ### Features
//! - List categories, tags, organizations and datasets (packages)
//! - Look up tag metadata
//! - Run SQL against the hosted datastore, decoded into your own types or `serde_json::Value`
//! - Hourly CO2 emission prognosis for the next six hours
//! - Save results as CSV or JSON
//!
//! ### Example
//! ```no_run
//! use energidataservice::Client;
//!
//! let client = Client::new();
//! let packages = client.packages()?;
//! energidataservice::storage::save_list_csv(&packages, "package", "packages.csv")?;
//! let rows: Vec<serde_json::Value> =
//!     client.datastore_records(r#"SELECT * FROM "co2emisprog" LIMIT 5"#)?;
//! println!("{:#?}", rows);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod queries;
pub mod storage;

pub use api::{Client, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use models::{SqlField, SqlResult, StringListEnvelope, TagInfo};
