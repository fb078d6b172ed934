//! Synchronous client for the **Energi Data Service** open-data API.
//!
//! The API is a CKAN instance: every endpoint answers with a `{ success, result }`
//! envelope, and `/datastore_search_sql` runs a raw SQL statement against the
//! hosted datasets. Each method here performs exactly one blocking GET.
//!
//! ### Notes
//! - Only `200 OK` counts as success. Any other status, including other 2xx codes,
//!   becomes [`Error::Status`] whose message is the status line (`"404 Not Found"`).
//! - The status is checked before the body is decoded.
//! - No retries, no pagination, no caching. Timeouts are the transport defaults
//!   configured in [`Client::with_base_url`].
//!
//! Typical usage:
//! ```no_run
//! # use energidataservice::Client;
//! let client = Client::new();
//! let datasets = client.packages()?;
//! let tag = client.tag_info("energy")?;
//! # Ok::<(), energidataservice::Error>(())
//! ```
use crate::error::{Error, Result};
use crate::models::{SqlResult, StringListEnvelope, TagInfo, TagInfoEnvelope};
use crate::queries::EMISSIONS_SQL;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::ACCEPT;
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::io::Write;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.energidataservice.dk";

#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl Client {
    /// Client bound to [`DEFAULT_BASE_URL`]. No network activity happens here.
    pub fn new() -> Self {
        Self::default()
    }

    /// Client bound to another API root (a mirror, or a local mock server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("energidataservice/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Dataset categories (`/group_list`).
    pub fn categories(&self) -> Result<Vec<String>> {
        self.string_list("/group_list")
    }

    /// All tags (`/tag_list`).
    pub fn tags(&self) -> Result<Vec<String>> {
        self.string_list("/tag_list")
    }

    /// Metadata of a single tag (`/tag_show?id=...`).
    ///
    /// `id` is forwarded as-is; an unknown id surfaces whatever the API answers
    /// (usually `404 Not Found`).
    pub fn tag_info(&self, id: &str) -> Result<TagInfo> {
        let envelope: TagInfoEnvelope = self.get_json("/tag_show", &[("id", id)])?;
        Ok(envelope.result)
    }

    /// Publishing organizations (`/organization_list`).
    pub fn organizations(&self) -> Result<Vec<String>> {
        self.string_list("/organization_list")
    }

    /// Dataset (package) names (`/package_list`).
    pub fn packages(&self) -> Result<Vec<String>> {
        self.string_list("/package_list")
    }

    /// Run a SQL statement through `/datastore_search_sql` and decode the whole
    /// response body into `T`.
    ///
    /// The statement is sent verbatim as the `sql` query parameter. Use
    /// [`serde_json::Value`] for an untyped result, or [`SqlResult`] when the row
    /// shape is known.
    ///
    /// ### Example
    /// ```no_run
    /// # use energidataservice::Client;
    /// let client = Client::new();
    /// let v: serde_json::Value =
    ///     client.datastore_sql(r#"SELECT "PriceArea" FROM "co2emisprog" LIMIT 1"#)?;
    /// # Ok::<(), energidataservice::Error>(())
    /// ```
    pub fn datastore_sql<T: DeserializeOwned>(&self, sql: &str) -> Result<T> {
        self.get_json("/datastore_search_sql", &[("sql", sql)])
    }

    /// Like [`Client::datastore_sql`], but unwraps the envelope down to the rows.
    pub fn datastore_records<T: DeserializeOwned>(&self, sql: &str) -> Result<Vec<T>> {
        let res: SqlResult<T> = self.datastore_sql(sql)?;
        Ok(res.result.records)
    }

    /// Print the hourly CO2 emission prognosis for the next six hours to stdout.
    ///
    /// `region`, `from` and `to` are currently not used: the statement is fixed to
    /// price area `DK1` and a window starting at the server's current time.
    pub fn emissions(&self, region: &str, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<()> {
        let stdout = std::io::stdout();
        self.emissions_to(region, from, to, &mut stdout.lock())
    }

    /// [`Client::emissions`] writing pretty JSON to `out` instead of stdout.
    pub fn emissions_to<W: Write>(
        &self,
        _region: &str,
        _from: DateTime<Utc>,
        _to: DateTime<Utc>,
        out: &mut W,
    ) -> Result<()> {
        let res: Value = self.datastore_sql(EMISSIONS_SQL)?;
        let text = serde_json::to_string_pretty(&res)?;
        writeln!(out, "{}", text)?;
        Ok(())
    }

    fn string_list(&self, path: &str) -> Result<Vec<String>> {
        let envelope: StringListEnvelope = self.get_json(path, &[])?;
        Ok(envelope.result)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} ({} query param(s))", url, query.len());

        let resp = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(query)
            .send()?;

        let status = resp.status();
        debug!("GET {} -> {}", path, status);
        if status != StatusCode::OK {
            warn!("{} answered {}", path, status);
            return Err(Error::Status(status));
        }

        let body = resp.bytes()?;
        Ok(serde_json::from_slice(&body)?)
    }
}
