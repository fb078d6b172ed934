use serde::{Deserialize, Deserializer, Serialize};

/// `{ "success": ..., "result": [...] }` returned by the `*_list` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringListEnvelope {
    pub success: bool,
    pub result: Vec<String>,
}

/// Metadata for one tag / vocabulary term (`/tag_show`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    /// Free tags carry `"vocabulary_id": null`; normalized to an empty string.
    #[serde(default, deserialize_with = "de_string_or_null")]
    pub vocabulary_id: String,
    pub display_name: String,
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfoEnvelope {
    pub success: bool,
    pub result: TagInfo,
}

/// Envelope of `/datastore_search_sql`, typed over the row shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqlResult<T> {
    pub success: bool,
    pub result: SqlRows<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqlRows<T> {
    pub records: Vec<T>,
    #[serde(default)]
    pub fields: Vec<SqlField>,
    /// Echo of the executed statement.
    #[serde(default)]
    pub sql: String,
}

/// Column description (`{"id": "PriceArea", "type": "text"}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlField {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

fn de_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
