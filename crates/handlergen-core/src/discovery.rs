//! Discovery document loading.
//!
//! A discovery document describes an API as a tree of resources, each holding
//! named methods with an HTTP verb and a path template. Only the parts of the
//! document needed for handler scaffolding are modelled; unknown fields are
//! ignored and missing ones default to empty.
//!
//! # Examples
//!
//! ```
//! use handlergen_core::discovery::DiscoveryDocument;
//!
//! let doc = DiscoveryDocument::from_slice(br#"{
//!     "resources": {
//!         "widgets": {
//!             "methods": {
//!                 "list": { "httpMethod": "GET", "path": "widgets" }
//!             }
//!         }
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(doc.resources["widgets"].methods["list"].http_method, "GET");
//! ```

// Internal imports (std, crate)
use std::collections::BTreeMap;
use std::path::Path;

// External imports (alphabetized)
use serde::{Deserialize, Deserializer, Serialize};

/// The discovery document compiled into the generator.
static BUNDLED_DOCUMENT: &[u8] = include_bytes!("../resources/bigquery-api.json");

/// Root of a loaded discovery document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryDocument {
    /// API name (e.g. "bigquery")
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// API version (e.g. "v2")
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,

    /// Human-readable title
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Resources keyed by name
    #[serde(default, deserialize_with = "null_as_default")]
    pub resources: BTreeMap<String, Resource>,
}

/// A named group of methods
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub methods: BTreeMap<String, Method>,
}

/// A single API method
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Method {
    /// HTTP verb, e.g. "GET"
    #[serde(rename = "httpMethod", default, deserialize_with = "null_as_default")]
    pub http_method: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: BTreeMap<String, Parameter>,

    /// Primary path template, possibly containing `{+param}` expansions
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,

    /// Path template without reserved expansions; preferred when present
    #[serde(rename = "flatPath", default)]
    pub flat_path: Option<String>,

    /// OAuth scopes required to call the method
    #[serde(default, alias = "scope", deserialize_with = "null_as_default")]
    pub scopes: Vec<String>,
}

/// A method parameter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub type_: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,
}

/// Decode an explicit `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl DiscoveryDocument {
    /// Decode a discovery document from raw JSON bytes
    pub fn from_slice(bytes: &[u8]) -> crate::Result<Self> {
        let doc: Self = serde_json::from_slice(bytes)?;
        log::debug!(
            "Decoded discovery document '{}' {} with {} resources",
            doc.name,
            doc.version,
            doc.resources.len()
        );
        Ok(doc)
    }

    /// Decode the document bundled into the generator at build time
    pub fn bundled() -> crate::Result<Self> {
        Self::from_slice(BUNDLED_DOCUMENT)
            .map_err(|e| crate::Error::decode(format!("bundled discovery document: {}", e)))
    }

    /// Load a discovery document from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        Self::from_slice(&bytes).map_err(|e| {
            crate::Error::decode(format!(
                "Failed to parse discovery document at {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Total number of methods across all resources
    pub fn method_count(&self) -> usize {
        self.resources.values().map(|r| r.methods.len()).sum()
    }
}

impl Method {
    /// The flattened path when present and non-empty, otherwise the primary path
    pub fn resolved_path(&self) -> &str {
        match self.flat_path.as_deref() {
            Some(flat) if !flat.is_empty() => flat,
            _ => &self.path,
        }
    }
}
