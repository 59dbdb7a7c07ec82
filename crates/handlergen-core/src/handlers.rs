//! Handler enumeration.
//!
//! Turns every (resource, method) pair of a [`DiscoveryDocument`] into a
//! [`HandlerDescriptor`] carrying the route path, the HTTP verb and the
//! identifier used to name the generated handler type. The returned list is
//! sorted by identifier so generated output is reproducible.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::discovery::DiscoveryDocument;
use crate::utils::{capitalize_first, ensure_leading_slash};
use crate::Error;

/// Route and naming information for one generated handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerDescriptor {
    /// Route path, always starting with `/`
    pub path: String,
    /// HTTP verb as written in the discovery document
    pub http_method: String,
    /// Resource name followed by the capitalized method name (e.g. `jobsInsert`)
    pub identifier: String,
}

impl HandlerDescriptor {
    /// Name of the generated handler type
    pub fn type_name(&self) -> String {
        format!("{}Handler", self.identifier)
    }
}

/// Build the identifier for `method` of `resource`.
///
/// Only the first character of the method name is uppercased; the resource
/// name is kept exactly as it appears in the document.
pub fn handler_identifier(resource: &str, method: &str) -> String {
    format!("{}{}", resource, capitalize_first(method))
}

/// Enumerate handler descriptors for every method in `doc`, sorted by identifier.
///
/// Fails with [`Error::Decode`] when a method name is empty or two methods map
/// to the same identifier.
pub fn enumerate(doc: &DiscoveryDocument) -> crate::Result<Vec<HandlerDescriptor>> {
    let mut descriptors = Vec::with_capacity(doc.method_count());

    for (resource_name, resource) in &doc.resources {
        for (method_name, method) in &resource.methods {
            if method_name.is_empty() {
                return Err(Error::decode(format!(
                    "resource '{}' declares a method with an empty name",
                    resource_name
                )));
            }

            let descriptor = HandlerDescriptor {
                path: ensure_leading_slash(method.resolved_path()),
                http_method: method.http_method.clone(),
                identifier: handler_identifier(resource_name, method_name),
            };
            log::debug!(
                "{} {} -> {}",
                descriptor.http_method,
                descriptor.path,
                descriptor.identifier
            );
            descriptors.push(descriptor);
        }
    }

    descriptors.sort_by(|a, b| a.identifier.cmp(&b.identifier));

    let mut seen = BTreeSet::new();
    for descriptor in &descriptors {
        if !seen.insert(descriptor.identifier.as_str()) {
            return Err(Error::decode(format!(
                "duplicate handler identifier '{}'",
                descriptor.identifier
            )));
        }
    }

    Ok(descriptors)
}
