//! Manifest wire types.
//!
//! The manifest is `{ "pages": { "<route>": { "content": "<html>" }, ... } }`.
//! Navigation order is the key order of the `pages` object as it appears in
//! the document, so `pages` is decoded straight into a `Vec` by a streaming
//! map visitor rather than through a hash map.
//!
//! A key repeated in the document keeps its first position and its last
//! value, the same result a JavaScript object literal would give.

#[cfg(test)]
#[path = "manifest_test.rs"]
mod manifest_test;

use std::fmt;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

use crate::error::SiteError;

/// One page of the site.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Page {
    /// Pre-rendered HTML fragment.
    pub content: String,
    /// Route key echoed by the content builder; not used for lookup.
    #[serde(default)]
    pub route: Option<String>,
    /// Front-matter metadata emitted by the content builder.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl Page {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }
}

/// Ordered route -> page mapping, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Manifest {
    #[serde(deserialize_with = "ordered_pages")]
    pages: Vec<(String, Page)>,
}

impl Manifest {
    /// Decode a manifest document.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::ManifestParse`] for malformed JSON or a document
    /// without a `pages` object.
    pub fn from_json(body: &str) -> Result<Self, SiteError> {
        serde_json::from_str(body).map_err(|e| SiteError::ManifestParse(e.to_string()))
    }

    /// Build a manifest from `(route, page)` pairs, keeping their order.
    #[must_use]
    pub fn from_pages<I, K>(pages: I) -> Self
    where
        I: IntoIterator<Item = (K, Page)>,
        K: Into<String>,
    {
        let mut manifest = Self::default();
        for (route, page) in pages {
            manifest.insert(route.into(), page);
        }
        manifest
    }

    #[must_use]
    pub fn get(&self, route: &str) -> Option<&Page> {
        self.pages
            .iter()
            .find(|(key, _)| key == route)
            .map(|(_, page)| page)
    }

    #[must_use]
    pub fn contains(&self, route: &str) -> bool {
        self.get(route).is_some()
    }

    /// Route keys in navigation order.
    pub fn routes(&self) -> impl Iterator<Item = &str> + '_ {
        self.pages.iter().map(|(key, _)| key.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn insert(&mut self, route: String, page: Page) {
        match self.pages.iter_mut().find(|(key, _)| *key == route) {
            Some(slot) => slot.1 = page,
            None => self.pages.push((route, page)),
        }
    }
}

fn ordered_pages<'de, D>(deserializer: D) -> Result<Vec<(String, Page)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PagesVisitor;

    impl<'de> Visitor<'de> for PagesVisitor {
        type Value = Vec<(String, Page)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an object mapping route keys to pages")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let capacity = map.size_hint().unwrap_or(0);
            let mut manifest = Manifest {
                pages: Vec::with_capacity(capacity),
            };
            while let Some((route, page)) = map.next_entry::<String, Page>()? {
                manifest.insert(route, page);
            }
            Ok(manifest.pages)
        }
    }

    deserializer.deserialize_map(PagesVisitor)
}
