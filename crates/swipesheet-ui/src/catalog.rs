//! Item lookup for the overlay.

use serde::Deserialize;

use crate::error::OverlayError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub artwork: Option<String>,
}

/// Keyed read-only store. `first` is the fallback entry, so implementors must
/// never be empty.
pub trait Catalog {
    fn find_by_id(&self, id: i64) -> Option<&Item>;
    fn first(&self) -> &Item;
}

/// Catalog backed by a vector of items.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    first: Item,
    rest: Vec<Item>,
}

#[derive(Deserialize)]
struct CatalogDocument {
    songs: Vec<Item>,
}

impl StaticCatalog {
    pub fn new(items: Vec<Item>) -> Result<Self, OverlayError> {
        let mut items = items.into_iter();
        let first = items.next().ok_or(OverlayError::EmptyCatalog)?;
        Ok(Self {
            first,
            rest: items.collect(),
        })
    }

    /// Parses `{ "songs": [ { "id": .., "title": .., "artist": .. }, .. ] }`.
    pub fn from_json(json: &str) -> Result<Self, OverlayError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.songs)
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }
}

impl Catalog for StaticCatalog {
    fn find_by_id(&self, id: i64) -> Option<&Item> {
        self.iter().find(|item| item.id == id)
    }

    fn first(&self) -> &Item {
        &self.first
    }
}

/// Identifier taken from the route. Anything that is not a base-10 integer
/// becomes 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ItemId(pub i64);

impl ItemId {
    pub fn from_route(param: Option<&str>) -> Self {
        let id = param
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(0);
        ItemId(id)
    }

    /// Routes may deliver a repeated parameter as a list; the first value
    /// wins.
    pub fn from_route_values<S: AsRef<str>>(values: &[S]) -> Self {
        Self::from_route(values.first().map(AsRef::as_ref))
    }
}

/// Looks `id` up, falling back to the catalog's first entry.
pub fn resolve_item(catalog: &dyn Catalog, id: ItemId) -> Item {
    match catalog.find_by_id(id.0) {
        Some(item) => item.clone(),
        None => {
            log::debug!("item {} not in catalog; using default entry", id.0);
            catalog.first().clone()
        }
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
