use indexmap::IndexMap;
use serde::Deserialize;
use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::host::{Surface, Viewport};

/// Surfaces addressable by identifier, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceRegistry {
    surfaces: IndexMap<String, Surface>,
}

#[derive(Debug, Deserialize)]
struct HostLayout {
    surfaces: Vec<SurfaceEntry>,
}

#[derive(Debug, Deserialize)]
struct SurfaceEntry {
    id: String,
    width: u32,
    height: u32,
}

impl SurfaceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.insert(surface);
        self
    }

    /// Adds or replaces a surface, returning the one previously stored under the same id.
    pub fn insert(&mut self, surface: Surface) -> Option<Surface> {
        trace!(surface_id = %surface.id, "register surface");
        self.surfaces.insert(surface.id.clone(), surface)
    }

    /// Looks up a surface by identifier.
    pub fn resolve(&self, surface_id: &str) -> ChartResult<Surface> {
        self.surfaces
            .get(surface_id)
            .cloned()
            .ok_or_else(|| ChartError::SurfaceNotFound {
                surface_id: surface_id.to_owned(),
            })
    }

    #[must_use]
    pub fn contains(&self, surface_id: &str) -> bool {
        self.surfaces.contains_key(surface_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Surface> {
        self.surfaces.values()
    }

    /// Reads a host layout of the form `{"surfaces":[{"id":..,"width":..,"height":..}]}`.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let layout: HostLayout = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse host layout json: {e}"))
        })?;

        let mut registry = Self::new();
        for entry in layout.surfaces {
            let viewport = Viewport::new(entry.width, entry.height);
            if !viewport.is_valid() {
                return Err(ChartError::InvalidViewport {
                    width: entry.width,
                    height: entry.height,
                });
            }
            if registry.contains(&entry.id) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate surface id `{}` in host layout",
                    entry.id
                )));
            }
            registry.insert(Surface::new(entry.id, viewport));
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::SurfaceRegistry;
    use crate::error::ChartError;
    use crate::host::{Surface, Viewport};

    #[test]
    fn insert_replaces_and_keeps_order() {
        let mut registry = SurfaceRegistry::new()
            .with_surface(Surface::new("b", Viewport::new(10, 10)))
            .with_surface(Surface::new("a", Viewport::new(10, 10)));
        let previous = registry.insert(Surface::new("b", Viewport::new(20, 20)));

        assert_eq!(previous.map(|s| s.viewport.width), Some(10));
        let ids: Vec<&str> = registry.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(registry.resolve("b").expect("b").viewport.width, 20);
    }

    #[test]
    fn missing_surface_reports_identifier() {
        let err = SurfaceRegistry::new().resolve("nope").expect_err("missing");
        assert!(matches!(
            err,
            ChartError::SurfaceNotFound { ref surface_id } if surface_id == "nope"
        ));
    }

    #[test]
    fn layout_json_rejects_zero_sized_and_duplicate_surfaces() {
        let zero = r#"{"surfaces":[{"id":"a","width":0,"height":10}]}"#;
        assert!(matches!(
            SurfaceRegistry::from_json_str(zero),
            Err(ChartError::InvalidViewport { width: 0, height: 10 })
        ));

        let duplicate = r#"{"surfaces":[
            {"id":"a","width":5,"height":5},
            {"id":"a","width":6,"height":6}
        ]}"#;
        assert!(matches!(
            SurfaceRegistry::from_json_str(duplicate),
            Err(ChartError::InvalidData(_))
        ));
    }
}
