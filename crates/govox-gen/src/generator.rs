//! Generator implementations for the plugin.

use govox_proto::{CellLoc, Material};

/// The callback seam a plugin implements so the world host can ask what
/// material belongs at a cell.
///
/// Implementations must be stateless or internally synchronized: the server
/// dispatches concurrent queries against a shared instance.
pub trait PlanetGenerator: Send + Sync {
    /// Returns the material occupying the cell at `loc` on `planet`.
    fn cell_material(&self, planet: i64, loc: CellLoc) -> Material;
}

/// A generator that fills every cell of every planet with one material.
///
/// This is deliberately the whole algorithm: the coordinates are ignored.
/// It exists as the smallest possible generator a plugin can register,
/// useful for testing a world host's plugin wiring.
pub struct SolidGenerator {
    material: Material,
}

impl SolidGenerator {
    /// Creates a generator that answers every query with `material`.
    pub fn new(material: Material) -> Self {
        Self { material }
    }

    /// The material this generator answers with.
    pub fn material(&self) -> Material {
        self.material
    }
}

impl Default for SolidGenerator {
    fn default() -> Self {
        Self::new(Material::Stone)
    }
}

impl PlanetGenerator for SolidGenerator {
    fn cell_material(&self, _planet: i64, _loc: CellLoc) -> Material {
        self.material
    }
}

/// Looks up a material by its schema name, case-insensitively
/// (e.g. `"stone"`, `"BLUE_SAND"`).
pub fn material_from_name(name: &str) -> Option<Material> {
    Material::from_str_name(&name.to_ascii_uppercase())
}
