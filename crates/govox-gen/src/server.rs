//! gRPC service adapter for the Generator capability.
//!
//! This module bridges the generated `Generator` service onto whatever
//! [`PlanetGenerator`] the plugin registered. The world host calls
//! `CellMaterial` here while building chunks.

use crate::generator::PlanetGenerator;
use govox_proto::generator_server::Generator;
use govox_proto::{Cell, CellMaterialRequest, CellMaterialResponse};
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::debug;

/// Serves one registered [`PlanetGenerator`] over gRPC.
pub struct GeneratorService {
    generator: Arc<dyn PlanetGenerator>,
}

impl GeneratorService {
    /// Wraps an already-constructed generator for serving.
    pub fn new(generator: Arc<dyn PlanetGenerator>) -> Self {
        Self { generator }
    }
}

#[tonic::async_trait]
impl Generator for GeneratorService {
    /// Answers a cell-material query from the world host.
    ///
    /// A request without a location is answered as if it asked about the
    /// origin; generators that ignore their input behave identically either
    /// way.
    async fn cell_material(
        &self,
        request: Request<CellMaterialRequest>,
    ) -> Result<Response<CellMaterialResponse>, Status> {
        let req = request.into_inner();
        let loc = req.loc.unwrap_or_default();

        debug!(
            "Cell material query: planet={} lon={} lat={} alt={}",
            req.planet, loc.lon, loc.lat, loc.alt
        );

        let material = self.generator.cell_material(req.planet, loc);

        Ok(Response::new(CellMaterialResponse {
            cell: Some(Cell {
                material: material as i32,
            }),
        }))
    }
}
