//! WorldClient: gRPC client for the world host's Govox service

use crate::error::WorldError;
use govox_proto::govox_client::GovoxClient;
use govox_proto::{
    Cell, CellIndex, Chunk, ChunkIndex, GetChunkRequest, GetPlanetGeometryRequest,
    GetPlanetsRequest, Material, PlanetGeometry, PlanetSpec, SendTextRequest,
    SetCellMaterialRequest,
};
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info};

/// A connected client for a Govox world host.
///
/// This struct is cheaply cloneable (internally uses Arc via tonic's Channel).
/// The connection is established eagerly in [`WorldClient::connect`]; a host
/// that cannot be reached surfaces as an error there rather than on the
/// first call.
///
/// # Example
///
/// ```rust,no_run
/// use govox_connect::WorldClient;
///
/// # async fn example() -> Result<(), govox_connect::WorldError> {
/// let world = WorldClient::connect("http://localhost:50051").await?;
/// for planet in world.get_planets().await? {
///     println!("{} ({})", planet.name, planet.generator_type);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct WorldClient {
    /// The gRPC client (cheap to clone due to Arc internally)
    client: GovoxClient<Channel>,

    /// Address of the world host, kept for diagnostics
    addr: String,
}

impl WorldClient {
    /// Connects to a world host at the given address (e.g.
    /// `http://localhost:50051`).
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ConnectionFailed`] if the address is invalid or
    /// the host is unreachable. There is no retry; callers decide what a
    /// failed connection means.
    pub async fn connect(addr: impl Into<String>) -> Result<Self, WorldError> {
        let addr = addr.into();

        debug!("Connecting to world host at {}", addr);

        let endpoint =
            Endpoint::from_shared(addr.clone()).map_err(|e| WorldError::ConnectionFailed {
                addr: addr.clone(),
                reason: format!("Invalid endpoint: {}", e),
            })?;

        let channel = endpoint
            .connect()
            .await
            .map_err(|e| WorldError::ConnectionFailed {
                addr: addr.clone(),
                reason: format!("Connection failed: {}", e),
            })?;

        info!("Connected to world host at {}", addr);

        Ok(Self {
            client: GovoxClient::new(channel),
            addr,
        })
    }

    /// Address of the world host this client is connected to.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Lists every planet the world host knows about.
    ///
    /// The returned specs are forwarded verbatim; this client does not
    /// interpret them.
    pub async fn get_planets(&self) -> Result<Vec<PlanetSpec>, WorldError> {
        let response = self.client.clone().get_planets(GetPlanetsRequest {}).await?;

        let planets = response.into_inner().planets;
        debug!("World host at {} reports {} planets", self.addr, planets.len());

        Ok(planets)
    }

    /// Fetches one chunk of a planet.
    pub async fn get_chunk(&self, planet: i64, index: ChunkIndex) -> Result<Chunk, WorldError> {
        let request = GetChunkRequest {
            planet,
            index: Some(index),
        };

        let response = self.client.clone().get_chunk(request).await?;

        response
            .into_inner()
            .chunk
            .ok_or(WorldError::MissingPayload("chunk"))
    }

    /// Fetches the low-resolution geometry of a planet.
    pub async fn get_planet_geometry(&self, planet: i64) -> Result<PlanetGeometry, WorldError> {
        let request = GetPlanetGeometryRequest { planet };

        let response = self.client.clone().get_planet_geometry(request).await?;

        response
            .into_inner()
            .geometry
            .ok_or(WorldError::MissingPayload("geometry"))
    }

    /// Overwrites the material of a single cell on the world host.
    pub async fn set_cell_material(
        &self,
        planet: i64,
        index: CellIndex,
        material: Material,
    ) -> Result<(), WorldError> {
        let request = SetCellMaterialRequest {
            planet,
            index: Some(index),
            cell: Some(Cell {
                material: material as i32,
            }),
        };

        self.client.clone().set_cell_material(request).await?;

        Ok(())
    }

    /// Broadcasts a chat line to every connected player.
    pub async fn send_text(&self, text: impl Into<String>) -> Result<(), WorldError> {
        let request = SendTextRequest { text: text.into() };

        self.client.clone().send_text(request).await?;

        Ok(())
    }
}
