//! WorldPlugin: the container tying the client and server halves together.
//!
//! A plugin process plays two roles at once: it is a *client* of the world
//! host (to query world state) and a *server* the world host calls back
//! into (to generate terrain). `WorldPlugin` owns both, constructed
//! explicitly and passed around rather than living in shared global state.

use crate::generator::PlanetGenerator;
use crate::server::GeneratorService;
use govox_connect::{WorldClient, WorldError};
use govox_proto::generator_server::GeneratorServer;
use govox_proto::PlanetSpec;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tonic::transport::Server;
use tracing::info;

/// Upper bound on in-flight handler invocations per world-host connection.
/// Generator queries are independent, so this is plain admission control.
const MAX_CONCURRENT_CALLS: usize = 10;

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("gRPC transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("Failed to build reflection service: {0}")]
    Reflection(#[from] tonic_reflection::server::Error),

    #[error(transparent)]
    World(#[from] WorldError),
}

/// A generator plugin attached to one world host.
///
/// # Example
///
/// ```rust,no_run
/// use govox_connect::WorldClient;
/// use govox_gen::generator::SolidGenerator;
/// use govox_gen::plugin::WorldPlugin;
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let world = WorldClient::connect("http://localhost:50051").await?;
/// let mut plugin = WorldPlugin::new(world, "0.0.0.0:50052".parse()?);
///
/// plugin.add_planet_gen(Arc::new(SolidGenerator::default()));
///
/// println!("{:#?}", plugin.get_planets().await?);
/// plugin
///     .serve(async {
///         let _ = tokio::signal::ctrl_c().await;
///     })
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct WorldPlugin {
    world: WorldClient,
    listen: SocketAddr,
    generators: Vec<Arc<dyn PlanetGenerator>>,
}

impl WorldPlugin {
    /// Creates a plugin from an already-connected world client and the
    /// address the generator server will listen on.
    pub fn new(world: WorldClient, listen: SocketAddr) -> Self {
        Self {
            world,
            listen,
            generators: Vec::new(),
        }
    }

    /// Registers an already-constructed generator.
    ///
    /// Registration is only possible before [`WorldPlugin::serve`], which
    /// consumes the plugin. Each registered generator is exposed as its own
    /// service; registering more than one leaves route collisions to the
    /// transport's own rules.
    pub fn add_planet_gen(&mut self, generator: Arc<dyn PlanetGenerator>) {
        info!("Registered planet generator ({} total)", self.generators.len() + 1);
        self.generators.push(generator);
    }

    /// Number of registered generators.
    pub fn generator_count(&self) -> usize {
        self.generators.len()
    }

    /// Address the generator server will bind.
    pub fn listen_addr(&self) -> SocketAddr {
        self.listen
    }

    /// Lists the world host's planets, verbatim.
    pub async fn get_planets(&self) -> Result<Vec<PlanetSpec>, PluginError> {
        Ok(self.world.get_planets().await?)
    }

    /// The world client this plugin was constructed with.
    pub fn world(&self) -> &WorldClient {
        &self.world
    }

    /// Binds the listen address and serves every registered generator until
    /// `shutdown` resolves.
    ///
    /// Shutdown is immediate: the serving future is dropped as soon as the
    /// signal fires, without draining requests already in flight.
    pub async fn serve<F>(self, shutdown: F) -> Result<(), PluginError>
    where
        F: Future<Output = ()> + Send,
    {
        let reflection = tonic_reflection::server::Builder::configure()
            .register_encoded_file_descriptor_set(govox_proto::FILE_DESCRIPTOR_SET)
            .build_v1()?;

        let mut router = Server::builder()
            .concurrency_limit_per_connection(MAX_CONCURRENT_CALLS)
            .add_service(reflection);

        for generator in self.generators {
            router = router.add_service(GeneratorServer::new(GeneratorService::new(generator)));
        }

        info!("Generator server listening on {}", self.listen);

        tokio::select! {
            result = router.serve(self.listen) => result?,
            _ = shutdown => {
                info!("Shutdown signal received, stopping generator server");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SolidGenerator;

    // Construction-level checks live here; end-to-end serving is covered by
    // the integration tests.

    async fn offline_world() -> WorldClient {
        // A plugin can be assembled before its world host answers queries,
        // so these tests only need an endpoint that accepts a connection.
        // A reflection-only server is the smallest one available here.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let reflection = tonic_reflection::server::Builder::configure()
            .register_encoded_file_descriptor_set(govox_proto::FILE_DESCRIPTOR_SET)
            .build_v1()
            .unwrap();

        tokio::spawn(async move {
            Server::builder()
                .add_service(reflection)
                .serve_with_incoming(tokio_stream::wrappers::TcpListenerStream::new(listener))
                .await
                .unwrap();
        });

        WorldClient::connect(format!("http://{}", addr)).await.unwrap()
    }

    #[tokio::test]
    async fn test_registration_counts() {
        let world = offline_world().await;
        let mut plugin = WorldPlugin::new(world, "127.0.0.1:50052".parse().unwrap());

        assert_eq!(plugin.generator_count(), 0);

        plugin.add_planet_gen(Arc::new(SolidGenerator::default()));
        plugin.add_planet_gen(Arc::new(SolidGenerator::default()));

        assert_eq!(plugin.generator_count(), 2);
    }

    #[tokio::test]
    async fn test_listen_addr_is_kept() {
        let world = offline_world().await;
        let addr: SocketAddr = "0.0.0.0:50052".parse().unwrap();
        let plugin = WorldPlugin::new(world, addr);

        assert_eq!(plugin.listen_addr(), addr);
    }
}
