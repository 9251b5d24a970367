//! Govox generator plugin - registers a procedural planet generator with a
//! world host.
//!
//! The plugin connects to the world host as a gRPC client, serves the
//! Generator capability back to it on a local port, and idles until
//! interrupted. The bundled generator fills every cell with one material.

use anyhow::{Context, Result};
use clap::Parser;
use govox_connect::WorldClient;
use govox_gen::generator::{material_from_name, SolidGenerator};
use govox_gen::plugin::WorldPlugin;
use govox_proto::Material;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Govox generator plugin - serves a constant-material planet generator.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// World host address to connect to
    #[arg(short, long, default_value = "http://localhost:50051")]
    world: String,

    /// Port the generator server listens on
    #[arg(short, long, default_value = "50052")]
    port: u16,

    /// Bind address (default: all interfaces)
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: String,

    /// Material the generator fills every cell with
    #[arg(short, long, default_value = "stone", value_parser = parse_material)]
    material: Material,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn parse_material(name: &str) -> Result<Material, String> {
    material_from_name(name).ok_or_else(|| {
        format!("unknown material '{name}' (try one of: air, grass, dirt, stone, water, ...)")
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize logging
    let filter = if args.debug {
        "debug,govox_gen=trace"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🪐 Govox generator plugin v{}", env!("CARGO_PKG_VERSION"));
    info!("  ✓ world host: {}", args.world);
    info!("  ✓ material:   {}", args.material.as_str_name());

    let addr = format!("{}:{}", args.bind, args.port)
        .parse()
        .context("Failed to parse bind address")?;

    let world = WorldClient::connect(args.world.clone())
        .await
        .with_context(|| format!("Failed to connect to world host at {}", args.world))?;

    let mut plugin = WorldPlugin::new(world, addr);
    plugin.add_planet_gen(Arc::new(SolidGenerator::new(args.material)));

    let planets = plugin
        .get_planets()
        .await
        .context("GetPlanets query failed")?;
    println!("{planets:#?}");

    info!("✨ Starting generator server on {}", addr);

    plugin
        .serve(shutdown_signal())
        .await
        .context("Generator server failed")?;

    info!("Generator plugin stopped");

    Ok(())
}

/// Resolves when the process receives an interrupt (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install interrupt handler");
    info!("Interrupt received");
}
