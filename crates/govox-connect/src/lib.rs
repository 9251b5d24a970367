//! Govox Connect: client-side gRPC connectivity for generator plugins
//!
//! This crate provides the client half of a Govox plugin: a thin wrapper
//! around the generated `Govox` stub that connects to a world host and
//! exposes its world-state operations as plain async methods.
//!
//! # Example
//!
//! ```rust,no_run
//! use govox_connect::WorldClient;
//!
//! async fn example() -> Result<(), govox_connect::WorldError> {
//!     let world = WorldClient::connect("http://localhost:50051").await?;
//!     let planets = world.get_planets().await?;
//!     println!("{planets:#?}");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod world;

pub use error::WorldError;
pub use world::WorldClient;
