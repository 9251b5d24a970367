//! Govox generator plugin library.
//!
//! This crate provides the building blocks of a generator plugin: the
//! [`generator::PlanetGenerator`] trait the world host calls back through,
//! the gRPC service adapter in [`server`], and the [`plugin::WorldPlugin`]
//! container that wires the client and server halves together.

pub mod generator;
pub mod plugin;
pub mod server;
