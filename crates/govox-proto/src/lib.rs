/// Generated gRPC protocol definitions for the Govox voxel world.
///
/// This crate provides the protocol buffer definitions and generated code
/// for communication between the world host and generator plugins.
pub mod govox {
    pub mod v1 {
        tonic::include_proto!("govox.v1");
    }
}

/// Encoded file descriptor set, used to register server reflection.
pub const FILE_DESCRIPTOR_SET: &[u8] =
    tonic::include_file_descriptor_set!("govox_descriptor");

// Re-export commonly used types for convenience
pub use govox::v1::*;
