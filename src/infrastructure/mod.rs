pub mod artifacts;
pub mod dataset;

pub use artifacts::FileArtifactSource;
