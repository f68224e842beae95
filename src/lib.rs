pub mod config;
pub mod detection;
pub mod models;
pub mod pipeline;

pub use config::{CleanupConfig, ColorReference, DetectionConfig};
pub use models::{Centroid, ColorDetections, DetectionReport, Region};
pub use detection::Detector;
pub use pipeline::{
    Pipeline, PipelineData, PipelineStep, PipelineContext,
    BoundingBox, MetadataValue, DebugConfig
};
