mod byte_scan;
mod normalize;
mod pipeline;
mod quality;
mod structured;

pub use byte_scan::ByteScanExtractor;
pub use normalize::normalize;
pub use pipeline::ExtractionPipeline;
pub use quality::QualityAssessor;
pub use structured::StructuredExtractor;
