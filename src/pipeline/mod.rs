// Resolution pipeline - vocabulary items in, resolved records out

mod resolution;

pub use resolution::{PipelineOutcome, ResolutionPipeline, ResolvedRecord};
