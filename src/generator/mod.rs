mod parser;
mod pipeline;

pub use parser::parse_briefing_content;
pub use pipeline::{
    GenerationOutcome, GenerationPipeline, ALREADY_IN_PROGRESS, PROFILE_NOT_CONFIGURED,
};
