mod briefing;
mod profile;
mod search;

pub use briefing::*;
pub use profile::*;
pub use search::*;
