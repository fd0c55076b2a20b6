mod briefings;
mod profile;

pub use briefings::BriefingRepository;
pub use profile::ProfileRepository;
