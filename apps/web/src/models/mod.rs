pub mod job_match;

pub use job_match::JobMatch;
