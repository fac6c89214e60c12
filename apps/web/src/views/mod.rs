pub mod index;
pub mod results;

pub use results::PageChrome;
