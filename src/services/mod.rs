pub mod browse;
pub mod enrichment;
pub mod generator;
pub mod prompt;
pub mod providers;
pub mod recommendations;
pub mod title_search;

pub use generator::RecommendationGenerator;
