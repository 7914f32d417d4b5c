
pub mod languages;
