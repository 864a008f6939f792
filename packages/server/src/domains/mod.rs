// Business domains
pub mod suitability;
