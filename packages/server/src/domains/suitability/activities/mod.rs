pub mod analyze;

pub use analyze::{analyze_financial_text, parse_extraction, AnalyzeError};
