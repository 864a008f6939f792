pub mod form_record;

pub use form_record::*;
