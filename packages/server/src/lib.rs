// Financial Suitability Form - API Core
//
// Backend for the financial suitability form: the field schema, validation,
// merge rules, and AI-assisted autofill that turns free text into form fields.
//
// Domain logic lives in domains/, infrastructure (LLM access, deps) in kernel/,
// and the HTTP surface in server/.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
