// HTTP routes
pub mod analyze;
pub mod forms;
pub mod health;

pub use analyze::*;
pub use forms::*;
pub use health::*;
