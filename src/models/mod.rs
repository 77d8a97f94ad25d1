pub mod generation;
pub mod prompt;
pub mod retry;

pub use generation::*;
pub use prompt::*;
pub use retry::*;
