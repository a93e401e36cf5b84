// Types representing MMML events and their musical parameters

mod duration;
mod handlers;
mod pitch;
mod types;
mod volume;

// Re-export all public symbols
pub use duration::*;
pub use handlers::*;
pub use pitch::*;
pub use types::*;
pub use volume::*;
