pub mod types;
pub mod config;
pub mod error;
pub mod game;
pub mod evaluation;
pub mod search;
pub mod logger_extensions;


pub use types::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use evaluation::*;
pub use search::*;
pub use logger_extensions::AILoggerExtensions;
