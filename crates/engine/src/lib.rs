pub mod board;
pub mod error;
pub mod types;
pub mod perft;
pub mod logger;

pub use board::*;
pub use error::*;
pub use types::*;
pub use perft::*;
pub use logger::ChessLogger;
