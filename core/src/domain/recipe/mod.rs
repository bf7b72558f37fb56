pub mod entities;
pub mod errors;
pub mod parser;
pub mod ports;
pub mod prompt;
pub mod services;

pub use entities::*;
pub use errors::*;
pub use ports::*;
