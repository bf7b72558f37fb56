pub mod entities;
pub mod ports;

pub use entities::LocalSlot;
pub use ports::LocalStore;
