pub mod entities;
pub mod ports;
pub mod services;

pub use entities::DeviceProfile;
pub use ports::ProfileService;
