pub mod ports;
pub mod services;
pub mod value_objects;

pub use ports::DashboardService;
pub use value_objects::*;
