pub mod common;
pub mod dashboard;
pub mod device_profile;
pub mod expiry;
pub mod fridge_item;
pub mod local_store;
pub mod recipe;
