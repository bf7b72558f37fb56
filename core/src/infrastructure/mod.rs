pub mod db;
pub mod llm;
pub mod local_store;
pub mod platform;
pub mod row_store;
