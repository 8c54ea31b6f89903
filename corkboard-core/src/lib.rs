pub mod controller;
pub mod storage;
pub mod types;
