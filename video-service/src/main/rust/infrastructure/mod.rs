pub mod http;
pub mod id;
pub mod repository;
pub mod storage;
