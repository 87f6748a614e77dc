pub mod config;
pub mod logging;

pub mod batch;
pub mod checksum;
pub mod fetch;
pub mod retry;
pub mod storage;
pub mod url_list;
pub mod url_model;
