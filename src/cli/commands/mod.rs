pub mod attendance;
pub mod audit;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
