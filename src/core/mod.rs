pub mod attendance;
pub mod export;
pub mod log;
pub mod resolver;
