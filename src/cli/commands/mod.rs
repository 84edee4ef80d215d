pub mod config;
pub mod init;
pub mod schedule;
pub mod session;
