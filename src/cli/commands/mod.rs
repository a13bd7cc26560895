pub mod classes;
pub mod config;
pub mod init;
pub mod session;
