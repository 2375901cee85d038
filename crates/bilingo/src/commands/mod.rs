pub mod build;
pub mod init;
pub mod outline;
pub mod page;
