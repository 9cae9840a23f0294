pub mod init;
pub mod projects;
pub mod version;
