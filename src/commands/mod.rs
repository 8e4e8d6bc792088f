pub mod annotate;
pub mod init;
pub mod label;
