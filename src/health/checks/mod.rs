//! Built-in checks

pub mod nfs_client;

pub use nfs_client::NfsClientCheck;
