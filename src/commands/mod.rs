//! Command implementations

mod build;
mod check;
mod clean;
mod init;

pub use build::build;
pub use check::check;
pub use clean::clean;
pub use init::init;
