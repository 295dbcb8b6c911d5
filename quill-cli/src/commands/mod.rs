//! CLI command implementations.

pub mod build;
pub mod init;
pub mod template;
pub mod watch;

pub use build::build_site;
pub use init::init_site;
pub use template::print_template;
pub use watch::watch_site;
