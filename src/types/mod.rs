mod project;
mod server;
mod version;

pub use project::{sort_by_name, Project, ProjectUpdate};
pub use server::ServerAddr;
pub use version::ServerVersion;
