mod config;
mod jar;
mod manifest;
mod resolve;
mod resources;

pub use config::ConfigArgs;
pub use config::handle_config;
pub use jar::JarArgs;
pub use jar::handle_jar;
pub use manifest::ManifestArgs;
pub use manifest::PLUGIN_MANIFEST_FILE;
pub use manifest::handle_manifest;
pub use manifest::write_plugin_manifest;
pub use resolve::ResolveArgs;
pub use resolve::handle_resolve;
pub use resources::ResourcesArgs;
pub use resources::handle_resources;
pub use resources::process_resources;
