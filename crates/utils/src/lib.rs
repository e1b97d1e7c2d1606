mod collect_files;
mod expand_template;
mod get_build_properties;
mod get_project_config;
mod get_relative_path;

pub use collect_files::collect_files;
pub use expand_template::expand_template;
pub use get_build_properties::{GRADLE_ENV_PREFIX, get_build_properties, gradle_env_properties};
pub use get_project_config::{get_hystamp_dir, get_project_config};
pub use get_relative_path::{display_path, get_relative_path};
