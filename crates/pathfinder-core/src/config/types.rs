//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// File name looked up in the root directory
pub const CONFIG_FILE_NAME: &str = "pathfinder.toml";

/// Pathfinder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathfinderConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Directory holding map documents, relative to the root
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Map loaded when no `--map` is given
    #[serde(default = "default_map")]
    pub default_map: String,

    /// Extension appended to map names given without one
    #[serde(default = "default_map_extension")]
    pub map_extension: String,
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            data_dir: default_data_dir(),
            default_map: default_map(),
            map_extension: default_map_extension(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_data_dir() -> String {
    "data-files".to_string()
}

fn default_map() -> String {
    "usa".to_string()
}

fn default_map_extension() -> String {
    "toml".to_string()
}
