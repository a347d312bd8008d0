//! General application configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default expansion depth for catalog trees. Unset shows every level.
    #[serde(default)]
    pub default_depth: Option<usize>,
}
