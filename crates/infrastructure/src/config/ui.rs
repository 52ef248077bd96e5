//! User interface configuration.

use application::Locale;
use serde::{Deserialize, Serialize};

/// UI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Language of result and error messages
    #[serde(default)]
    pub locale: Locale,
}
