//! Configuration for huffpack

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Upper bound on compress input size. Keeps the whole-file two-pass
    /// design bounded in memory and the encoded bit count far below the
    /// container's 32-bit limit.
    pub max_input_size: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_input_size: 100 * 1024 * 1024, // 100 MB
        }
    }
}
