use serde::{Deserialize, Serialize};

/// Decoder configuration.
///
/// The configuration can be embedded in a training configuration file.
/// Missing fields take their default values:
///
/// ```
/// use eisner::EisnerConfig;
///
/// let config: EisnerConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config, EisnerConfig::default());
/// ```
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct EisnerConfig {
    /// Cost of an arc that is not in the gold tree during
    /// cost-augmented decoding.
    pub margin: f32,
}

impl Default for EisnerConfig {
    fn default() -> Self {
        EisnerConfig { margin: 1.0 }
    }
}
