//! Content-based hashing for run IDs.

use hc_sim::PlantConfig;
use sha2::{Digest, Sha256};

/// Derive a stable run id from the full configuration and engine version.
///
/// Two runs with identical configuration (including the noise seed) produce
/// identical traces, so the hash doubles as a cache key.
pub fn compute_run_id(config: &PlantConfig, engine_version: &str) -> String {
    let mut hasher = Sha256::new();

    let config_json = serde_json::to_string(config).unwrap_or_default();
    hasher.update(config_json.as_bytes());
    hasher.update(engine_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_stability() {
        let cfg = PlantConfig::default();
        let a = compute_run_id(&cfg, "v1");
        let b = compute_run_id(&cfg, "v1");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn hash_depends_on_config_and_version() {
        let cfg = PlantConfig::default();
        let mut changed = cfg.clone();
        changed.simulation.seed = 99;

        assert_ne!(compute_run_id(&cfg, "v1"), compute_run_id(&changed, "v1"));
        assert_ne!(compute_run_id(&cfg, "v1"), compute_run_id(&cfg, "v2"));
    }
}
