//! Environment overrides for engine configuration
//!
//! Kept in its own test binary since it sets process environment variables.

use anyhow::Result;
use chime_sdk::EngineConfig;
use std::fs;

#[test]
fn test_environment_overrides_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("chime.toml");
    fs::write(&path, "log_filter = \"warn\"\nenable_tracing = false\n")?;

    std::env::set_var("CHIME_ENABLE_TRACING", "true");
    let config = EngineConfig::load(&path);
    std::env::remove_var("CHIME_ENABLE_TRACING");

    let config = config?;
    assert!(config.enable_tracing);
    assert_eq!(config.log_filter, "warn");
    assert!(config.model_files.is_empty());

    Ok(())
}
