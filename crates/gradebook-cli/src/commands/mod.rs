pub mod grade;
pub mod init;
pub mod required;
pub mod roster;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::config::load_config_from;
use gradebook_core::GradeEngine;

/// Build the engine from `--config`, or from the default config locations.
pub fn load_engine(config_path: Option<PathBuf>) -> Result<GradeEngine> {
    let config = load_config_from(config_path.as_deref())?;
    tracing::debug!(
        rounding = %config.record.rounding,
        pass_threshold = config.record.pass_threshold,
        "grade engine configured"
    );
    Ok(GradeEngine::new(config))
}
