//! Init-template command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_init_template(
    config: Option<PathBuf>,
    template: Option<PathBuf>,
    force: bool,
) -> Result<(), AppError> {
    let path = crate::app::api::init_template(config.as_deref(), template.as_deref(), force)?;
    println!("✅ Wrote default template to {}", path.display());
    Ok(())
}
