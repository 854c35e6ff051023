use super::shaper::OutputDocument;
use crate::config::paths::pretty_copy_path;
use crate::error::AppError;
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

/// Writes the minified document to `output_path`, plus an indented copy
/// next to it when `write_pretty_copy` is set. Returns the minified size.
///
/// Going over `byte_budget` is reported but not fatal.
pub async fn write_document(
    document: &OutputDocument,
    output_path: &str,
    write_pretty_copy: bool,
    byte_budget: usize,
) -> Result<usize, AppError> {
    if let Some(parent) = Path::new(output_path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).await?;
    }

    let minified = serde_json::to_string(document)?;
    if minified.len() > byte_budget {
        warn!(
            "Output document is {} bytes, over the {} byte budget",
            minified.len(),
            byte_budget
        );
    }
    fs::write(output_path, &minified).await?;
    info!(
        "Wrote {} games ({} bytes) to {}",
        document.games.len(),
        minified.len(),
        output_path
    );

    if write_pretty_copy {
        let pretty_path = pretty_copy_path(output_path);
        fs::write(&pretty_path, serde_json::to_string_pretty(document)?).await?;
        info!("Wrote pretty copy to {pretty_path}");
    }

    Ok(minified.len())
}
