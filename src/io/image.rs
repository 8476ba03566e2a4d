//! PNG export of rendered tile sheets

use image::RgbaImage;
use std::path::Path;

use crate::io::error::{Result, TilingError};

/// Save a rendered sheet as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn export_sheet_as_png(sheet: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    sheet
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| TilingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(
        path = %output_path.display(),
        width = sheet.width(),
        height = sheet.height(),
        "exported tile sheet"
    );
    Ok(())
}
