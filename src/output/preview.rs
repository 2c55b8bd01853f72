use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::Context as _;
use image::RgbaImage;

use crate::foundation::error::LayerStackResult;

/// Write `img` to `path` as PNG, creating missing parent directories.
pub fn save_png(img: &RgbaImage, path: &Path) -> LayerStackResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Display `img` with the host's default image viewer.
///
/// The image is written to a PNG in the system temp directory and handed to
/// the platform opener; the viewer runs detached. Returns the temp file path.
pub fn show(img: &RgbaImage) -> LayerStackResult<PathBuf> {
    let path = std::env::temp_dir().join(format!("layerstack-{}.png", std::process::id()));
    save_png(img, &path)?;

    let mut cmd = viewer_command(&path);
    tracing::debug!(?cmd, "launch viewer");
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("launch image viewer for '{}'", path.display()))?;
    Ok(path)
}

pub(crate) fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(windows) {
        // `start` is a cmd builtin; the empty string is the window title.
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/preview.rs"]
mod tests;
