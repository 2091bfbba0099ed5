//! Rendering DOT files through a locally installed Graphviz binary.
//!
//! Rendering is best-effort: when the `dot` binary is missing, functions
//! log a warning and report that back instead of failing.

use crate::error::{ExportError, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

/// Output format for [`render_file`] and [`render_file_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderFormat {
    /// Portable Network Graphics
    Png,
    /// Scalable Vector Graphics
    Svg,
}

impl RenderFormat {
    /// File extension for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            RenderFormat::Png => "png",
            RenderFormat::Svg => "svg",
        }
    }

    /// The `-T` flag passed to the `dot` binary.
    pub fn flag(&self) -> &'static str {
        match self {
            RenderFormat::Png => "-Tpng",
            RenderFormat::Svg => "-Tsvg",
        }
    }
}

/// Check whether the Graphviz `dot` binary is on the path.
///
/// The probe runs once per process; later calls return the cached answer.
pub fn dot_available() -> bool {
    static AVAILABLE: OnceLock<bool> = OnceLock::new();

    *AVAILABLE.get_or_init(|| {
        Command::new("dot")
            .arg("-V")
            .output()
            .map(|probe| probe.status.success())
            .unwrap_or(false)
    })
}

/// Render a DOT file, writing the image next to the input with the
/// format's extension.
///
/// Returns the output path, or `None` when Graphviz is not installed.
pub fn render_file(dot_path: &Path, format: RenderFormat) -> Result<Option<PathBuf>> {
    let output = dot_path.with_extension(format.extension());

    if render_file_to(dot_path, format, &output)? {
        Ok(Some(output))
    } else {
        Ok(None)
    }
}

/// Render a DOT file to an explicit output path.
///
/// Returns `false` without touching the output when Graphviz is not
/// installed.
///
/// # Errors
///
/// Returns [`ExportError::Render`] if the `dot` binary cannot be run or
/// exits with a failure status.
pub fn render_file_to(dot_path: &Path, format: RenderFormat, output: &Path) -> Result<bool> {
    if !dot_available() {
        warn!(
            "Graphviz 'dot' binary not found, skipping render of {}",
            dot_path.display()
        );
        return Ok(false);
    }

    debug!("Rendering {} to {}", dot_path.display(), output.display());

    let run = Command::new("dot")
        .arg(format.flag())
        .arg(dot_path)
        .arg("-o")
        .arg(output)
        .output()
        .map_err(|e| ExportError::render("Failed to run the 'dot' binary", Some(e)))?;

    if !run.status.success() {
        let stderr = String::from_utf8_lossy(&run.stderr);
        return Err(ExportError::render(
            format!("dot exited with {}: {}", run.status, stderr.trim()),
            None,
        ));
    }

    info!("Rendered {} to {}", dot_path.display(), output.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_format_extensions() {
        assert_eq!(RenderFormat::Png.extension(), "png");
        assert_eq!(RenderFormat::Svg.extension(), "svg");
    }

    #[test]
    fn test_render_format_flags() {
        assert_eq!(RenderFormat::Png.flag(), "-Tpng");
        assert_eq!(RenderFormat::Svg.flag(), "-Tsvg");
    }

    #[test]
    fn test_flag_matches_extension() {
        for format in [RenderFormat::Png, RenderFormat::Svg] {
            assert_eq!(format.flag(), format!("-T{}", format.extension()));
        }
    }

    #[test]
    fn test_dot_available_is_consistent() {
        let first = dot_available();
        let second = dot_available();
        let third = dot_available();

        assert_eq!(first, second);
        assert_eq!(second, third);
    }
}
