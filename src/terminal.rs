//! Output target resolution: map an image path to a gnuplot terminal.

use crate::error::{Error, Result};
use std::path::Path;

/// Terminals supported as output targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// Vector image (`.svg`).
    Svg,
    /// Cairo bitmap (`.png`).
    PngCairo,
    /// HTML5 canvas page (`.htm`, `.html`).
    Canvas,
}

impl Terminal {
    /// Resolve the terminal from the file extension of `path`.
    ///
    /// The extension is everything from the last `.` of the file name, so a
    /// file named `.svg` resolves to [`Terminal::Svg`]. Matching is exact
    /// (`.SVG` is rejected); anything else, including a missing extension,
    /// is [`Error::UnsupportedFormat`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let name = path
            .as_ref()
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let ext = name.rfind('.').map_or("", |i| &name[i..]);
        match ext {
            ".svg" => Ok(Terminal::Svg),
            ".png" => Ok(Terminal::PngCairo),
            ".htm" | ".html" => Ok(Terminal::Canvas),
            _ => Err(Error::UnsupportedFormat {
                ext: ext.to_string(),
            }),
        }
    }

    /// gnuplot's device name.
    pub fn device(self) -> &'static str {
        match self {
            Terminal::Svg => "svg",
            Terminal::PngCairo => "pngcairo",
            Terminal::Canvas => "canvas",
        }
    }

    /// `set terminal <device> size W,H <style>`
    pub fn directive(self, width: u32, height: u32, style: &str) -> String {
        let line = format!("set terminal {} size {},{} {}", self.device(), width, height, style);
        line.trim_end().to_string()
    }
}
