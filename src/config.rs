//! Render configuration: image size, terminal style and renderer binary.
//!
//! Loaded from JSON; any missing field takes its default.
//!
//! ```json
//! { "width": 800, "height": 800, "gnuplot": "/usr/local/bin/gnuplot" }
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Terminal style applied when none is configured.
pub const DEFAULT_TERMINAL_STYLE: &str = "background rgb '#FFFFFF' font 'Cambria Math,8'";

/// Renderer binary used when neither the config nor `GNUPLOT` names one.
pub const DEFAULT_GNUPLOT: &str = "gnuplot";

/// Environment variable overriding the renderer binary.
pub const GNUPLOT_ENV: &str = "GNUPLOT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Free-form options appended to `set terminal`.
    pub terminal_style: String,
    /// Renderer binary name or path.
    pub gnuplot: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            terminal_style: DEFAULT_TERMINAL_STYLE.into(),
            gnuplot: DEFAULT_GNUPLOT.into(),
        }
    }
}

impl PlotConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Self::from_json_str(&s)
    }

    /// Renderer program: `$GNUPLOT` when set and non-empty, else [`PlotConfig::gnuplot`].
    pub fn gnuplot_program(&self) -> String {
        self.program_with_override(std::env::var(GNUPLOT_ENV).ok())
    }

    fn program_with_override(&self, env: Option<String>) -> String {
        env.filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| self.gnuplot.clone())
    }
}
