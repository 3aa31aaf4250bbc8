//! Drawing attributes shared by every clause a [`crate::Gnuplot`] emits.
//!
//! Values are gnuplot literals: kinds are type numbers as strings, colors are
//! anything `linecolor` accepts (`-1`, `rgb '#ff0000'`, `"red"` ...).

use crate::script::util::fmt_num;

/// Let gnuplot pick the line type / color.
pub const AUTO: &str = "-1";

/// Dotted line type (rendered dashed once `termoption dashed` is set).
pub const DOTTED_LINE: &str = "3";

/// Hollow circle point type.
pub const CIRCLE_POINT: &str = "6";
/// Filled circle point type.
pub const ROUND_POINT: &str = "7";

/// Current style. Read at the moment a clause is emitted, never snapshotted.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub color: String,
    pub line_kind: String,
    pub line_width: f64,
    pub point_kind: String,
    pub point_size: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: AUTO.into(),
            line_kind: AUTO.into(),
            line_width: 0.5,
            point_kind: ROUND_POINT.into(),
            point_size: 0.5,
        }
    }
}

impl Style {
    /// `pointtype P pointsize S linecolor C`
    pub fn point_style(&self) -> String {
        format!(
            "pointtype {} pointsize {} linecolor {}",
            self.point_kind,
            fmt_num(self.point_size),
            self.color
        )
    }

    /// `linetype T linewidth W linecolor C`
    pub fn line_style(&self) -> String {
        format!(
            "linetype {} linewidth {} linecolor {}",
            self.line_kind,
            fmt_num(self.line_width),
            self.color
        )
    }
}
