//! Script emission: the [`Gnuplot`] builder.
//!
//! Every line goes through [`Gnuplot::emit`], indented four spaces per open
//! scope. Scope helpers take a body callback that receives the builder back,
//! run it synchronously and close the scope afterwards:
//!
//! - [`Gnuplot::with`]: `set opt` … `unset opt`
//! - [`Gnuplot::plot`]: `plot \` … clauses … invisible terminator clause
//! - [`Gnuplot::multiplot`]: a `multiplot` option scope whose panels share one border
//! - [`Gnuplot::data_block`]: `'-' style` … rows … `e,\`
//!
//! An error from the sink or from a body aborts immediately; closing
//! directives are not attempted and the partial script should be dropped.

pub mod util;

use crate::config::{DEFAULT_TERMINAL_STYLE, PlotConfig};
use crate::error::Result;
use crate::style::Style;
use crate::terminal::Terminal;
use log::{debug, trace};
use std::io::Write;
use std::path::Path;

use util::fmt_num;

const INDENT: &str = "    ";

/// Builder writing a gnuplot script into `W`.
///
/// The sink is borrowed for the builder's lifetime and handed back by
/// [`Gnuplot::quit`]; pass `&mut File` to keep ownership on the caller side.
pub struct Gnuplot<W: Write> {
    out: W,
    indent: usize,
    /// Style used by every subsequent point/line clause.
    pub style: Style,
}

impl<W: Write> Gnuplot<W> {
    /// Start a script rendering to `image` at `width`×`height` pixels with the
    /// default terminal style.
    ///
    /// Fails with [`crate::Error::UnsupportedFormat`] before writing anything
    /// if the extension of `image` has no terminal.
    pub fn new<P: AsRef<Path>>(out: W, image: P, width: u32, height: u32) -> Result<Self> {
        Self::with_terminal_style(out, image, width, height, DEFAULT_TERMINAL_STYLE)
    }

    /// Start a script using size and terminal style from `config`.
    pub fn with_config<P: AsRef<Path>>(out: W, image: P, config: &PlotConfig) -> Result<Self> {
        Self::with_terminal_style(out, image, config.width, config.height, &config.terminal_style)
    }

    /// Start a script with an explicit terminal style string
    /// (e.g. `background rgb '#FFFFFF' font 'Arial,10'`).
    pub fn with_terminal_style<P: AsRef<Path>>(
        out: W,
        image: P,
        width: u32,
        height: u32,
        terminal_style: &str,
    ) -> Result<Self> {
        let image = image.as_ref();
        let terminal = Terminal::from_path(image)?;
        debug!(
            "terminal {} {}x{} for {}",
            terminal.device(),
            width,
            height,
            image.display()
        );
        let mut p = Self {
            out,
            indent: 0,
            style: Style::default(),
        };
        p.emit(&terminal.directive(width, height, terminal_style))?;
        p.emit(&format!("set output '{}'", image.display()))?;
        p.set("termoption dashed")?;
        Ok(p)
    }

    /// Current indentation depth (number of open scopes).
    pub fn indent_level(&self) -> usize {
        self.indent
    }

    /// Write one line at the current depth.
    pub fn emit(&mut self, line: &str) -> Result<()> {
        trace!("emit [{}] {}", self.indent, line);
        let mut text = INDENT.repeat(self.indent);
        text.push_str(line);
        text.push('\n');
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    fn enter(&mut self) {
        self.indent += 1;
    }

    fn leave(&mut self) {
        debug_assert!(self.indent > 0, "unbalanced scope");
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn set(&mut self, option: &str) -> Result<()> {
        self.emit(&format!("set {option}"))
    }

    pub fn unset(&mut self, option: &str) -> Result<()> {
        self.emit(&format!("unset {option}"))
    }

    /// `set option`, indented `body`, `unset option`.
    pub fn with<F>(&mut self, option: &str, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.set(option)?;
        self.enter();
        body(self)?;
        self.leave();
        self.unset(option)
    }

    /// One `plot \` statement. `body` emits clauses ending in `,\`; the
    /// statement is closed with an invisible terminator clause.
    pub fn plot<F>(&mut self, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.emit("plot \\")?;
        self.enter();
        body(self)?;
        self.empty()?;
        self.leave();
        Ok(())
    }

    /// A `multiplot` scope. Key, tics, border and raxis are off while `body`
    /// draws; then tics and border are switched back on and drawn once by an
    /// empty plot.
    pub fn multiplot<F>(&mut self, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.with("multiplot", |p| {
            p.no_title()?;
            p.unset("tics")?;
            p.unset("border")?;
            p.unset("raxis")?;
            body(p)?;
            p.plot_border()
        })
    }

    /// Inline data clause: `'-' style`, indented rows from `body`, then `e,\`.
    pub fn data_block<F>(&mut self, style: &str, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.emit(&format!("'-' {style}"))?;
        self.enter();
        body(self)?;
        self.leave();
        self.emit("e,\\")
    }

    /// Run `body` with `style` installed, then put the previous style back.
    pub fn with_style<F>(&mut self, style: Style, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let saved = std::mem::replace(&mut self.style, style);
        body(self)?;
        self.style = saved;
        Ok(())
    }

    // A single background-colored point far outside any range. It lets every
    // real clause keep its trailing `,\`.
    fn empty(&mut self) -> Result<()> {
        self.emit("'-' linetype bgnd")?;
        self.emit(&format!("{} {}", fmt_num(f64::MAX), fmt_num(f64::MAX)))?;
        self.emit("e")
    }

    fn plot_border(&mut self) -> Result<()> {
        self.set("tics")?;
        self.set("border")?;
        self.plot(|_| Ok(()))
    }

    /// Uniform margin on all four sides.
    pub fn margin(&mut self, m: i32) -> Result<()> {
        for side in ["rmargin", "lmargin", "tmargin", "bmargin"] {
            self.set(&format!("{side} {m}"))?;
        }
        Ok(())
    }

    /// Unfilled circle object centered at (`a`, `b`).
    ///
    /// Values are not checked; non-finite input prints as `inf`/`NaN`,
    /// which gnuplot rejects when it reads the script.
    pub fn circle(&mut self, a: f64, b: f64, r: f64) -> Result<()> {
        self.set(&format!(
            "object circle at {},{} size {} fillcolor rgb '#000000' fillstyle empty linewidth 0.2",
            fmt_num(a),
            fmt_num(b),
            fmt_num(r)
        ))
    }

    /// One `with points` clause per `"X Y"` string, styled by [`Style::point_style`].
    pub fn points<I, S>(&mut self, points: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for point in points {
            let clause = format!(
                "\"<echo {}\" with points {},\\",
                point.as_ref(),
                self.style.point_style()
            );
            self.emit(&clause)?;
        }
        Ok(())
    }

    /// One `with lines` clause per expression (e.g. `t,2*t+1` in parametric mode),
    /// styled by [`Style::line_style`].
    pub fn lines<I, S>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            let clause = format!("{} with lines {},\\", line.as_ref(), self.style.line_style());
            self.emit(&clause)?;
        }
        Ok(())
    }

    /// All `rows` as a single inline-data clause drawn with the point style.
    pub fn inline_points<I, S>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let style = format!("with points {}", self.style.point_style());
        self.data_block(&style, |p| {
            for row in rows {
                p.emit(row.as_ref())?;
            }
            Ok(())
        })
    }

    pub fn no_title(&mut self) -> Result<()> {
        self.unset("key")
    }

    /// Square plotting area.
    pub fn lock_ratio(&mut self) -> Result<()> {
        self.set("size square")
    }

    pub fn xtics(&mut self, style: &str) -> Result<()> {
        self.set(&format!("xtics {style}"))
    }

    pub fn ytics(&mut self, style: &str) -> Result<()> {
        self.set(&format!("ytics {style}"))
    }

    /// Inverted ranges are passed through unchanged. Bounds are not checked;
    /// non-finite input prints as `inf`/`NaN`, which gnuplot rejects.
    pub fn xrange(&mut self, from: f64, to: f64) -> Result<()> {
        self.set(&format!("xrange [{}:{}]", fmt_num(from), fmt_num(to)))
    }

    /// Same rules as [`Gnuplot::xrange`].
    pub fn yrange(&mut self, from: f64, to: f64) -> Result<()> {
        self.set(&format!("yrange [{}:{}]", fmt_num(from), fmt_num(to)))
    }

    /// gnuplot's terminal test page.
    pub fn test(&mut self) -> Result<()> {
        self.emit("test")
    }

    /// Emit `quit`, flush, and hand back the sink.
    pub fn quit(mut self) -> Result<W> {
        self.emit("quit")?;
        self.out.flush()?;
        Ok(self.out)
    }
}
