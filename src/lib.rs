//! gnuscript_rs
//!
//! A small Rust library for building **gnuplot** scripts through method calls.
//! Pairs with the `gnuscript` CLI.
//!
//! ### Features
//! - Terminal selection from the output file extension (`.svg`, `.png`, `.htm`/`.html`)
//! - Balanced option scopes, multiplot regions and `plot ... \` statements
//! - Point and line series styled from a mutable [`Style`]
//! - Inline data blocks terminated by `e`
//! - Optional invocation of the external `gnuplot` binary
//!
//! ### Example
//! ```no_run
//! use gnuscript_rs::Gnuplot;
//!
//! let file = std::fs::File::create("test.plt")?;
//! let mut p = Gnuplot::new(file, "abc.svg", 600, 600)?;
//! p.xrange(-3.9, 3.9)?;
//! p.yrange(-3.9, 3.9)?;
//! p.margin(3)?;
//! p.circle(0.0, 0.0, 3.0)?;
//! p.plot(|p| p.points(["1.0 2.0"]))?;
//! p.quit()?;
//! gnuscript_rs::runner::run_plot("test.plt", &Default::default())?;
//! # Ok::<(), gnuscript_rs::Error>(())
//! ```

pub mod config;
pub mod demo;
pub mod error;
pub mod geometry;
pub mod runner;
pub mod script;
pub mod style;
pub mod terminal;

pub use config::PlotConfig;
pub use error::{Error, Result};
pub use runner::RunStatus;
pub use script::Gnuplot;
pub use style::Style;
pub use terminal::Terminal;
