//! Reference chart: points inside a circle of radius 3 with their tangent lines.

use crate::config::PlotConfig;
use crate::error::Result;
use crate::geometry::{Line, Point};
use crate::script::Gnuplot;
use crate::style::DOTTED_LINE;
use std::io::Write;
use std::path::Path;

/// Radius of the circle the demo points are spread over.
pub const DEMO_RADIUS: f64 = 3.0;

/// `n` points evenly spread over a disc of `radius` (sunflower / golden-angle spiral).
pub fn sunflower(n: usize, radius: f64) -> Vec<Point> {
    let golden = std::f64::consts::PI * (3.0 - 5f64.sqrt());
    (0..n)
        .map(|i| {
            let r = radius * ((i as f64 + 0.5) / n as f64).sqrt();
            Point::polar(golden * i as f64, r)
        })
        .collect()
}

/// Write the demo script for `image` into `out` and return the sink.
pub fn write_demo<W, P>(out: W, image: P, config: &PlotConfig, n_points: usize) -> Result<W>
where
    W: Write,
    P: AsRef<Path>,
{
    let mut p = Gnuplot::with_config(out, image, config)?;
    p.xrange(-3.9, 3.9)?;
    p.yrange(-3.9, 3.9)?;
    p.margin(3)?;
    p.lock_ratio()?;

    let centers = sunflower(n_points, DEMO_RADIUS);
    let points: Vec<String> = centers.iter().map(Point::to_string).collect();
    let lines: Vec<String> = centers.iter().map(|&c| Line { c }.ax_plus_b()).collect();

    p.multiplot(|p| {
        p.circle(0.0, 0.0, DEMO_RADIUS)?;
        p.with("parametric", |p| {
            p.plot(|p| {
                let axes = crate::Style {
                    line_kind: DOTTED_LINE.into(),
                    ..p.style.clone()
                };
                p.with_style(axes, |p| p.lines(["t, 0", "0, t"]))?;
                p.lines(&lines)?;
                p.points(&points)
            })
        })
    })?;
    p.quit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunflower_stays_inside_disc() {
        let pts = sunflower(50, 3.0);
        assert_eq!(pts.len(), 50);
        assert!(pts.iter().all(|p| (p.x * p.x + p.y * p.y).sqrt() < 3.0));
    }

    #[test]
    fn demo_counts_clauses() {
        let buf = write_demo(Vec::new(), "abc.svg", &PlotConfig::default(), 4).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches(" with points ").count(), 4);
        // two dotted axes + four tangents
        assert_eq!(text.matches(" with lines ").count(), 6);
        assert_eq!(text.matches("linetype 3 ").count(), 2);
        assert!(text.ends_with("quit\n"));
    }
}
