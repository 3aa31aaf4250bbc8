//! Plane geometry helpers used by the demo chart.

use crate::script::util::fmt_num;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn polar(theta: f64, radius: f64) -> Self {
        Self::new(radius * theta.cos(), radius * theta.sin())
    }
}

/// `X Y`, the row format gnuplot reads from data and `<echo`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", fmt_num(self.x), fmt_num(self.y))
    }
}

/// Line given by its point closest to the origin, `c`. `c` is also the line's
/// normal vector, so the line is the tangent at `c` to the circle through it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub c: Point,
}

impl Line {
    /// Parametric expression for the line: `t,A*t+B` (y = a·x + b), or `X,t`
    /// when the line is vertical.
    pub fn ax_plus_b(&self) -> String {
        let Point { x, y } = self.c;
        if y == 0.0 {
            return format!("{},t", fmt_num(x));
        }
        let rr = x * x + y * y;
        let a = -x / y;
        let b = rr / y;
        let sign = if b.is_sign_negative() { "" } else { "+" };
        format!("t,{}*t{}{}", fmt_num(a), sign, fmt_num(b))
    }
}
