use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::format_number;

const EPSILON: f64 = 1e-6;

/// Angular extent of one record in a pie, clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Lay values out around a full circle in input order.
///
/// A zero total collapses every slice to zero width.
pub fn pie(values: &[f64]) -> Vec<PieSlice> {
    let sum: f64 = values.iter().sum();
    let k = if sum != 0.0 { TAU / sum } else { 0.0 };
    let mut angle = 0.0;
    values
        .iter()
        .map(|&value| {
            let start_angle = angle;
            angle += value * k;
            PieSlice {
                value,
                start_angle,
                end_angle: angle,
            }
        })
        .collect()
}

/// Circular sector generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl Arc {
    /// SVG path data for the sector covering `slice`.
    pub fn path(&self, slice: &PieSlice) -> String {
        let (mut r0, mut r1) = (self.inner_radius, self.outer_radius);
        if r1 < r0 {
            std::mem::swap(&mut r0, &mut r1);
        }
        let a0 = slice.start_angle - FRAC_PI_2;
        let a1 = slice.end_angle - FRAC_PI_2;
        let da = (a1 - a0).abs();
        let cw = if a0 > a1 { 0 } else { 1 };
        let n = coord;

        if da >= TAU - EPSILON {
            let mut path = circle(r1, cw);
            if r0 > 0.0 {
                path.push_str(&circle(r0, 1 - cw));
            }
            path.push('Z');
            return path;
        }

        let large = if da <= PI { 0 } else { 1 };
        let mut path = format!(
            "M{},{}A{},{} 0 {},{} {},{}",
            n(r1 * a0.cos()),
            n(r1 * a0.sin()),
            n(r1),
            n(r1),
            large,
            cw,
            n(r1 * a1.cos()),
            n(r1 * a1.sin()),
        );
        if r0 > 0.0 {
            path.push_str(&format!(
                "L{},{}A{},{} 0 {},{} {},{}",
                n(r0 * a1.cos()),
                n(r0 * a1.sin()),
                n(r0),
                n(r0),
                large,
                1 - cw,
                n(r0 * a0.cos()),
                n(r0 * a0.sin()),
            ));
        } else {
            path.push_str("L0,0");
        }
        path.push('Z');
        path
    }

    /// Midpoint of the sector, halfway along the radius.
    pub fn centroid(&self, slice: &PieSlice) -> (f64, f64) {
        let r = (self.inner_radius + self.outer_radius) / 2.0;
        let a = (slice.start_angle + slice.end_angle) / 2.0 - FRAC_PI_2;
        (a.cos() * r, a.sin() * r)
    }
}

// trig leaves residue like 9e-15 where the exact answer is 0
fn coord(value: f64) -> String {
    format_number(if value.abs() < 1e-9 { 0.0 } else { value })
}

fn circle(r: f64, cw: i32) -> String {
    let r = coord(r);
    format!("M0,{r}A{r},{r} 0 1,{cw} 0,-{r}A{r},{r} 0 1,{cw} 0,{r}")
}
