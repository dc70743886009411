//! Three-stop linear color scale for the heatmap renderers.
//!
//! The scale maps a numeric domain onto a low → mid → high gradient with
//! stops at 0, 0.5 and 1 of the range. Both heatmap renderers share one
//! scale per chart so visual intensity is comparable across the whole
//! range (all years of a calendar map, all cells of a matrix).

/// RGB color triple.
pub type Rgb = [u8; 3];

/// Default gradient for the usage heatmaps: pale sand to deep red.
pub const HEAT_LOW: Rgb = [254, 240, 217];
pub const HEAT_MID: Rgb = [252, 141, 89];
pub const HEAT_HIGH: Rgb = [179, 0, 0];

/// Fill for cells with no data, distinct from the scale's zero color.
pub const NO_DATA_FILL: Rgb = [30, 30, 30];

fn lerp(from: Rgb, to: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    [
        channel(from[0], to[0]),
        channel(from[1], to[1]),
        channel(from[2], to[2]),
    ]
}

/// A pure `value -> color` function over `[min, max]`.
#[derive(Clone, Copy, Debug)]
pub struct ColorScale {
    min: f64,
    max: f64,
    low: Rgb,
    mid: Rgb,
    high: Rgb,
}

impl ColorScale {
    pub fn new(min: f64, max: f64, low: Rgb, mid: Rgb, high: Rgb) -> Self {
        Self {
            min,
            max,
            low,
            mid,
            high,
        }
    }

    /// The default heat gradient over `[min, max]`.
    pub fn heat(min: f64, max: f64) -> Self {
        Self::new(min, max, HEAT_LOW, HEAT_MID, HEAT_HIGH)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Map a value to its color. Values outside the domain clamp to the
    /// endpoints; a degenerate `min == max` domain maps everything to the
    /// low stop instead of dividing by zero.
    pub fn color(&self, value: f64) -> Rgb {
        let range = self.max - self.min;
        let t = if range > 0.0 {
            ((value - self.min) / range).clamp(0.0, 1.0)
        } else {
            0.0
        };

        if t <= 0.5 {
            lerp(self.low, self.mid, t * 2.0)
        } else {
            lerp(self.mid, self.high, (t - 0.5) * 2.0)
        }
    }

    /// Evenly spaced swatches for rendering a gradient legend.
    pub fn legend_stops(&self, steps: usize) -> Vec<Rgb> {
        let steps = steps.max(2);
        (0..steps)
            .map(|i| {
                let t = i as f64 / (steps - 1) as f64;
                self.color(self.min + t * (self.max - self.min))
            })
            .collect()
    }
}
