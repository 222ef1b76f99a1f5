//! Plot geometry: mood space to pixels, and click hit-testing

use crate::dataset::{Dataset, POINT_HOVER_RADIUS};

/// Fixed square plot with a margin of mood space around [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeometry {
    /// Width and height of the plot, in pixels
    pub size: f64,
    pub padding: f64,
    /// Lowest value shown on both axes
    pub min: f64,
    /// Highest value shown on both axes
    pub max: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            size: 800.0,
            padding: 20.0,
            min: -0.1,
            max: 1.1,
        }
    }
}

impl ChartGeometry {
    fn plot_extent(&self) -> f64 {
        self.size - 2.0 * self.padding
    }

    /// Pixel position of a mood-space point. Energy grows upwards.
    pub fn to_pixel(&self, valence: f64, energy: f64) -> (f64, f64) {
        let span = self.max - self.min;
        let extent = self.plot_extent();
        let px = self.padding + (valence - self.min) / span * extent;
        let py = self.padding + (1.0 - (energy - self.min) / span) * extent;
        (px, py)
    }

    /// Index of the dataset whose bubble contains the pixel, preferring the
    /// nearest centre and, on ties, the bubble drawn last (on top).
    ///
    /// The `hovered` dataset is drawn enlarged, so it is hit within
    /// `POINT_HOVER_RADIUS`.
    pub fn hit_test(
        &self,
        datasets: &[Dataset],
        px: f64,
        py: f64,
        hovered: Option<usize>,
    ) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, dataset) in datasets.iter().enumerate() {
            for point in &dataset.points {
                let (cx, cy) = self.to_pixel(point.x, point.y);
                let distance = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
                let radius = if hovered == Some(index) {
                    point.radius.max(POINT_HOVER_RADIUS)
                } else {
                    point.radius
                };
                if distance > radius {
                    continue;
                }
                if best.map_or(true, |(_, d)| distance <= d) {
                    best = Some((index, distance));
                }
            }
        }
        best.map(|(index, _)| index)
    }
}
