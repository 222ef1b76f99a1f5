//! Genre button placement around the circular plot
//!
//! Each button is dropped at a random angle and a random distance beyond the
//! plot's rim, then rejected and re-sampled while it sits too close to a
//! button that is already placed. Positions are percentages of the chart
//! container, with separate horizontal and vertical scaling because the
//! container is much wider than it is tall.

use crate::catalogue::Category;
use rand::Rng;
use std::f64::consts::{SQRT_2, TAU};
use tracing::warn;

/// A point in container percentages
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A placed genre toggle
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryButton {
    pub name: String,
    pub color: String,
    pub position: Position,
}

/// Geometry of the ring the buttons are scattered over
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Radius of the circular plot wrapper, in pixels
    pub wrapper_radius: f64,
    /// Plot centre, in container percentages
    pub center: Position,
    /// Radius of a genre button, in pixels
    pub button_radius: f64,
    /// How far the wrapper's bounding-square corner is pulled back toward the rim
    pub corner_inset: f64,
    /// Random extra distance added beyond the minimum
    pub jitter: f64,
    /// Pixels per horizontal percent
    pub horizontal_divisor: f64,
    /// Pixels per vertical percent
    pub vertical_divisor: f64,
    /// Scale applied to percentage deltas when checking for overlap
    pub overlap_scale: f64,
    /// Samples tried per button before it is dropped
    pub max_attempts: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            wrapper_radius: 400.0,
            center: Position { x: 50.0, y: 50.0 },
            button_radius: 30.0,
            corner_inset: 50.0,
            jitter: 1000.0,
            horizontal_divisor: 30.0,
            vertical_divisor: 10.0,
            overlap_scale: 8.0,
            max_attempts: 300,
        }
    }
}

impl LayoutConfig {
    /// Closest a button centre may be to the plot centre, in pixels.
    pub fn min_radial_distance(&self) -> f64 {
        self.wrapper_radius * SQRT_2 + self.button_radius - self.corner_inset
    }

    /// Minimum scaled distance between two button centres.
    pub fn min_separation(&self) -> f64 {
        self.button_radius * 2.0
    }

    /// Distance between two positions in overlap-check units.
    pub fn separation(&self, a: Position, b: Position) -> f64 {
        let dx = (a.x - b.x) * self.overlap_scale;
        let dy = (a.y - b.y) * self.overlap_scale;
        (dx * dx + dy * dy).sqrt()
    }

    /// Distance of a position from the plot centre, back in pixels.
    pub fn radial_distance(&self, position: Position) -> f64 {
        let dx = (position.x - self.center.x) * self.horizontal_divisor;
        let dy = (position.y - self.center.y) * self.vertical_divisor;
        (dx * dx + dy * dy).sqrt()
    }

    fn overlaps(&self, candidate: Position, taken: &[Position]) -> bool {
        taken
            .iter()
            .any(|pos| self.separation(candidate, *pos) < self.min_separation())
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        let angle = rng.gen::<f64>() * TAU;
        let distance = self.min_radial_distance() + rng.gen::<f64>() * self.jitter;
        Position {
            x: self.center.x + distance * angle.cos() / self.horizontal_divisor,
            y: self.center.y + distance * angle.sin() / self.vertical_divisor,
        }
    }
}

/// Place one button per category. Categories that find no free spot within
/// `max_attempts` samples are left out.
pub fn place_buttons<R: Rng + ?Sized>(
    catalogue: &[Category],
    config: &LayoutConfig,
    rng: &mut R,
) -> Vec<CategoryButton> {
    let mut taken: Vec<Position> = Vec::with_capacity(catalogue.len());
    let mut buttons = Vec::with_capacity(catalogue.len());

    for category in catalogue {
        let placed = (0..config.max_attempts)
            .map(|_| config.sample(rng))
            .find(|candidate| !config.overlaps(*candidate, &taken));

        match placed {
            Some(position) => {
                taken.push(position);
                buttons.push(CategoryButton {
                    name: category.name.clone(),
                    color: category.color.clone(),
                    position,
                });
            }
            None => {
                warn!(
                    "No free position for genre button '{}' after {} attempts",
                    category.name, config.max_attempts
                );
            }
        }
    }

    buttons
}

/// Place the buttons using the thread-local RNG.
pub fn place_buttons_randomly(
    catalogue: &[Category],
    config: &LayoutConfig,
) -> Vec<CategoryButton> {
    place_buttons(catalogue, config, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{categories_from_names, genre_catalogue};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_no_overlap(buttons: &[CategoryButton], config: &LayoutConfig) {
        for (i, a) in buttons.iter().enumerate() {
            for b in &buttons[i + 1..] {
                let d = config.separation(a.position, b.position);
                assert!(
                    d >= config.min_separation(),
                    "{} and {} are {d} apart",
                    a.name,
                    b.name
                );
            }
        }
    }

    #[test]
    fn full_catalogue_never_overlaps() {
        let config = LayoutConfig::default();
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let buttons = place_buttons(genre_catalogue(), &config, &mut rng);
            assert!(buttons.len() <= genre_catalogue().len());
            assert!(!buttons.is_empty());
            assert_no_overlap(&buttons, &config);
        }
    }

    #[test]
    fn buttons_ring_the_plot() {
        let config = LayoutConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let buttons = place_buttons(genre_catalogue(), &config, &mut rng);
        let rim = config.wrapper_radius + config.button_radius;
        for button in &buttons {
            let r = config.radial_distance(button.position);
            assert!(r >= config.min_radial_distance() - 1e-9);
            assert!(r > rim);
            assert!(r <= config.min_radial_distance() + config.jitter + 1e-9);
        }
    }

    #[test]
    fn buttons_keep_catalogue_names_and_colours() {
        let catalogue = categories_from_names(&["rock", "jazz"]);
        let mut rng = StdRng::seed_from_u64(7);
        let buttons = place_buttons(&catalogue, &LayoutConfig::default(), &mut rng);
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].name, "rock");
        assert_eq!(buttons[0].color, catalogue[0].color);
        assert_eq!(buttons[1].name, "jazz");
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let config = LayoutConfig::default();
        let a = place_buttons(genre_catalogue(), &config, &mut StdRng::seed_from_u64(3));
        let b = place_buttons(genre_catalogue(), &config, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn crowded_ring_drops_buttons_instead_of_overlapping() {
        // No jitter: every button lands on one thin ellipse, which cannot
        // hold many of them.
        let config = LayoutConfig {
            jitter: 0.0,
            max_attempts: 50,
            ..LayoutConfig::default()
        };
        let names: Vec<String> = (0..200).map(|i| format!("genre-{i}")).collect();
        let catalogue = categories_from_names(&names);
        let buttons = place_buttons(&catalogue, &config, &mut StdRng::seed_from_u64(11));
        assert!(buttons.len() < catalogue.len());
        assert_no_overlap(&buttons, &config);
    }

    #[test]
    fn empty_catalogue_places_nothing() {
        let buttons = place_buttons(&[], &LayoutConfig::default(), &mut StdRng::seed_from_u64(0));
        assert!(buttons.is_empty());
    }
}
