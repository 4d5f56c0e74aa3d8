//! Desktop gallery placement.
//!
//! Squares are placed one at a time into a [`LayoutArea`]. Each candidate is
//! rejected when its spaced box hits an already placed square or when the
//! bare square hits an avoidance rectangle. The search per square is bounded;
//! running out of attempts yields [`SearchOutcome::Exhausted`] and the square
//! is left out of the layout.

use std::f64::consts::PI;

use crate::geometry::{LayoutArea, Point, Rect};
use crate::rng::UnitRandom;

pub const MAX_PLACEMENT_ATTEMPTS: u32 = 200;
pub const RING_START_RADIUS: f64 = 20.0;
pub const RING_RADIUS_STEP: f64 = 5.0;
pub const ANCHOR_JITTER_RATIO: f64 = 0.2;

/// Fractional anchor positions cycled by image index in anchored mode.
pub const ANCHOR_POSITIONS: [(f64, f64); 15] = [
    (0.1, 0.2),
    (0.8, 0.3),
    (0.3, 0.7),
    (0.7, 0.8),
    (0.5, 0.1),
    (0.2, 0.5),
    (0.9, 0.6),
    (0.6, 0.4),
    (0.1, 0.9),
    (0.4, 0.2),
    (0.8, 0.5),
    (0.3, 0.3),
    (0.6, 0.9),
    (0.9, 0.1),
    (0.5, 0.7),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementStrategy {
    /// Start from a fixed anchor, jitter it, then walk outward in growing rings.
    Anchored,
    /// Sample uniformly over the whole area.
    Uniform,
}

impl PlacementStrategy {
    pub fn for_seed(seed: Option<i64>) -> Self {
        if seed.is_some() {
            PlacementStrategy::Anchored
        } else {
            PlacementStrategy::Uniform
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementParams {
    pub square_size: f64,
    pub spacing: f64,
    pub max_attempts: u32,
}

impl PlacementParams {
    pub fn new(square_size: f64, spacing: f64) -> Self {
        Self {
            square_size,
            spacing,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SearchOutcome {
    Found(Point),
    Exhausted { attempts: u32 },
}

impl SearchOutcome {
    pub fn position(&self) -> Option<Point> {
        match self {
            SearchOutcome::Found(point) => Some(*point),
            SearchOutcome::Exhausted { .. } => None,
        }
    }
}

/// Result of one desktop layout pass, one outcome per input image.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DesktopLayout {
    pub outcomes: Vec<SearchOutcome>,
}

impl DesktopLayout {
    /// Placed squares as `(image index, top-left corner)`, in input order.
    pub fn placed(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        self.outcomes
            .iter()
            .enumerate()
            .filter_map(|(index, outcome)| outcome.position().map(|point| (index, point)))
    }

    pub fn placed_count(&self) -> usize {
        self.placed().count()
    }

    pub fn skipped(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, outcome)| outcome.position().is_none())
            .map(|(index, _)| index)
            .collect()
    }
}

pub struct Placer<'a> {
    area: LayoutArea,
    params: PlacementParams,
    avoid: &'a [Rect],
    placed: Vec<Point>,
}

impl<'a> Placer<'a> {
    pub fn new(area: LayoutArea, params: PlacementParams, avoid: &'a [Rect]) -> Self {
        Self {
            area,
            params,
            avoid,
            placed: Vec::new(),
        }
    }

    pub fn placed(&self) -> &[Point] {
        &self.placed
    }

    pub fn overlaps_placed(&self, candidate: Point) -> bool {
        let side = self.params.square_size + self.params.spacing;
        let spaced = Rect::square(candidate, side);
        self.placed
            .iter()
            .any(|other| spaced.intersects(&Rect::square(*other, side)))
    }

    pub fn overlaps_avoided(&self, candidate: Point) -> bool {
        let square = Rect::square(candidate, self.params.square_size);
        self.avoid.iter().any(|rect| square.intersects(rect))
    }

    pub fn is_blocked(&self, candidate: Point) -> bool {
        self.overlaps_placed(candidate) || self.overlaps_avoided(candidate)
    }

    /// Searches a position for the image at `index` and records it on success.
    pub fn place<R: UnitRandom + ?Sized>(
        &mut self,
        index: usize,
        strategy: PlacementStrategy,
        rng: &mut R,
    ) -> SearchOutcome {
        let outcome = match strategy {
            PlacementStrategy::Anchored => self.search_anchored(index, rng),
            PlacementStrategy::Uniform => self.search_uniform(rng),
        };
        if let SearchOutcome::Found(point) = outcome {
            self.placed.push(point);
        }
        outcome
    }

    pub fn anchor(&self, index: usize) -> Point {
        let (fx, fy) = ANCHOR_POSITIONS[index % ANCHOR_POSITIONS.len()];
        Point::new(self.area.width * fx, self.area.height * fy)
    }

    // The jittered anchor is tried first; up to `max_attempts` ring
    // candidates follow.
    fn search_anchored<R: UnitRandom + ?Sized>(&self, index: usize, rng: &mut R) -> SearchOutcome {
        let anchor = self.anchor(index);
        let jitter_x = (rng.next_unit() - 0.5) * self.area.width * ANCHOR_JITTER_RATIO;
        let jitter_y = (rng.next_unit() - 0.5) * self.area.height * ANCHOR_JITTER_RATIO;
        let start = self
            .area
            .clamp(Point::new(anchor.x + jitter_x, anchor.y + jitter_y));
        if !self.is_blocked(start) {
            return SearchOutcome::Found(start);
        }
        for attempt in 0..self.params.max_attempts {
            let radius = RING_START_RADIUS + attempt as f64 * RING_RADIUS_STEP;
            let angle = rng.next_unit() * PI * 2.0;
            let candidate = self.area.clamp(Point::new(
                anchor.x + angle.cos() * radius,
                anchor.y + angle.sin() * radius,
            ));
            if !self.is_blocked(candidate) {
                return SearchOutcome::Found(candidate);
            }
        }
        SearchOutcome::Exhausted {
            attempts: self.params.max_attempts,
        }
    }

    fn search_uniform<R: UnitRandom + ?Sized>(&self, rng: &mut R) -> SearchOutcome {
        for _ in 0..self.params.max_attempts {
            let x = rng.next_unit() * self.area.width;
            let y = rng.next_unit() * self.area.height;
            let candidate = Point::new(x, y);
            if !self.is_blocked(candidate) {
                return SearchOutcome::Found(candidate);
            }
        }
        SearchOutcome::Exhausted {
            attempts: self.params.max_attempts,
        }
    }
}

/// Lays out `count` squares in input order.
pub fn layout_desktop<R: UnitRandom + ?Sized>(
    count: usize,
    area: LayoutArea,
    avoid: &[Rect],
    params: PlacementParams,
    strategy: PlacementStrategy,
    rng: &mut R,
) -> DesktopLayout {
    let mut placer = Placer::new(area, params, avoid);
    let outcomes = (0..count)
        .map(|index| placer.place(index, strategy, rng))
        .collect();
    DesktopLayout { outcomes }
}
