//! Asteroids and their spawn placement
//!
//! Outlines are irregular only in radius: vertices sit at equal angular
//! steps, so every outline stays a simple (non-self-intersecting) polygon.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::shape::Shape;
use super::state::Bounds;
use crate::settings::Tuning;

/// Screen edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A point just outside `edge`, uniform along it (extended by `buffer` at both ends)
pub fn spawn_point<R: Rng>(rng: &mut R, edge: Edge, bounds: &Bounds, buffer: f32) -> Vec2 {
    let along_x = rng.random::<f32>() * (bounds.width + 2.0 * buffer) - buffer;
    let along_y = rng.random::<f32>() * (bounds.height + 2.0 * buffer) - buffer;
    match edge {
        Edge::Top => Vec2::new(along_x, -buffer),
        Edge::Right => Vec2::new(bounds.width + buffer, along_y),
        Edge::Bottom => Vec2::new(along_x, bounds.height + buffer),
        Edge::Left => Vec2::new(-buffer, along_y),
    }
}

/// Random outline with 5-10 vertices at radius [20, 40) by default
pub fn random_outline<R: Rng>(rng: &mut R, tuning: &Tuning) -> Shape {
    let count = rng.random_range(tuning.asteroid_min_vertices..=tuning.asteroid_max_vertices);
    let step = std::f32::consts::TAU / count as f32;
    let points = (0..count)
        .map(|i| {
            let radius = rng.random_range(tuning.asteroid_min_radius..tuning.asteroid_max_radius);
            let angle = i as f32 * step;
            Vec2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    Shape::Polygon(points)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub body: Body,
    /// Marked when shot or rammed this tick; compacted away at tick end
    #[serde(skip)]
    pub destroyed: bool,
}

impl Asteroid {
    /// Asteroid with a random outline and visual rotation
    pub fn new<R: Rng>(id: u32, rng: &mut R, pos: Vec2, direction: f32, tuning: &Tuning) -> Self {
        let rotation = rng.random::<f32>() * 360.0;
        let mut body = Body::new(id, pos, rotation, random_outline(rng, tuning));
        body.set_velocity(tuning.asteroid_speed, direction);
        Self {
            body,
            destroyed: false,
        }
    }

    /// Asteroid entering from a random edge with a random heading
    pub fn spawn<R: Rng>(id: u32, rng: &mut R, bounds: &Bounds, tuning: &Tuning) -> Self {
        let edge = Edge::random(rng);
        let pos = spawn_point(rng, edge, bounds, tuning.spawn_buffer);
        let direction = rng.random::<f32>() * 360.0;
        Self::new(id, rng, pos, direction, tuning)
    }

    pub fn next_frame(&mut self, bounds: &Bounds, fps: u32) {
        self.body.advance(fps);
        self.body.wrap(bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::segments_intersect;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_points_outside_screen() {
        let mut rng = Pcg32::seed_from_u64(42);
        let bounds = Bounds::new(600.0, 600.0);
        for _ in 0..200 {
            let edge = Edge::random(&mut rng);
            let p = spawn_point(&mut rng, edge, &bounds, 50.0);
            match edge {
                Edge::Top => assert_eq!(p.y, -50.0),
                Edge::Right => assert_eq!(p.x, 650.0),
                Edge::Bottom => assert_eq!(p.y, 650.0),
                Edge::Left => assert_eq!(p.x, -50.0),
            }
            assert!(p.x >= -50.0 && p.x <= 650.0);
            assert!(p.y >= -50.0 && p.y <= 650.0);
        }
    }

    #[test]
    fn test_every_edge_gets_used() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..100 {
            let edge = Edge::random(&mut rng);
            seen[Edge::ALL.iter().position(|e| *e == edge).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_spawned_asteroid_moves_at_asteroid_speed() {
        let mut rng = Pcg32::seed_from_u64(1);
        let tuning = Tuning::default();
        let asteroid = Asteroid::spawn(5, &mut rng, &Bounds::new(600.0, 600.0), &tuning);
        assert_eq!(asteroid.body.id, 5);
        assert_eq!(asteroid.body.speed, tuning.asteroid_speed);
        assert!((0.0..360.0).contains(&asteroid.body.direction));
        assert!(!asteroid.destroyed);
    }

    proptest! {
        #[test]
        fn outlines_are_simple_polygons(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let Shape::Polygon(points) = random_outline(&mut rng, &Tuning::default()) else {
                panic!("asteroids are polygons");
            };
            prop_assert!((5..=10).contains(&points.len()));
            for p in &points {
                let r = p.length();
                prop_assert!(r >= 20.0 - 1e-3 && r < 40.0 + 1e-3);
            }
            // Non-adjacent edges never cross
            let n = points.len();
            for i in 0..n {
                for j in (i + 2)..n {
                    if i == 0 && j == n - 1 {
                        continue;
                    }
                    prop_assert!(!segments_intersect(
                        points[i],
                        points[(i + 1) % n],
                        points[j],
                        points[(j + 1) % n],
                    ));
                }
            }
        }
    }
}
