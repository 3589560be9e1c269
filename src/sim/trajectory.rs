//! Position history for a vehicle

use std::collections::VecDeque;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Ordered past positions, oldest first
///
/// With a limit set, the oldest point is dropped once the limit is reached.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trajectory {
    points: VecDeque<DVec2>,
    limit: Option<usize>,
}

impl Trajectory {
    /// Keep every point for the lifetime of the vehicle
    pub fn unbounded(start: DVec2) -> Self {
        Self::new(start, None)
    }

    pub fn new(start: DVec2, limit: Option<usize>) -> Self {
        let mut trajectory = Self {
            points: VecDeque::new(),
            limit: limit.map(|n| n.max(1)),
        };
        trajectory.push(start);
        trajectory
    }

    pub fn push(&mut self, pos: DVec2) {
        if let Some(limit) = self.limit {
            while self.points.len() >= limit {
                self.points.pop_front();
            }
        }
        self.points.push_back(pos);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<DVec2> {
        self.points.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.points.iter().copied()
    }

    /// Split into continuous runs, breaking wherever a step jumps further
    /// than half the world on either axis (a toroidal wrap).
    pub fn runs(&self, world_size: DVec2) -> Vec<Vec<DVec2>> {
        let half = world_size / 2.0;
        let mut runs = Vec::new();
        let mut current: Vec<DVec2> = Vec::new();

        for p in self.iter() {
            if let Some(&prev) = current.last() {
                let step = (p - prev).abs();
                if step.x > half.x || step.y > half.y {
                    runs.push(std::mem::take(&mut current));
                }
            }
            current.push(p);
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_start() {
        let t = Trajectory::unbounded(DVec2::new(1.0, 2.0));
        assert_eq!(t.len(), 1);
        assert_eq!(t.latest(), Some(DVec2::new(1.0, 2.0)));
    }

    #[test]
    fn test_unbounded_keeps_everything() {
        let mut t = Trajectory::unbounded(DVec2::ZERO);
        for i in 0..5000 {
            t.push(DVec2::splat(i as f64));
        }
        assert_eq!(t.len(), 5001);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut t = Trajectory::new(DVec2::ZERO, Some(3));
        for i in 1..=5 {
            t.push(DVec2::splat(i as f64));
        }
        let xs: Vec<f64> = t.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_zero_limit_still_keeps_latest() {
        let mut t = Trajectory::new(DVec2::ZERO, Some(0));
        t.push(DVec2::ONE);
        assert_eq!(t.len(), 1);
        assert_eq!(t.latest(), Some(DVec2::ONE));
    }

    #[test]
    fn test_runs_split_on_wrap() {
        let size = DVec2::new(800.0, 600.0);
        let mut t = Trajectory::unbounded(DVec2::new(798.0, 300.0));
        t.push(DVec2::new(799.5, 300.0));
        t.push(DVec2::new(1.0, 300.0));
        t.push(DVec2::new(2.5, 300.0));

        let runs = t.runs(size);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 2);
        assert_eq!(runs[1].len(), 2);
    }

    #[test]
    fn test_runs_vertical_wrap() {
        let size = DVec2::new(800.0, 600.0);
        let mut t = Trajectory::unbounded(DVec2::new(100.0, 0.5));
        t.push(DVec2::new(100.5, 599.8));
        assert_eq!(t.runs(size).len(), 2);
    }
}
