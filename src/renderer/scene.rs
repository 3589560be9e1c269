//! Frame composition
//!
//! Turns simulation state into a backend-neutral list of primitive draw
//! commands in screen coordinates (origin top-left, y down).

use glam::Vec2;

use super::vertex::colors;
use crate::consts::*;
use crate::sim::{Behavior, SimState, Vehicle};

pub type Color = [f32; 4];

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Fill the whole surface
    Clear(Color),
    FillRect { min: Vec2, size: Vec2, color: Color },
    FillCircle { center: Vec2, radius: f32, color: Color },
    Line { from: Vec2, to: Vec2, width: f32, color: Color },
    Polyline { points: Vec<Vec2>, width: f32, color: Color },
    /// Bitmap text; `origin` is the top-left of the first glyph
    Text { origin: Vec2, text: String, scale: f32, color: Color },
}

/// Ordered draw commands for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    pub commands: Vec<DrawCmd>,
}

impl DisplayList {
    pub fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Color of the last `Clear`, if any
    pub fn clear_color(&self) -> Option<Color> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            DrawCmd::Clear(color) => Some(*color),
            _ => None,
        })
    }
}

pub fn behavior_color(behavior: Behavior) -> Color {
    match behavior {
        Behavior::Fear => colors::FEAR,
        Behavior::Aggression => colors::AGGRESSION,
    }
}

/// Build the display list for the current state
pub fn compose(state: &SimState) -> DisplayList {
    let mut list = DisplayList::default();
    list.push(DrawCmd::Clear(colors::BACKGROUND));

    let light = &state.config.light;
    list.push(DrawCmd::FillRect {
        min: light.min().as_vec2(),
        size: Vec2::splat(light.size as f32),
        color: colors::LIGHT,
    });

    for vehicle in &state.vehicles {
        draw_vehicle(&mut list, vehicle, state);
    }
    list
}

fn draw_vehicle(list: &mut DisplayList, vehicle: &Vehicle, state: &SimState) {
    let color = behavior_color(vehicle.behavior);

    let mut trail_color = color;
    trail_color[3] = colors::TRAIL_ALPHA;
    for run in vehicle.trajectory.runs(state.config.size()) {
        if run.len() < 2 {
            continue;
        }
        list.push(DrawCmd::Polyline {
            points: run.iter().map(|p| p.as_vec2()).collect(),
            width: TRAIL_WIDTH,
            color: trail_color,
        });
    }

    let center = vehicle.pos.as_vec2();
    list.push(DrawCmd::FillCircle {
        center,
        radius: BODY_RADIUS,
        color,
    });

    let sensors = vehicle.sensor_points();
    for tip in [sensors.right, sensors.left] {
        list.push(DrawCmd::Line {
            from: center,
            to: tip.as_vec2(),
            width: SENSOR_LINE_WIDTH,
            color: colors::SENSOR,
        });
    }

    list.push(DrawCmd::Text {
        origin: center + Vec2::new(LABEL_OFFSET.0, LABEL_OFFSET.1),
        text: vehicle.label.clone(),
        scale: LABEL_SCALE,
        color: colors::LABEL,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{WorldConfig, tick};
    use glam::DVec2;

    fn placed_state() -> SimState {
        let config = WorldConfig::default();
        let vehicles = vec![
            Vehicle::placed(Behavior::Fear, "2a", DVec2::new(100.0, 100.0), 0.0, &config),
            Vehicle::placed(Behavior::Aggression, "2b", DVec2::new(600.0, 450.0), 1.0, &config),
        ];
        SimState::from_vehicles(config, vehicles)
    }

    #[test]
    fn test_compose_starts_with_clear_and_light() {
        let list = compose(&placed_state());
        assert_eq!(list.commands[0], DrawCmd::Clear(colors::BACKGROUND));
        assert_eq!(
            list.commands[1],
            DrawCmd::FillRect {
                min: Vec2::new(390.0, 290.0),
                size: Vec2::splat(20.0),
                color: colors::LIGHT,
            }
        );
        assert_eq!(list.clear_color(), Some(colors::BACKGROUND));
    }

    #[test]
    fn test_each_vehicle_has_body_sensors_and_label() {
        let list = compose(&placed_state());

        let bodies: Vec<_> = list
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::FillCircle { center, radius, color } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect();
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0], (Vec2::new(100.0, 100.0), 10.0, colors::FEAR));
        assert_eq!(bodies[1].2, colors::AGGRESSION);

        let lines = list
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { width, color, .. } if *width == 2.0 && *color == colors::SENSOR))
            .count();
        assert_eq!(lines, 4);

        let labels: Vec<_> = list
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { origin, text, .. } => Some((*origin, text.as_str())),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec![(Vec2::new(90.0, 70.0), "2a"), (Vec2::new(590.0, 420.0), "2b")]);
    }

    #[test]
    fn test_fresh_vehicles_have_no_trail() {
        let list = compose(&placed_state());
        assert!(!list.commands.iter().any(|c| matches!(c, DrawCmd::Polyline { .. })));
    }

    #[test]
    fn test_trail_appears_after_ticks() {
        let mut state = placed_state();
        for _ in 0..10 {
            tick(&mut state);
        }
        let list = compose(&state);
        let trails: Vec<_> = list
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Polyline { points, color, .. } => Some((points.len(), color[3])),
                _ => None,
            })
            .collect();
        assert!(!trails.is_empty());
        assert!(trails.iter().all(|(_, alpha)| *alpha == colors::TRAIL_ALPHA));
        assert_eq!(trails.iter().map(|(n, _)| n).sum::<usize>(), 22);
    }

    #[test]
    fn test_trail_splits_across_wrap() {
        let config = WorldConfig::default();
        let mut v = Vehicle::placed(Behavior::Fear, "2a", DVec2::new(798.0, 50.0), 0.0, &config);
        for _ in 0..5 {
            v.drive(crate::sim::WheelSpeeds::new(1.0, 1.0), 0.0, &config);
        }
        let state = SimState::from_vehicles(config, vec![v]);
        let list = compose(&state);
        let runs = list
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Polyline { .. }))
            .count();
        assert_eq!(runs, 2);
    }
}
