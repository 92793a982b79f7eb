// Copyright 2026 the Floormap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing goals and the per-floor goal set.

use alloc::string::String;
use alloc::vec::Vec;

use floormap_convert::CoordinateConverter;
use hashbrown::HashMap;
use kurbo::Point;

/// The role of a goal within a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GoalKind {
    /// The route's starting point.
    Start,
    /// An intermediate stop.
    Target,
    /// The route's final destination.
    End,
}

/// A target point for the pathfinding engine to route toward.
#[derive(Clone, Debug, PartialEq)]
pub struct Goal {
    /// Stable identifier, unique within a [`GoalSet`].
    pub id: String,
    /// Goal position. Meter space by convention; [`Goal::to_pixel_space`]
    /// produces the engine-facing pixel variant.
    pub position: Point,
    /// Role of the goal within the route.
    pub kind: GoalKind,
    /// Floor level the goal belongs to.
    pub floor_id: i64,
}

impl Goal {
    /// Returns a copy with the position converted from meter to pixel space.
    ///
    /// The pathfinding engine consumes pixel-space goals with a y-down axis;
    /// the converter applies the floor-height flip.
    #[must_use]
    pub fn to_pixel_space(&self, converter: &CoordinateConverter) -> Self {
        Self {
            position: converter.meter_point_to_pixel(self.position),
            ..self.clone()
        }
    }

    /// Returns a copy with the position converted from pixel to meter space.
    #[must_use]
    pub fn to_meter_space(&self, converter: &CoordinateConverter) -> Self {
        Self {
            position: converter.pixel_point_to_meter(self.position),
            ..self.clone()
        }
    }
}

/// An id-keyed collection of goals spanning all floors of a site.
///
/// The pathfinding engine only ever sees the goals of the active floor;
/// [`GoalSet::on_floor`] performs that filtering. Inserting a goal with an
/// existing id replaces it.
#[derive(Clone, Debug, Default)]
pub struct GoalSet {
    goals: HashMap<String, Goal>,
}

impl GoalSet {
    /// Creates an empty goal set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of goals across all floors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Returns `true` if the set holds no goals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Inserts a goal, replacing any goal with the same id.
    pub fn insert(&mut self, goal: Goal) {
        self.goals.insert(goal.id.clone(), goal);
    }

    /// Inserts every goal in `goals`, replacing on id collisions.
    pub fn extend(&mut self, goals: impl IntoIterator<Item = Goal>) {
        for goal in goals {
            self.insert(goal);
        }
    }

    /// Replaces the entire contents of the set with `goals`.
    pub fn replace_with(&mut self, goals: impl IntoIterator<Item = Goal>) {
        self.goals.clear();
        self.extend(goals);
    }

    /// Removes the goal with the given id, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<Goal> {
        self.goals.remove(id)
    }

    /// Returns the goal with the given id, if present.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Goal> {
        self.goals.get(id)
    }

    /// Returns the goals belonging to `floor_id`.
    ///
    /// Order is unspecified; callers that need a stable order sort by id or
    /// route position themselves.
    #[must_use]
    pub fn on_floor(&self, floor_id: i64) -> Vec<&Goal> {
        self.goals.values().filter(|g| g.floor_id == floor_id).collect()
    }
}
