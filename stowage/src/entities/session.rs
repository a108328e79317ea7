use anyhow::{Context, Result, ensure};
use log::debug;

use crate::entities::{Container, Item, PlacedItem};
use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Aabb, Point};
use crate::placement::{GridScan, PlacementPolicy, Rotation, feasible_orientations};
use crate::util::assertions;

/// Outcome of a fit query or commit.
///
/// `NoFit` is a normal result of a full or incompatible container, never an
/// error: callers distinguish "doesn't fit" from "invalid input" by the
/// `Result` layer above this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitResult {
    Fit { position: Point, rotation: Rotation },
    NoFit,
}

impl FitResult {
    pub fn fits(&self) -> bool {
        matches!(self, FitResult::Fit { .. })
    }
}

/// The packed state of one container instance: the items placed so far, in
/// placement order, plus running volume totals.
///
/// All mutating operations take `&mut self`, so at most one mutation can be
/// in flight per session; `check_fit` takes `&self` and never observes a
/// half-updated item list. A session starts `Empty`, becomes `Populated` by
/// commits and returns to `Empty` on [`PackingSession::clear`].
#[derive(Clone, Debug)]
pub struct PackingSession<P: PlacementPolicy = GridScan> {
    pub container: Container,
    placed_items: Vec<PlacedItem>,
    used_volume: u64,
    policy: P,
}

impl PackingSession<GridScan> {
    pub fn new(container: Container) -> Self {
        Self::with_policy(container, GridScan::default())
    }
}

impl<P: PlacementPolicy> PackingSession<P> {
    pub fn with_policy(container: Container, policy: P) -> Self {
        PackingSession {
            container,
            placed_items: Vec::new(),
            used_volume: 0,
            policy,
        }
    }

    /// Searches for a position and rotation for `item` against the current
    /// packed state. Read-only: calling it any number of times without an
    /// intervening commit yields identical results.
    ///
    /// Orientations are tried in the fixed order of
    /// [`Rotation::UPRIGHT_SET`]; the first one with a valid position wins
    /// (first-fit, not best-fit). If no orientation passes the envelope
    /// prefilter, returns `NoFit` without running any position search.
    pub fn check_fit(&self, item: &Item) -> FitResult {
        for oriented in feasible_orientations(item.dims, self.container.dims) {
            let position =
                self.policy
                    .find_position(oriented.dims, self.container.dims, &self.placed_items);
            if let Some(position) = position {
                return FitResult::Fit {
                    position,
                    rotation: oriented.rotation,
                };
            }
        }
        FitResult::NoFit
    }

    /// Runs the same search as [`PackingSession::check_fit`] and, on
    /// success, appends the placed item and updates the volume tallies. On
    /// `NoFit` the session is unchanged.
    pub fn commit(&mut self, item: &Item) -> FitResult {
        let result = self.check_fit(item);
        if let FitResult::Fit { position, rotation } = result {
            self.placed_items
                .push(PlacedItem::new(item.clone(), position, rotation));
            self.used_volume += item.volume();
            debug!(
                "[SESSION] placed item {} at {} {} ({} items, {}% used)",
                item.id,
                position,
                rotation,
                self.placed_items.len(),
                self.utilization()
            );
            debug_assert!(assertions::placements_disjoint(&self.placed_items));
            debug_assert!(assertions::placements_within_container(
                &self.placed_items,
                self.container.dims
            ));
            debug_assert!(assertions::volume_tally_matches(
                &self.placed_items,
                self.used_volume
            ));
        }
        result
    }

    /// Removes the first placed unit with the given item id, decrementing
    /// the tallies by its as-placed volume. Freed space is not re-packed.
    pub fn remove(&mut self, item_id: &str) -> Option<PlacedItem> {
        let idx = self
            .placed_items
            .iter()
            .position(|pi| pi.item.id == item_id)?;
        let pi = self.placed_items.remove(idx);
        self.used_volume -= pi.volume();
        debug!(
            "[SESSION] removed item {} from {} ({} items left)",
            pi.item.id,
            pi.position,
            self.placed_items.len()
        );
        debug_assert!(assertions::volume_tally_matches(
            &self.placed_items,
            self.used_volume
        ));
        Some(pi)
    }

    /// Moves an already placed unit to an explicit position, keeping its
    /// rotation. Equivalent to remove + re-add: the unit moves to the end
    /// of the placement order. The target is validated for bounds and
    /// collisions before any mutation; on error the session is unchanged.
    pub fn reposition(&mut self, item_id: &str, position: Point) -> Result<()> {
        let idx = self
            .placed_items
            .iter()
            .position(|pi| pi.item.id == item_id)
            .with_context(|| format!("no placed item with id {item_id}"))?;

        let target = Aabb::from_min_corner(position, self.placed_items[idx].oriented_dims());
        let envelope = Aabb::from_min_corner(Point::ORIGIN, self.container.dims);
        ensure!(
            envelope.relation_to(target) == GeoRelation::Surrounding,
            "target position {position} leaves the container envelope"
        );
        let collision = self
            .placed_items
            .iter()
            .enumerate()
            .any(|(i, pi)| i != idx && pi.bbox.collides_with(&target));
        ensure!(
            !collision,
            "target position {position} collides with a placed item"
        );

        let pi = self.placed_items.remove(idx);
        self.placed_items
            .push(PlacedItem::new(pi.item, position, pi.rotation));
        debug_assert!(assertions::placements_disjoint(&self.placed_items));
        Ok(())
    }

    /// Resets to the `Empty` state over the same container.
    pub fn clear(&mut self) {
        self.placed_items.clear();
        self.used_volume = 0;
        debug!("[SESSION] cleared container {}", self.container.id);
    }

    /// The placed items, in placement order.
    pub fn placed_items(&self) -> &[PlacedItem] {
        &self.placed_items
    }

    /// True if no items are placed.
    pub fn is_empty(&self) -> bool {
        self.placed_items.is_empty()
    }

    pub fn total_volume(&self) -> u64 {
        self.container.volume()
    }

    pub fn used_volume(&self) -> u64 {
        self.used_volume
    }

    pub fn remaining_volume(&self) -> u64 {
        self.total_volume() - self.used_volume
    }

    /// Used volume as a percentage of total container volume, rounded to
    /// the nearest integer.
    pub fn utilization(&self) -> u8 {
        let pct = self.used_volume as f64 / self.total_volume() as f64 * 100.0;
        pct.round() as u8
    }

    /// Sum of the placed items' weights in kilograms. Informational; the
    /// engine does not enforce the container's payload limit.
    pub fn placed_weight(&self) -> f64 {
        self.placed_items.iter().map(|pi| pi.item.weight).sum()
    }
}
