//! Falling drop entities
//!
//! `DropField` is the authoritative store of live drops, indexed by id.
//! It knows nothing about score; the session interprets what it reports.

use std::collections::BTreeMap;

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

/// Stable drop identifier (never reused within a session)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DropId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DropKind {
    /// Clean water, worth collecting
    Beneficial,
    /// Pollutant, penalized when clicked
    Harmful,
}

/// A single falling drop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterDrop {
    pub id: DropId,
    pub kind: DropKind,
    /// x = horizontal position, y = vertical (grows downward)
    pub pos: Vec2,
    /// Clicked; waiting out the grace period
    pub collected: bool,
}

/// The set of live drops (sorted by id for deterministic iteration)
#[derive(Debug, Clone, Default)]
pub struct DropField {
    drops: BTreeMap<DropId, WaterDrop>,
    next_id: u32,
}

impl DropField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create one drop above the surface at a random x in `[0, max_x]`
    pub fn spawn<R: Rng>(
        &mut self,
        rng: &mut R,
        pollutant_chance: f64,
        max_x: f32,
        spawn_offset: f32,
    ) -> &WaterDrop {
        let kind = if rng.random::<f64>() < pollutant_chance {
            DropKind::Harmful
        } else {
            DropKind::Beneficial
        };
        let x = if max_x > 0.0 {
            rng.random_range(0.0..=max_x)
        } else {
            0.0
        };

        self.next_id += 1;
        let id = DropId(self.next_id);
        log::trace!("Spawned {:?} drop {} at x={:.1}", kind, id.0, x);
        self.drops.entry(id).or_insert(WaterDrop {
            id,
            kind,
            pos: Vec2::new(x, spawn_offset),
            collected: false,
        })
    }

    /// Move every uncollected drop down by `speed`.
    ///
    /// Drops that pass `floor` are removed and returned, in id order.
    pub fn advance(&mut self, speed: f32, floor: f32) -> Vec<WaterDrop> {
        for drop in self.drops.values_mut().filter(|d| !d.collected) {
            drop.pos.y += speed;
        }

        let exited: Vec<DropId> = self
            .drops
            .values()
            .filter(|d| !d.collected && d.pos.y > floor)
            .map(|d| d.id)
            .collect();

        exited
            .into_iter()
            .filter_map(|id| self.drops.remove(&id))
            .collect()
    }

    /// Mark a drop collected. `None` if unknown or already collected.
    pub fn collect(&mut self, id: DropId) -> Option<&WaterDrop> {
        let drop = self.drops.get_mut(&id)?;
        if drop.collected {
            return None;
        }
        drop.collected = true;
        Some(drop)
    }

    /// Final removal of a drop (after its grace period)
    pub fn remove(&mut self, id: DropId) -> Option<WaterDrop> {
        self.drops.remove(&id)
    }

    /// Remove every drop, returning their ids in order
    pub fn clear(&mut self) -> Vec<DropId> {
        let ids = self.drops.keys().copied().collect();
        self.drops.clear();
        ids
    }

    pub fn get(&self, id: DropId) -> Option<&WaterDrop> {
        self.drops.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WaterDrop> {
        self.drops.values()
    }

    pub fn len(&self) -> usize {
        self.drops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_spawn_position_and_ids() {
        let mut rng = rng();
        let mut field = DropField::new();
        for _ in 0..100 {
            let drop = field.spawn(&mut rng, 0.3, 760.0, -50.0);
            assert!((0.0..=760.0).contains(&drop.pos.x));
            assert_eq!(drop.pos.y, -50.0);
            assert!(!drop.collected);
        }
        assert_eq!(field.len(), 100);
        let ids: Vec<u32> = field.iter().map(|d| d.id.0).collect();
        assert_eq!(ids, (1..=100).collect::<Vec<_>>());
    }

    #[test]
    fn test_spawn_kind_follows_chance() {
        let mut rng = rng();
        let mut field = DropField::new();
        for _ in 0..20 {
            assert_eq!(field.spawn(&mut rng, 0.0, 100.0, 0.0).kind, DropKind::Beneficial);
            assert_eq!(field.spawn(&mut rng, 1.0, 100.0, 0.0).kind, DropKind::Harmful);
        }
    }

    #[test]
    fn test_spawn_on_narrow_surface() {
        let mut field = DropField::new();
        let drop = field.spawn(&mut rng(), 0.3, 0.0, -50.0);
        assert_eq!(drop.pos.x, 0.0);
    }

    #[test]
    fn test_advance_and_exit() {
        let mut rng = rng();
        let mut field = DropField::new();
        let id = field.spawn(&mut rng, 0.0, 100.0, -50.0).id;

        assert!(field.advance(30.0, 0.0).is_empty());
        assert_eq!(field.get(id).unwrap().pos.y, -20.0);
        // Landing exactly on the floor is still on the surface
        assert!(field.advance(20.0, 0.0).is_empty());

        let exited = field.advance(0.5, 0.0);
        assert_eq!(exited.len(), 1);
        assert_eq!(exited[0].id, id);
        assert!(field.is_empty());
    }

    #[test]
    fn test_collected_drops_freeze() {
        let mut rng = rng();
        let mut field = DropField::new();
        let id = field.spawn(&mut rng, 0.0, 100.0, 0.0).id;

        assert!(field.collect(id).is_some());
        // Second click is a no-op
        assert!(field.collect(id).is_none());

        assert!(field.advance(1000.0, 10.0).is_empty());
        assert_eq!(field.get(id).unwrap().pos.y, 0.0);

        assert!(field.remove(id).is_some());
        assert!(field.remove(id).is_none());
        assert!(field.collect(id).is_none());
    }

    #[test]
    fn test_clear() {
        let mut rng = rng();
        let mut field = DropField::new();
        field.spawn(&mut rng, 0.5, 100.0, 0.0);
        field.spawn(&mut rng, 0.5, 100.0, 0.0);
        assert_eq!(field.clear(), vec![DropId(1), DropId(2)]);
        assert!(field.is_empty());
        // Ids keep counting after a clear
        assert_eq!(field.spawn(&mut rng, 0.5, 100.0, 0.0).id, DropId(3));
    }
}
