//! Road health classification.
//!
//! Splits a region's planned roads into two damage bands, both sorted by
//! distance from the colony anchor:
//!
//! - **critical**: `hits < critical_threshold * hits_max`
//! - **repairable**: `hits < repair_threshold * hits_max`
//!
//! and derives the total energy needed to restore every repairable road.
//! Results are cached per region for `cache_ttl` cycles.

use super::PlanningContext;
use crate::cache::CycleCache;
use crate::config::RepaveConfig;
use crate::models::{Region, RoadSegment};

const CRITICAL_KEY: &str = "criticalRoads";
const REPAIRABLE_KEY: &str = "repairableRoads";
const ENERGY_KEY: &str = "energyToRepave";

/// Cached road damage classifier.
#[derive(Debug, Clone)]
pub struct RoadHealthClassifier {
    critical_threshold: f64,
    repair_threshold: f64,
    repair_power: f64,
    ttl: u64,
    roads: CycleCache<Vec<RoadSegment>>,
    costs: CycleCache<f64>,
}

impl RoadHealthClassifier {
    /// Creates a classifier with the thresholds and TTL from `config`.
    pub fn new(config: &RepaveConfig) -> Self {
        Self {
            critical_threshold: config.critical_threshold,
            repair_threshold: config.repair_threshold,
            repair_power: config.repair_power,
            ttl: config.cache_ttl,
            roads: CycleCache::new(),
            costs: CycleCache::new(),
        }
    }

    /// Health restored per unit of energy.
    pub fn repair_power(&self) -> f64 {
        self.repair_power
    }

    /// Planned roads below the critical threshold, nearest first.
    pub fn critical_roads(&mut self, ctx: &PlanningContext<'_>, region: &Region) -> Vec<RoadSegment> {
        let threshold = self.critical_threshold;
        self.roads.get_or_compute(
            &region.name.to_string(),
            CRITICAL_KEY,
            self.ttl,
            ctx.cycle,
            || classify(ctx, region, threshold),
        )
    }

    /// Planned roads below the repair threshold, nearest first.
    pub fn repairable_roads(&mut self, ctx: &PlanningContext<'_>, region: &Region) -> Vec<RoadSegment> {
        let threshold = self.repair_threshold;
        self.roads.get_or_compute(
            &region.name.to_string(),
            REPAIRABLE_KEY,
            self.ttl,
            ctx.cycle,
            || classify(ctx, region, threshold),
        )
    }

    /// Energy needed to fully restore every repairable road in `region`.
    pub fn energy_to_repave(&mut self, ctx: &PlanningContext<'_>, region: &Region) -> f64 {
        let owner = region.name.to_string();
        if let Some(&cost) = self.costs.get(&owner, ENERGY_KEY, self.ttl, ctx.cycle) {
            return cost;
        }

        let repair_power = self.repair_power;
        let cost = self
            .repairable_roads(ctx, region)
            .iter()
            .map(|road| road.repair_cost(repair_power))
            .sum::<f64>();
        self.costs.insert(&owner, ENERGY_KEY, ctx.cycle, cost);
        cost
    }

    /// Forgets cached results for one region.
    pub fn invalidate(&mut self, region: &Region) {
        let owner = region.name.to_string();
        self.roads.invalidate(&owner);
        self.costs.invalidate(&owner);
    }

    /// Drops results that are stale at `cycle`.
    pub fn purge_expired(&mut self, cycle: u64) -> usize {
        self.roads.purge_expired(cycle, self.ttl) + self.costs.purge_expired(cycle, self.ttl)
    }

    /// Number of cached results.
    pub fn cached_len(&self) -> usize {
        self.roads.len() + self.costs.len()
    }
}

fn classify(ctx: &PlanningContext<'_>, region: &Region, threshold: f64) -> Vec<RoadSegment> {
    let anchor = ctx.colony.anchor;
    let mut roads: Vec<RoadSegment> = region
        .roads
        .iter()
        .filter(|road| road.below_fraction(threshold))
        .filter(|road| ctx.road_plan.road_should_be_here(&road.pos))
        .cloned()
        .collect();
    roads.sort_by_key(|road| ctx.topology.distance(&anchor, &road.pos));
    roads
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Colony, Position, RoomName};
    use crate::world::{AcceptAllRoads, PlannedRoads, WorldTopology};

    fn room() -> RoomName {
        "W1N1".parse().unwrap()
    }

    fn pos(x: u8, y: u8) -> Position {
        Position::new(room(), x, y)
    }

    fn road(id: &str, x: u8, hits: u32) -> RoadSegment {
        RoadSegment::new(id, pos(x, 10), 1000).with_hits(hits)
    }

    fn colony_with(roads: Vec<RoadSegment>) -> Colony {
        Colony::new("home", pos(0, 10)).with_region(Region::new(room()).with_roads(roads))
    }

    fn classifier() -> RoadHealthClassifier {
        RoadHealthClassifier::new(&RepaveConfig::default().with_repair_power(1.0))
    }

    #[test]
    fn test_bands_and_order() {
        let colony = colony_with(vec![
            road("far_critical", 30, 100),
            road("healthy", 5, 950),
            road("near_worn", 3, 800),
            road("mid_critical", 10, 200),
            road("exact_critical", 12, 250),
        ]);
        let ctx = PlanningContext::new(&colony, &WorldTopology, &AcceptAllRoads);
        let region = &colony.regions[0];
        let mut c = classifier();

        let critical: Vec<String> = c.critical_roads(&ctx, region).into_iter().map(|r| r.id).collect();
        assert_eq!(critical, vec!["mid_critical", "far_critical"]);

        let repairable: Vec<String> =
            c.repairable_roads(&ctx, region).into_iter().map(|r| r.id).collect();
        assert_eq!(
            repairable,
            vec!["near_worn", "mid_critical", "exact_critical", "far_critical"]
        );
    }

    #[test]
    fn test_critical_subset_of_repairable() {
        let colony = colony_with((0..40).map(|i| road(&format!("r{i}"), i, u32::from(i) * 25)).collect());
        let ctx = PlanningContext::new(&colony, &WorldTopology, &AcceptAllRoads);
        let region = &colony.regions[0];
        let mut c = classifier();

        let repairable = c.repairable_roads(&ctx, region);
        for r in c.critical_roads(&ctx, region) {
            assert!(repairable.contains(&r));
        }
    }

    #[test]
    fn test_road_plan_filters_abandoned_roads() {
        let colony = colony_with(vec![road("kept", 3, 100), road("abandoned", 4, 100)]);
        let plan = PlannedRoads::new().with_tile(pos(3, 10));
        let ctx = PlanningContext::new(&colony, &WorldTopology, &plan);
        let mut c = classifier();

        let ids: Vec<String> = c
            .critical_roads(&ctx, &colony.regions[0])
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["kept"]);
    }

    #[test]
    fn test_energy_to_repave() {
        let colony = colony_with(vec![road("a", 3, 800), road("b", 4, 100), road("c", 5, 1000)]);
        let ctx = PlanningContext::new(&colony, &WorldTopology, &AcceptAllRoads);
        let mut c = RoadHealthClassifier::new(&RepaveConfig::default().with_repair_power(100.0));

        // (1000-800)/100 + (1000-100)/100
        assert!((c.energy_to_repave(&ctx, &colony.regions[0]) - 11.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_region() {
        let colony = colony_with(Vec::new());
        let ctx = PlanningContext::new(&colony, &WorldTopology, &AcceptAllRoads);
        let mut c = classifier();
        let region = &colony.regions[0];

        assert!(c.critical_roads(&ctx, region).is_empty());
        assert!(c.repairable_roads(&ctx, region).is_empty());
        assert!((c.energy_to_repave(&ctx, region) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_cached_within_ttl() {
        let colony = colony_with(vec![road("a", 3, 100)]);
        let ctx = PlanningContext::new(&colony, &WorldTopology, &AcceptAllRoads).at_cycle(100);
        let mut c = classifier();

        let first = c.critical_roads(&ctx, &colony.regions[0]);

        // Same region name, repaired roads: a fresh cache entry still wins.
        let repaired = colony_with(vec![road("a", 3, 1000)]);
        let later = PlanningContext::new(&repaired, &WorldTopology, &AcceptAllRoads).at_cycle(124);
        assert_eq!(c.critical_roads(&later, &repaired.regions[0]), first);

        let expired = later.at_cycle(125);
        assert!(c.critical_roads(&expired, &repaired.regions[0]).is_empty());
    }

    #[test]
    fn test_energy_cached_within_ttl() {
        let colony = colony_with(vec![road("a", 3, 800), road("b", 4, 100)]);
        let ctx = PlanningContext::new(&colony, &WorldTopology, &AcceptAllRoads).at_cycle(100);
        let mut c = classifier();
        assert!((c.energy_to_repave(&ctx, &colony.regions[0]) - 1100.0).abs() < 1e-10);

        let repaired = colony_with(vec![road("a", 3, 1000), road("b", 4, 850)]);
        let region = &repaired.regions[0];
        let later = PlanningContext::new(&repaired, &WorldTopology, &AcceptAllRoads).at_cycle(124);
        assert!((c.energy_to_repave(&later, region) - 1100.0).abs() < 1e-10);

        let expired = later.at_cycle(125);
        assert!((c.energy_to_repave(&expired, region) - 150.0).abs() < 1e-10);
        assert!((c.energy_to_repave(&expired.at_cycle(149), region) - 150.0).abs() < 1e-10);
    }

    #[test]
    fn test_invalidate_and_purge() {
        let colony = colony_with(vec![road("a", 3, 100)]);
        let ctx = PlanningContext::new(&colony, &WorldTopology, &AcceptAllRoads);
        let mut c = classifier();
        let region = &colony.regions[0];

        c.critical_roads(&ctx, region);
        c.energy_to_repave(&ctx, region);
        assert_eq!(c.cached_len(), 3);

        c.invalidate(region);
        assert_eq!(c.cached_len(), 0);

        c.critical_roads(&ctx, region);
        assert_eq!(c.purge_expired(25), 1);
        assert_eq!(c.cached_len(), 0);
    }
}
