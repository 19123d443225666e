//! Two-pass allocation of scarce resource pools across priority-sorted zones.
//!
//! Pass 1 hands each zone, in table order, `floor(pool * score / total)`,
//! capped by its need and by what is left. Pass 2 gives whatever pass 1
//! left over to the zones with the largest outstanding deficit first.

use aidra_utils::{rounding::round_count, stats::count_total};
use aidra_zone::{columns, ZoneTable};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{column, require, PipelineError, Stage};

/// Default ambulance pool size.
pub const DEFAULT_AMBULANCES: u64 = 20;

/// Default rescue team pool size.
pub const DEFAULT_RESCUE_TEAMS: u64 = 10;

/// Resource pools available to one allocation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePools {
    pub ambulances: u64,
    pub rescue_teams: u64,
}

impl Default for ResourcePools {
    fn default() -> Self {
        Self {
            ambulances: DEFAULT_AMBULANCES,
            rescue_teams: DEFAULT_RESCUE_TEAMS,
        }
    }
}

/// Distribute `pool` units across zones given their priority `scores` and
/// `needs`, both in allocation order.
///
/// The result never exceeds a zone's need and never sums past `pool`.
pub fn allocate_pool(scores: &[f64], needs: &[u64], pool: u64) -> Vec<u64> {
    debug_assert_eq!(scores.len(), needs.len());
    let mut allocated = vec![0u64; needs.len()];
    let mut remaining = pool;

    let total: f64 = scores.iter().sum();
    if total > 0.0 {
        for (i, (&score, &need)) in scores.iter().zip(needs).enumerate() {
            if remaining == 0 {
                break;
            }
            let share = (pool as f64 * (score / total)).floor();
            let share = if share > 0.0 { share as u64 } else { 0 };
            let give = share.min(need).min(remaining);
            allocated[i] = give;
            remaining -= give;
        }
    } else {
        warn!("Total priority is zero, allocating by deficit only");
    }

    if remaining > 0 {
        let mut by_deficit: Vec<usize> = (0..needs.len()).collect();
        by_deficit.sort_by_key(|&i| std::cmp::Reverse(needs[i].saturating_sub(allocated[i])));
        for i in by_deficit {
            if remaining == 0 {
                break;
            }
            let give = needs[i].saturating_sub(allocated[i]).min(remaining);
            allocated[i] += give;
            remaining -= give;
        }
    }

    allocated
}

fn needs(table: &ZoneTable, name: &str) -> Result<Vec<u64>, PipelineError> {
    match table.counts(name) {
        Some(counts) => Ok(counts.to_vec()),
        None => Ok(column(table, Stage::Allocation, name)?
            .into_iter()
            .map(round_count)
            .collect()),
    }
}

/// Allocate both pools over a priority-sorted `table` and add the allocated
/// and deficit columns.
pub fn allocate_resources(table: &ZoneTable, pools: ResourcePools) -> Result<ZoneTable, PipelineError> {
    require(
        table,
        Stage::Allocation,
        &[
            columns::PRIORITY_SCORE,
            columns::AMBULANCE_NEEDED,
            columns::RESCUE_TEAMS_NEEDED,
        ],
    )?;

    let scores = column(table, Stage::Allocation, columns::PRIORITY_SCORE)?;
    let amb_need = needs(table, columns::AMBULANCE_NEEDED)?;
    let res_need = needs(table, columns::RESCUE_TEAMS_NEEDED)?;

    let amb_alloc = allocate_pool(&scores, &amb_need, pools.ambulances);
    let res_alloc = allocate_pool(&scores, &res_need, pools.rescue_teams);

    let deficit = |need: &[u64], alloc: &[u64]| -> Vec<u64> {
        need.iter().zip(alloc).map(|(n, a)| n.saturating_sub(*a)).collect()
    };
    let amb_deficit = deficit(&amb_need, &amb_alloc);
    let res_deficit = deficit(&res_need, &res_alloc);

    info!(
        "Allocation complete: {}/{} ambulances, {}/{} rescue teams",
        count_total(&amb_alloc),
        pools.ambulances,
        count_total(&res_alloc),
        pools.rescue_teams
    );

    let mut out = table.clone();
    out.set_counts(columns::ALLOCATED_AMBULANCES, amb_alloc)?;
    out.set_counts(columns::ALLOCATED_RESCUE_TEAMS, res_alloc)?;
    out.set_counts(columns::AMBULANCE_DEFICIT, amb_deficit)?;
    out.set_counts(columns::RESCUE_DEFICIT, res_deficit)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_trace() {
        let alloc = allocate_pool(&[0.6, 0.1, 0.3], &[10, 4, 6], 8);
        assert_eq!(alloc, vec![6, 0, 2]);
    }

    #[test]
    fn test_zero_pool() {
        assert_eq!(allocate_pool(&[1.0, 0.5], &[3, 2], 0), vec![0, 0]);
    }

    #[test]
    fn test_zero_priority_uses_deficit_order() {
        // deficit-descending, ties in table order
        let alloc = allocate_pool(&[0.0, 0.0, 0.0], &[2, 5, 5], 7);
        assert_eq!(alloc, vec![0, 5, 2]);
    }

    #[test]
    fn test_pool_larger_than_need() {
        let alloc = allocate_pool(&[1.0, 0.5], &[3, 2], 100);
        assert_eq!(alloc, vec![3, 2]);
    }

    #[test]
    fn test_share_capped_by_need_then_redistributed() {
        // pass 1: min(floor(10 * 0.8), 1) = 1, floor(10 * 0.2) = 2; pass 2 tops up zone 2
        let alloc = allocate_pool(&[0.8, 0.2], &[1, 9], 10);
        assert_eq!(alloc, vec![1, 9]);
    }

    #[test]
    fn test_negative_score_gets_nothing_in_pass_one() {
        let alloc = allocate_pool(&[1.0, -0.5], &[1, 1], 1);
        assert_eq!(alloc.iter().sum::<u64>(), 1);
    }

    fn sorted_table() -> ZoneTable {
        let mut t = ZoneTable::new(vec!["A".into(), "B".into(), "C".into()]).unwrap();
        t.set_real(columns::PRIORITY_SCORE, vec![0.6, 0.1, 0.3]).unwrap();
        t.set_counts(columns::AMBULANCE_NEEDED, vec![10, 4, 6]).unwrap();
        t.set_counts(columns::RESCUE_TEAMS_NEEDED, vec![1, 1, 1]).unwrap();
        t
    }

    #[test]
    fn test_allocate_resources_columns() {
        let pools = ResourcePools {
            ambulances: 8,
            rescue_teams: 5,
        };
        let out = allocate_resources(&sorted_table(), pools).unwrap();
        assert_eq!(out.counts(columns::ALLOCATED_AMBULANCES), Some(&[6u64, 0, 2][..]));
        assert_eq!(out.counts(columns::AMBULANCE_DEFICIT), Some(&[4u64, 4, 4][..]));
        assert_eq!(out.counts(columns::ALLOCATED_RESCUE_TEAMS), Some(&[1u64, 1, 1][..]));
        assert_eq!(out.counts(columns::RESCUE_DEFICIT), Some(&[0u64, 0, 0][..]));
    }

    #[test]
    fn test_real_needs_are_rounded() {
        let mut t = sorted_table();
        t.set_real(columns::AMBULANCE_NEEDED, vec![10.0, 4.0, 6.0]).unwrap();
        let out = allocate_resources(&t, ResourcePools { ambulances: 8, rescue_teams: 0 }).unwrap();
        assert_eq!(out.counts(columns::ALLOCATED_AMBULANCES), Some(&[6u64, 0, 2][..]));
        assert_eq!(out.counts(columns::RESCUE_DEFICIT), Some(&[1u64, 1, 1][..]));
    }

    #[test]
    fn test_missing_need_column() {
        let mut t = sorted_table();
        t.remove_column(columns::RESCUE_TEAMS_NEEDED);
        let err = allocate_resources(&t, ResourcePools::default()).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingColumns { stage: Stage::Allocation, ref missing }
                if missing == &["Rescue_Teams_Needed"]
        ));
    }
}
