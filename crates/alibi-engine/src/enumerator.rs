//! World enumeration.
//!
//! Worlds are produced lazily: every `k`-combination of culprits crossed
//! with every liar subset whose size falls in the admissible range. The
//! search is brute force, `C(N,K) * 2^N` candidates at most, which is
//! small for the roster sizes in use (N <= 7). Larger rosters would need
//! incremental consistency propagation instead.
//!
//! Liar subsets are u64 masks over seating positions, so enumeration is
//! limited to `MAX_SUSPECTS` (N < 64). Beyond that nothing is enumerated
//! and `world_count` reports `None`.
//!
//! Enumeration order is an implementation detail.

use std::ops::RangeInclusive;

use alibi_core::{LiarConstraints, SuspectId, SuspectSet, World};

/// Largest seating the enumerator handles.
pub const MAX_SUSPECTS: usize = 63;

/// Lazy iterator over every admissible world.
#[derive(Debug, Clone)]
pub struct Worlds<'a> {
    suspect_ids: &'a [SuspectId],
    /// Current culprit combination as ascending positions; `None` once exhausted
    combination: Option<Vec<usize>>,
    culprits: SuspectSet,
    /// Next liar mask to try, over positions in `suspect_ids`
    liar_mask: u64,
    liar_mask_end: u64,
    liar_range: RangeInclusive<usize>,
}

impl<'a> Worlds<'a> {
    fn new(suspect_ids: &'a [SuspectId], culprit_count: usize, constraints: &LiarConstraints) -> Self {
        let n = suspect_ids.len();
        if n > MAX_SUSPECTS {
            tracing::warn!(suspects = n, max = MAX_SUSPECTS, "Too many suspects to enumerate");
        }

        let combination = (culprit_count <= n && n <= MAX_SUSPECTS).then(|| (0..culprit_count).collect::<Vec<_>>());
        let culprits = combination
            .as_deref()
            .map(|c| culprit_set(suspect_ids, c))
            .unwrap_or_default();

        Self {
            suspect_ids,
            combination,
            culprits,
            liar_mask: 0,
            liar_mask_end: if n <= MAX_SUSPECTS { 1u64 << n } else { 0 },
            liar_range: constraints.liar_range(n),
        }
    }

    fn liars_for(&self, mask: u64) -> SuspectSet {
        self.suspect_ids
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1u64 << i) != 0)
            .map(|(_, &id)| id)
            .collect()
    }

    /// Step to the next culprit combination in lexicographic order.
    fn advance_combination(&mut self) {
        let n = self.suspect_ids.len();
        let Some(combo) = self.combination.as_mut() else {
            return;
        };
        let k = combo.len();

        let Some(i) = (0..k).rev().find(|&i| combo[i] < n - k + i) else {
            self.combination = None;
            return;
        };
        combo[i] += 1;
        for j in i + 1..k {
            combo[j] = combo[j - 1] + 1;
        }
        self.culprits = culprit_set(self.suspect_ids, combo);
        self.liar_mask = 0;
    }
}

impl Iterator for Worlds<'_> {
    type Item = World;

    fn next(&mut self) -> Option<World> {
        loop {
            self.combination.as_ref()?;

            while self.liar_mask < self.liar_mask_end {
                let mask = self.liar_mask;
                self.liar_mask += 1;
                if self.liar_range.contains(&(mask.count_ones() as usize)) {
                    return Some(World::new(self.culprits, self.liars_for(mask)));
                }
            }

            self.advance_combination();
        }
    }
}

fn culprit_set(suspect_ids: &[SuspectId], positions: &[usize]) -> SuspectSet {
    positions.iter().map(|&i| suspect_ids[i]).collect()
}

/// Every world with exactly `culprit_count` culprits and an admissible
/// number of liars.
#[must_use]
pub fn generate_all_possible_worlds<'a>(
    suspect_ids: &'a [SuspectId],
    culprit_count: usize,
    constraints: &LiarConstraints,
) -> Worlds<'a> {
    Worlds::new(suspect_ids, culprit_count, constraints)
}

/// Exact number of worlds `generate_all_possible_worlds` yields, or `None`
/// when the seating exceeds `MAX_SUSPECTS` or the count overflows u64.
#[must_use]
pub fn world_count(suspects: usize, culprit_count: usize, constraints: &LiarConstraints) -> Option<u64> {
    if suspects > MAX_SUSPECTS {
        return None;
    }
    let liar_subsets = constraints
        .liar_range(suspects)
        .try_fold(0u64, |acc, l| acc.checked_add(binomial(suspects, l)?))?;
    binomial(suspects, culprit_count)?.checked_mul(liar_subsets)
}

/// `C(n, k)`, or `None` if it does not fit in u64.
fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    // Partial products are C(n, i) for i < k, never larger than the result
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * (n - i) as u128 / (i + 1) as u128;
        if acc > u128::from(u64::MAX) {
            return None;
        }
    }
    u64::try_from(acc).ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn ids(raw: &[u8]) -> Vec<SuspectId> {
        raw.iter().copied().map(SuspectId).collect()
    }

    #[test]
    fn test_three_suspects_one_culprit_at_most_one_liar() {
        let order = ids(&[1, 2, 3]);
        let worlds: Vec<World> =
            generate_all_possible_worlds(&order, 1, &LiarConstraints::liars(0, 1)).collect();

        // 3 culprit choices x (1 + 3) liar subsets
        assert_eq!(worlds.len(), 12);
        let distinct: HashSet<World> = worlds.iter().copied().collect();
        assert_eq!(distinct.len(), 12);

        for id in &order {
            assert_eq!(worlds.iter().filter(|w| w.is_culprit(*id)).count(), 4);
        }
        assert!(worlds.iter().all(|w| w.culprits.len() == 1 && w.liars.len() <= 1));
    }

    #[test]
    fn test_unconstrained_is_full_power_set() {
        let order = ids(&[1, 2, 3, 4]);
        let count = generate_all_possible_worlds(&order, 2, &LiarConstraints::any()).count();
        assert_eq!(count, 6 * 16);
        assert_eq!(world_count(4, 2, &LiarConstraints::any()), Some(96));
    }

    #[test]
    fn test_truth_bounds_filter_liars() {
        let order = ids(&[1, 2, 3, 4, 5]);
        let constraints = LiarConstraints {
            min_truths: Some(4),
            ..LiarConstraints::default()
        };
        let worlds: Vec<World> = generate_all_possible_worlds(&order, 1, &constraints).collect();
        assert!(worlds.iter().all(|w| w.liars.len() <= 1));
        assert_eq!(worlds.len(), 5 * 6);
    }

    #[test]
    fn test_world_count_matches_enumeration() {
        let order = ids(&[1, 2, 3, 4, 5, 6, 7]);
        let constraints = LiarConstraints::liars(2, 4);
        let enumerated = generate_all_possible_worlds(&order, 2, &constraints).count() as u64;
        assert_eq!(Some(enumerated), world_count(7, 2, &constraints));
        // C(7,2) * (C(7,2) + C(7,3) + C(7,4))
        assert_eq!(enumerated, 21 * (21 + 35 + 35));
    }

    #[test]
    fn test_degenerate_counts() {
        let order = ids(&[1, 2]);
        assert_eq!(generate_all_possible_worlds(&order, 3, &LiarConstraints::any()).count(), 0);

        let none_guilty: Vec<World> =
            generate_all_possible_worlds(&order, 0, &LiarConstraints::liars(0, 0)).collect();
        assert_eq!(none_guilty, vec![World::default()]);

        let empty_range = LiarConstraints::liars(2, 1);
        assert_eq!(generate_all_possible_worlds(&order, 1, &empty_range).count(), 0);
    }

    #[test]
    fn test_ids_need_not_be_contiguous() {
        let order = ids(&[7, 2, 5]);
        let worlds: Vec<World> =
            generate_all_possible_worlds(&order, 1, &LiarConstraints::liars(1, 1)).collect();
        assert_eq!(worlds.len(), 9);
        assert!(worlds
            .iter()
            .all(|w| w.culprits.is_subset(&order.iter().copied().collect())));
    }

    #[test]
    fn test_oversized_seating_is_not_enumerated() {
        let order: Vec<SuspectId> = (0..64).map(SuspectId).collect();
        assert_eq!(generate_all_possible_worlds(&order, 1, &LiarConstraints::any()).count(), 0);
        assert_eq!(world_count(64, 1, &LiarConstraints::any()), None);
        assert_eq!(world_count(200, 1, &LiarConstraints::any()), None);
    }

    #[test]
    fn test_world_count_checks_overflow() {
        // 63 * 2^63 does not fit in u64
        assert_eq!(world_count(63, 1, &LiarConstraints::any()), None);
        // C(63,31) * C(63,0) fits
        assert_eq!(
            world_count(63, 31, &LiarConstraints::liars(0, 0)),
            Some(binomial(63, 31).unwrap())
        );
        assert_eq!(binomial(63, 31), Some(916_312_070_471_295_267));
        assert_eq!(binomial(5, 7), Some(0));
    }
}
