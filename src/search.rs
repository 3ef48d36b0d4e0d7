//! Breadth-first enumeration of the whole reachable state space from solved, with a predecessor
//! table keyed by rank and optimal solution reconstruction.

use std::fmt;

use ahash::HashMap;
use itertools::Itertools;

use crate::moves::{CanReverse, Move};
use crate::state::Skewb;

/// One entry of the predecessor table: how a given rank was first reached during generation.
#[derive(Copy, Clone, Debug)]
struct PredecessorEntry {
    predecessor_rank: u64,
    depth: u32,
    move_used: Move,
}

/// Returned when a caller asks to solve a rank the table never reached. This is the one
/// user-facing failure mode of the engine -- see the invariant-violation panic in
/// [`SkewbSolutionTable::solve`] for the other (internal) one.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct UnreachableRankError(pub u64);

impl fmt::Display for UnreachableRankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rank {} was never reached by generation; the state is unreachable under the enforced invariants", self.0)
    }
}

impl std::error::Error for UnreachableRankError {}

/// Full table of predecessor links for every rank reachable from solved. Built once by
/// [`SkewbSolutionTable::generate`], then queried many times.
pub struct SkewbSolutionTable {
    predecessors: HashMap<u64, PredecessorEntry>,
    max_depth: u32,
}

impl SkewbSolutionTable {
    /// Runs full BFS generation, quietly.
    pub fn generate() -> Self {
        Self::generate_with_progress(false)
    }

    /// Runs full BFS generation, printing one line per completed layer (depth, new states this
    /// layer, running total) unless `quiet` is set.
    pub fn generate_with_progress(quiet: bool) -> Self {
        let mut predecessors = HashMap::default();
        predecessors.insert(
            0,
            PredecessorEntry { predecessor_rank: 0, depth: 0, move_used: Move::Identity },
        );

        // (rank, move that last produced this state)
        let mut frontier: Vec<(u64, Move)> = vec![(0, Move::Identity)];
        let mut depth: u32 = 0;

        while !frontier.is_empty() {
            let mut next_frontier = Vec::new();

            for &(rank, last_move) in &frontier {
                let state = Skewb::from_rank(rank);

                for &m in Move::ELEMENTARY.iter() {
                    if m == last_move {
                        continue;
                    }

                    let mut successor = state;
                    successor.apply(m);
                    let successor_rank = successor.rank();

                    if !predecessors.contains_key(&successor_rank) {
                        predecessors.insert(
                            successor_rank,
                            PredecessorEntry {
                                predecessor_rank: rank,
                                depth: depth + 1,
                                move_used: m,
                            },
                        );
                        next_frontier.push((successor_rank, m));
                    }
                }
            }

            depth += 1;
            if !quiet {
                println!(
                    "layer {depth}: {} new states, {} total",
                    next_frontier.len(),
                    predecessors.len()
                );
            }

            frontier = next_frontier;
        }

        let max_depth = depth.saturating_sub(1);
        Self { predecessors, max_depth }
    }

    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    /// The eccentricity of the solved state in the move graph -- "God's number" for this move
    /// set.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Looks up the BFS depth recorded for `rank`, if it was reached.
    pub fn depth_of(&self, rank: u64) -> Option<u32> {
        self.predecessors.get(&rank).map(|e| e.depth)
    }

    /// Number of reachable states at each BFS depth, keyed by depth.
    pub fn depth_counts(&self) -> HashMap<u32, u64> {
        let mut counts: HashMap<u32, u64> = HashMap::default();
        for entry in self.predecessors.values() {
            *counts.entry(entry.depth).or_insert(0) += 1;
        }
        counts
    }

    /// Prints a depth-by-depth breakdown of the reachable state space, in the style of the
    /// teacher's `cubesearch::nice_print`.
    pub fn print_depth_summary(&self) {
        let counts = self.depth_counts();
        let total: u64 = counts.values().sum();

        println!("configuration depth summary for skewb:");
        println!("\tthere are {total} total configurations.");

        for depth in counts.keys().copied().sorted() {
            let val = counts[&depth];
            let pct = (val as f64) / (total as f64) * 100.0;
            println!("\t{depth} moves: {val} configurations ({pct:0.3} %)");
        }
    }

    /// Solves for the given state directly, equivalent to `self.solve(state.rank())`.
    pub fn solve_state(&self, state: &Skewb) -> Result<Vec<Move>, UnreachableRankError> {
        self.solve(state.rank())
    }

    /// Reconstructs a shortest move sequence from `rank` back to solved by walking predecessor
    /// links and inverting the recorded move at each step.
    pub fn solve(&self, rank: u64) -> Result<Vec<Move>, UnreachableRankError> {
        let mut entry = *self.predecessors.get(&rank).ok_or(UnreachableRankError(rank))?;
        let mut current_rank = rank;
        let mut moves = Vec::with_capacity(entry.depth as usize);

        while entry.depth > 0 {
            moves.push(entry.move_used.reverse());
            current_rank = entry.predecessor_rank;
            entry = *self.predecessors.get(&current_rank).unwrap_or_else(|| {
                panic!(
                    "predecessor rank {current_rank} missing from table; corrupt generation or predecessor chain"
                )
            });
        }

        Ok(moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_all(state: &mut Skewb, moves: &[Move]) {
        for &m in moves {
            state.apply(m);
        }
    }

    #[test]
    fn solved_solves_to_an_empty_sequence() {
        let table = SkewbSolutionTable::generate();
        let solution = table.solve(0).unwrap();
        assert!(solution.is_empty());
        assert_eq!(table.depth_of(0), Some(0));
    }

    #[test]
    fn single_move_scramble_solves_with_its_inverse() {
        let table = SkewbSolutionTable::generate();

        let mut s = Skewb::solved();
        s.apply(Move::U);

        let solution = table.solve_state(&s).unwrap();
        assert_eq!(solution, vec![Move::UPrime]);
    }

    #[test]
    fn four_move_scramble_solves_within_its_length() {
        let table = SkewbSolutionTable::generate();

        let mut s = Skewb::solved();
        let scramble = [Move::U, Move::L, Move::D, Move::RPrime];
        apply_all(&mut s, &scramble);

        let solution = table.solve_state(&s).unwrap();
        assert!(solution.len() <= scramble.len());

        let mut check = s;
        apply_all(&mut check, &solution);
        assert!(check.is_solved());
    }

    #[test]
    fn seven_move_scramble_solves_within_its_length() {
        let table = SkewbSolutionTable::generate();

        let mut s = Skewb::solved();
        let scramble =
            [Move::U, Move::U, Move::L, Move::D, Move::L, Move::U, Move::RPrime];
        apply_all(&mut s, &scramble);

        let solution = table.solve_state(&s).unwrap();
        assert!(solution.len() <= scramble.len());

        let mut check = s;
        apply_all(&mut check, &solution);
        assert!(check.is_solved());
    }

    #[test]
    fn adversarial_configuration_solves_to_its_recorded_depth() {
        let table = SkewbSolutionTable::generate();

        let s = Skewb::from_fields(
            [0, 4, 2, 1, 3, 5],
            [0, 3, 2, 1, 6, 5, 4, 7],
            [0, 1, 2, 1, 1, 2, 0, 2],
        );

        let rank = s.rank();
        let expected_depth = table.depth_of(rank).expect("rank must be reachable");
        let solution = table.solve(rank).unwrap();

        assert_eq!(solution.len() as u32, expected_depth);

        let mut check = s;
        apply_all(&mut check, &solution);
        assert!(check.is_solved());
    }

    #[test]
    fn solving_an_unreached_rank_is_an_error() {
        let table = SkewbSolutionTable::generate();
        let bogus_rank = u64::MAX;
        assert_eq!(table.solve(bogus_rank), Err(UnreachableRankError(bogus_rank)));
    }

    #[test]
    fn max_depth_is_constant_across_runs() {
        let first = SkewbSolutionTable::generate();
        let second = SkewbSolutionTable::generate();
        assert_eq!(first.max_depth(), second.max_depth());
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn table_is_closed_under_the_move_set() {
        use rayon::prelude::*;

        let table = SkewbSolutionTable::generate();
        let sample: Vec<u64> = table.predecessors.keys().copied().take(5_000).collect();

        sample.into_par_iter().for_each(|rank| {
            let state = Skewb::from_rank(rank);
            for &m in Move::ELEMENTARY.iter() {
                let mut successor = state;
                successor.apply(m);
                assert!(
                    table.predecessors.contains_key(&successor.rank()),
                    "table not closed: {m} from rank {rank} escapes the table"
                );
            }
        });
    }

    #[test]
    fn depth_counts_sum_to_table_size() {
        let table = SkewbSolutionTable::generate();
        let total: u64 = table.depth_counts().values().sum();
        assert_eq!(total, table.len() as u64);
    }
}
