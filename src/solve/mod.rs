use crate::{Assignment, Crossword, Domains, FxHashSet};
use log::{debug, trace};

pub mod consistency;
pub mod heuristics;

use self::consistency::{ac3, enforce_node_consistency};
use self::heuristics::{order_domain_values, select_unassigned_variable};

pub struct Solver<'s> {
    crossword: &'s Crossword,
    domains: Domains,
}

impl<'s> Solver<'s> {
    pub fn new(crossword: &'s Crossword) -> Solver<'s> {
        Solver {
            crossword,
            domains: Domains::new(crossword),
        }
    }

    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    /// Node consistency, then AC-3, then backtracking search. `None`
    /// means the puzzle is unsatisfiable.
    pub fn solve(mut self) -> Option<Assignment> {
        enforce_node_consistency(&mut self.domains);

        if !ac3(self.crossword, &mut self.domains, None) {
            return None;
        }
        // AC-3 only notices wipeouts it causes itself; a slot emptied by
        // the length filter alone is caught here, before any search runs
        if self.domains.any_empty() {
            debug!("empty domain after propagation; unsatisfiable");
            return None;
        }

        self.backtrack(Assignment::default())
    }

    pub fn assignment_complete(&self, assignment: &Assignment) -> bool {
        self.crossword
            .variables()
            .iter()
            .all(|var| assignment.contains_key(var))
    }

    /// Whole-assignment consistency: every word fits its slot, every
    /// overlapping pair agrees on the shared letter, and no word is used
    /// twice. Safe to call on any partial assignment.
    pub fn consistent(&self, assignment: &Assignment) -> bool {
        let mut used = FxHashSet::default();
        for (var, word) in assignment {
            if word.len() != var.length {
                return false;
            }
            if !used.insert(word.as_str()) {
                return false;
            }
            for (other, other_word) in assignment {
                if other == var {
                    continue;
                }
                if let Some((i, j)) = self.crossword.overlap(var, other) {
                    if word.as_bytes().get(i) != other_word.as_bytes().get(j) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Depth-first search over partial assignments, heuristic order.
    /// Every stack entry is its own checkpoint, so abandoning a branch
    /// needs no undo step.
    pub fn backtrack(&self, assignment: Assignment) -> Option<Assignment> {
        let mut candidates = vec![assignment];
        let mut visited: u64 = 0;

        while let Some(candidate) = candidates.pop() {
            visited += 1;
            if visited % 10_000 == 0 {
                trace!(
                    "searched {} partial assignments, {} branches queued",
                    visited,
                    candidates.len()
                );
            }

            if self.assignment_complete(&candidate) {
                debug!("complete assignment after {} candidates", visited);
                return Some(candidate);
            }

            let var = match select_unassigned_variable(self.crossword, &self.domains, &candidate) {
                Some(var) => var,
                None => continue,
            };

            // reverse push so the least constraining value is popped first
            let values = order_domain_values(self.crossword, &self.domains, &var, &candidate);
            for value in values.into_iter().rev() {
                let mut extended = candidate.clone();
                extended.insert(var.clone(), value);
                if self.consistent(&extended) {
                    candidates.push(extended);
                }
            }
        }

        debug!("exhausted the search space after {} candidates", visited);
        None
    }
}
