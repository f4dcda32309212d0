use crate::{Assignment, Crossword, Domains, Variable};
use std::cmp::Reverse;

/// Pick the unassigned variable with the fewest remaining candidates,
/// breaking ties by highest degree, then by grid position so selection
/// is deterministic.
pub fn select_unassigned_variable(
    crossword: &Crossword,
    domains: &Domains,
    assignment: &Assignment,
) -> Option<Variable> {
    crossword
        .variables()
        .iter()
        .filter(|var| !assignment.contains_key(*var))
        .min_by_key(|var| {
            (
                domains.count(var),
                Reverse(crossword.neighbors(var).len()),
                var.start_row,
                var.start_col,
                var.direction,
            )
        })
        .cloned()
}

/// Order `var`'s candidates by how many options they rule out across
/// unassigned neighbors, fewest first. Equal counts fall back to
/// lexicographic order; any fixed order is correctness-preserving.
pub fn order_domain_values(
    crossword: &Crossword,
    domains: &Domains,
    var: &Variable,
    assignment: &Assignment,
) -> Vec<String> {
    let unassigned: Vec<&Variable> = crossword
        .neighbors(var)
        .into_iter()
        .filter(|neighbor| !assignment.contains_key(*neighbor))
        .collect();

    let mut scored: Vec<(usize, &String)> = domains
        .get(var)
        .iter()
        .map(|word| {
            let mut ruled_out = 0;
            for neighbor in &unassigned {
                // neighbors always carry an overlap
                let (i, j) = crossword.overlap(var, neighbor).unwrap();
                let letter = word.as_bytes().get(i);
                for candidate in domains.get(neighbor) {
                    if letter != candidate.as_bytes().get(j) {
                        ruled_out += 1;
                    }
                }
            }
            (ruled_out, word)
        })
        .collect();

    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    scored.into_iter().map(|(_, word)| word.clone()).collect()
}
