use crate::{Crossword, Domains, FxHashSet, Variable};
use log::debug;
use std::collections::VecDeque;

/// Drop every candidate whose length doesn't match its variable.
pub fn enforce_node_consistency(domains: &mut Domains) {
    let variables: Vec<Variable> = domains.variables().cloned().collect();
    for var in variables {
        domains.restrict(&var, |word| word.len() == var.length);
    }
}

/// Make `x` arc consistent with `y`: remove every candidate of `x` with
/// no supporting candidate in `y`'s domain at the overlap. Returns
/// whether `x`'s domain changed.
pub fn revise(crossword: &Crossword, domains: &mut Domains, x: &Variable, y: &Variable) -> bool {
    let (i, j) = match crossword.overlap(x, y) {
        Some(overlap) => overlap,
        None => return false,
    };

    let support: FxHashSet<u8> = domains
        .get(y)
        .iter()
        .filter_map(|word| word.as_bytes().get(j).copied())
        .collect();

    domains.restrict(x, |word| match word.as_bytes().get(i) {
        Some(letter) => support.contains(letter),
        None => false,
    })
}

/// AC-3 propagation. Starts from `arcs` if given, otherwise from every
/// ordered neighbor pair. Returns false as soon as a domain is wiped
/// out; the puzzle is unsatisfiable under the current domains.
pub fn ac3(
    crossword: &Crossword,
    domains: &mut Domains,
    arcs: Option<Vec<(Variable, Variable)>>,
) -> bool {
    let mut queue: VecDeque<(Variable, Variable)> = match arcs {
        Some(arcs) => arcs.into(),
        None => crossword
            .variables()
            .iter()
            .flat_map(|var| {
                crossword
                    .neighbors(var)
                    .into_iter()
                    .map(move |neighbor| (var.clone(), neighbor.clone()))
            })
            .collect(),
    };

    let mut revisions = 0;
    while let Some((x, y)) = queue.pop_front() {
        if revise(crossword, domains, &x, &y) {
            revisions += 1;
            if domains.count(&x) == 0 {
                debug!(
                    "wiped out ({}, {}) {:?} after {} revisions",
                    x.start_row, x.start_col, x.direction, revisions
                );
                return false;
            }
            // x shrank, so arcs into x need another look
            for z in crossword.neighbors(&x) {
                if *z != y {
                    queue.push_back((z.clone(), x.clone()));
                }
            }
        }
    }

    true
}
