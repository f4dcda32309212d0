pub mod crossword;
pub mod domains;
pub mod parse;
pub mod solve;

pub use crossword::{Assignment, Crossword, Direction};
pub use domains::Domains;
pub use parse::{parse_word_list, parse_word_list_json, Variable};
pub use rustc_hash::{FxHashMap, FxHashSet};
pub use solve::Solver;

/// Fill the puzzle, or prove that no fill exists.
pub fn solve(crossword: &Crossword) -> Option<Assignment> {
    Solver::new(crossword).solve()
}
