use crate::parse::{parse_structure, parse_variables, Variable};
use crate::{FxHashMap, FxHashSet};
use std::fmt;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

/// A chosen word per variable. Partial during search, complete on success.
pub type Assignment = FxHashMap<Variable, String>;

const BLOCKED: char = '█';

/// Immutable description of a puzzle: the fillable-cell grid, the
/// vocabulary, the variables derived from the grid, and the overlap
/// between every pair of variables, computed once at construction.
#[derive(Debug, Clone)]
pub struct Crossword {
    height: usize,
    width: usize,
    structure: Vec<Vec<bool>>,
    words: FxHashSet<String>,
    variables: Vec<Variable>,
    overlaps: FxHashMap<(Variable, Variable), Option<(usize, usize)>>,
}

impl Crossword {
    pub fn new(structure: &str, words: FxHashSet<String>) -> Result<Crossword, String> {
        Crossword::from_grid(parse_structure(structure)?, words)
    }

    /// Build a puzzle from an already-materialized fillable-cell grid.
    pub fn from_grid(
        structure: Vec<Vec<bool>>,
        words: FxHashSet<String>,
    ) -> Result<Crossword, String> {
        let height = structure.len();
        if height == 0 {
            return Err(String::from("Structure has no rows."));
        }
        let width = structure[0].len();
        if width == 0 {
            return Err(String::from("Structure has no columns."));
        }
        if structure.iter().any(|row| row.len() != width) {
            return Err(String::from("Structure is not rectangular."));
        }

        let variables = parse_variables(&structure);

        let mut overlaps = FxHashMap::default();
        for x in &variables {
            let positions: FxHashMap<(usize, usize), usize> = x
                .cells()
                .into_iter()
                .enumerate()
                .map(|(index, cell)| (cell, index))
                .collect();

            for y in &variables {
                if x == y {
                    continue;
                }
                let overlap = y
                    .cells()
                    .into_iter()
                    .enumerate()
                    .find_map(|(j, cell)| positions.get(&cell).map(|i| (*i, j)));
                overlaps.insert((x.clone(), y.clone()), overlap);
            }
        }

        Ok(Crossword {
            height,
            width,
            structure,
            words,
            variables,
            overlaps,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn words(&self) -> &FxHashSet<String> {
        &self.words
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The shared cell between two variables, as an index into each
    /// variable's word, or None if they don't intersect.
    pub fn overlap(&self, x: &Variable, y: &Variable) -> Option<(usize, usize)> {
        *self
            .overlaps
            .get(&(x.clone(), y.clone()))
            .unwrap_or(&None)
    }

    /// Variables sharing a cell with `var`.
    pub fn neighbors(&self, var: &Variable) -> Vec<&Variable> {
        self.variables
            .iter()
            .filter(|other| *other != var && self.overlap(var, other).is_some())
            .collect()
    }

    /// Project an assignment onto the grid.
    pub fn letter_grid(&self, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
        let mut letters = vec![vec![None; self.width]; self.height];
        for (variable, word) in assignment {
            for (index, (row, col)) in variable.cells().into_iter().enumerate() {
                letters[row][col] = word.as_bytes().get(index).map(|b| *b as char);
            }
        }
        letters
    }

    /// Render an assignment as terminal text, blocked cells drawn solid.
    pub fn render(&self, assignment: &Assignment) -> String {
        let letters = self.letter_grid(assignment);
        let mut result = String::with_capacity((self.width + 1) * self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                if self.structure[row][col] {
                    result.push(letters[row][col].unwrap_or(' '));
                } else {
                    result.push(BLOCKED);
                }
            }
            result.push('\n');
        }
        result
    }
}

impl fmt::Display for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&Assignment::default()))
    }
}
