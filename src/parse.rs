use crate::{Direction, FxHashSet};

pub(crate) const FILLABLE: char = '_';

/// A slot in the grid: a maximal run of fillable cells, length >= 2.
#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct Variable {
    pub start_row: usize,
    pub start_col: usize,
    pub length: usize,
    pub direction: Direction,
}

impl Variable {
    pub fn new(start_row: usize, start_col: usize, length: usize, direction: Direction) -> Variable {
        Variable {
            start_row,
            start_col,
            length,
            direction,
        }
    }

    /// The grid cells this variable occupies, in word order.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let mut result = Vec::with_capacity(self.length);
        for index in 0..self.length {
            match self.direction {
                Direction::Across => result.push((self.start_row, self.start_col + index)),
                Direction::Down => result.push((self.start_row + index, self.start_col)),
            }
        }
        result
    }
}

/// Parse a structure text into a fillable-cell grid. One line per row;
/// `_` marks a fillable cell, anything else is blocked. Short rows are
/// padded with blocked cells.
pub(crate) fn parse_structure(text: &str) -> Result<Vec<Vec<bool>>, String> {
    let rows: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();

    if rows.is_empty() {
        return Err(String::from("Structure has no rows."));
    }

    let width = rows.iter().map(|row| row.chars().count()).max().unwrap();
    if width == 0 {
        return Err(String::from("Structure has no columns."));
    }

    let mut structure = Vec::with_capacity(rows.len());
    for row in rows {
        let mut cells: Vec<bool> = row.chars().map(|c| c == FILLABLE).collect();
        cells.resize(width, false);
        structure.push(cells);
    }

    Ok(structure)
}

pub(crate) fn parse_variables(structure: &[Vec<bool>]) -> Vec<Variable> {
    let height = structure.len();
    let width = structure[0].len();

    let mut result = vec![];

    let mut start_row = None;
    let mut start_col = None;
    let mut length = 0;

    for row in 0..height {
        for col in 0..width {
            if structure[row][col] {
                // found a fillable cell; is it our first?
                if start_row == None {
                    start_row = Some(row);
                    start_col = Some(col);
                }
                length += 1;
            } else {
                // If we don't have any run yet, just keep going
                if start_row == None {
                    continue;
                }
                if length >= 2 {
                    result.push(Variable {
                        start_row: start_row.unwrap(),
                        start_col: start_col.unwrap(),
                        length,
                        direction: Direction::Across,
                    });
                }
                length = 0;
                start_row = None;
                start_col = None;
            }
        }
        // have to process end of row
        if length >= 2 {
            result.push(Variable {
                start_row: start_row.unwrap(),
                start_col: start_col.unwrap(),
                length,
                direction: Direction::Across,
            });
        }
        length = 0;
        start_row = None;
        start_col = None;
    }

    let mut start_row = None;
    let mut start_col = None;
    let mut length = 0;

    for col in 0..width {
        for row in 0..height {
            if structure[row][col] {
                if start_row == None {
                    start_row = Some(row);
                    start_col = Some(col);
                }
                length += 1;
            } else {
                if start_row == None {
                    continue;
                }
                if length >= 2 {
                    result.push(Variable {
                        start_row: start_row.unwrap(),
                        start_col: start_col.unwrap(),
                        length,
                        direction: Direction::Down,
                    });
                }
                length = 0;
                start_row = None;
                start_col = None;
            }
        }
        // have to process end of column
        if length >= 2 {
            result.push(Variable {
                start_row: start_row.unwrap(),
                start_col: start_col.unwrap(),
                length,
                direction: Direction::Down,
            });
        }
        length = 0;
        start_row = None;
        start_col = None;
    }

    result
}

/// Parse a newline-delimited word list. Words are upper-cased; blank
/// lines are skipped; duplicates collapse.
pub fn parse_word_list(text: &str) -> FxHashSet<String> {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_uppercase())
        .collect()
}

/// Parse a word list given as a JSON array of strings.
pub fn parse_word_list_json(text: &str) -> Result<FxHashSet<String>, String> {
    let words: Vec<String> = serde_json::from_str(text)
        .map_err(|e| format!("Word list was not a JSON array of strings: {}", e))?;
    Ok(words.iter().map(|word| word.to_uppercase()).collect())
}

#[cfg(test)]
mod tests {
    use crate::parse::{parse_structure, parse_variables, parse_word_list, parse_word_list_json};
    use crate::Direction;

    use super::Variable;

    #[test]
    fn parse_structure_works() {
        let structure = parse_structure(
            "
#__#
____
#_##
",
        )
        .unwrap();

        assert_eq!(structure.len(), 3);
        assert_eq!(structure[0], vec![false, true, true, false]);
        assert_eq!(structure[1], vec![true, true, true, true]);
        assert_eq!(structure[2], vec![false, true, false, false]);
    }

    #[test]
    fn parse_structure_pads_short_rows() {
        let structure = parse_structure("____\n__").unwrap();

        assert_eq!(structure[1], vec![true, true, false, false]);
    }

    #[test]
    fn parse_structure_rejects_empty() {
        assert!(parse_structure("").is_err());
    }

    #[test]
    fn parse_variables_works() {
        let structure = parse_structure(
            "
___
___
___
",
        )
        .unwrap();
        let result = parse_variables(&structure);

        assert_eq!(result.len(), 6);
        assert_eq!(
            result[0],
            Variable {
                start_row: 0,
                start_col: 0,
                length: 3,
                direction: Direction::Across
            }
        );
        assert_eq!(
            result[1],
            Variable {
                start_row: 1,
                start_col: 0,
                length: 3,
                direction: Direction::Across
            }
        );
        assert_eq!(
            result[3],
            Variable {
                start_row: 0,
                start_col: 0,
                length: 3,
                direction: Direction::Down
            }
        );
    }

    #[test]
    fn parse_variables_splits_runs_on_blocked_cells() {
        let structure = parse_structure("__#__").unwrap();
        let result = parse_variables(&structure);

        assert_eq!(
            result,
            vec![
                Variable::new(0, 0, 2, Direction::Across),
                Variable::new(0, 3, 2, Direction::Across),
            ]
        );
    }

    #[test]
    fn parse_variables_skips_single_cells() {
        // the middle column crosses, the stray cell does not
        let structure = parse_structure(
            "
#_#
#_#
___
",
        )
        .unwrap();
        let result = parse_variables(&structure);

        assert_eq!(
            result,
            vec![
                Variable::new(2, 0, 3, Direction::Across),
                Variable::new(0, 1, 3, Direction::Down),
            ]
        );
    }

    #[test]
    fn variable_cells_works() {
        let across = Variable::new(1, 2, 3, Direction::Across);
        assert_eq!(across.cells(), vec![(1, 2), (1, 3), (1, 4)]);

        let down = Variable::new(1, 2, 3, Direction::Down);
        assert_eq!(down.cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn parse_word_list_works() {
        let words = parse_word_list("cat\n\n dog \nCAT\n");

        assert_eq!(words.len(), 2);
        assert!(words.contains("CAT"));
        assert!(words.contains("DOG"));
    }

    #[test]
    fn parse_word_list_json_works() {
        let words = parse_word_list_json(r#"["cat", "dog"]"#).unwrap();

        assert_eq!(words.len(), 2);
        assert!(words.contains("CAT"));

        assert!(parse_word_list_json("{}").is_err());
    }
}
