use crate::{Crossword, FxHashMap, FxHashSet, Variable};

/// Candidate words per variable. Starts as the full vocabulary for every
/// variable and only ever shrinks; search never mutates it.
#[derive(Debug, Clone)]
pub struct Domains {
    values: FxHashMap<Variable, FxHashSet<String>>,
}

impl Domains {
    pub fn new(crossword: &Crossword) -> Domains {
        let values = crossword
            .variables()
            .iter()
            .map(|var| (var.clone(), crossword.words().clone()))
            .collect();
        Domains { values }
    }

    pub fn get(&self, var: &Variable) -> &FxHashSet<String> {
        &self.values[var]
    }

    pub fn count(&self, var: &Variable) -> usize {
        self.values[var].len()
    }

    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.values.keys()
    }

    pub fn any_empty(&self) -> bool {
        self.values.values().any(|words| words.is_empty())
    }

    /// Drop every candidate of `var` that fails `keep`, swapping in a
    /// freshly built set. Returns whether anything was removed.
    pub fn restrict<F>(&mut self, var: &Variable, keep: F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        let current = &self.values[var];
        let filtered: FxHashSet<String> = current
            .iter()
            .filter(|word| keep(word.as_str()))
            .cloned()
            .collect();

        if filtered.len() == current.len() {
            return false;
        }

        self.values.insert(var.clone(), filtered);
        true
    }
}
