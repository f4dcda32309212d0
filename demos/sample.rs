use std::time::Instant;

use crossgen::{parse_word_list, solve, Crossword};

fn main() {
    let now = Instant::now();

    let structure = std::fs::read_to_string("data/structure1.txt").unwrap();
    let words = std::fs::read_to_string("data/words1.txt").unwrap();

    let crossword = Crossword::new(&structure, parse_word_list(&words)).unwrap();
    println!("{}", crossword);

    match solve(&crossword) {
        Some(assignment) => {
            println!("Solved in {}ms.", now.elapsed().as_millis());
            print!("{}", crossword.render(&assignment));
        }
        None => println!("No solution."),
    }
}
