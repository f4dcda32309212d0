extern crate clap;
use std::fs::File;

use clap::{App, Arg};
use crossgen::{parse_word_list, parse_word_list_json, solve, Crossword};

fn main() -> Result<(), String> {
    env_logger::init();

    let matches = App::new("crossgen")
        .arg(
            Arg::with_name("structure")
                .short("s")
                .long("structure")
                .value_name("FILE")
                .help("Grid structure; one line per row, '_' marks a fillable cell")
                .required(true),
        )
        .arg(
            Arg::with_name("words")
                .short("w")
                .long("words")
                .value_name("FILE")
                .help("Word list; newline-delimited, or a JSON array if the file ends in .json")
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("Also write the rendered solution to this file"),
        )
        .arg(
            Arg::with_name("profile")
                .short("p")
                .long("profile")
                .takes_value(false),
        )
        .get_matches();

    let structure_path = matches.value_of("structure").expect("structure not included");
    let structure = std::fs::read_to_string(structure_path)
        .map_err(|e| format!("Failed to read {}: {}", structure_path, e))?;

    let words_path = matches.value_of("words").expect("words not included");
    let words_text = std::fs::read_to_string(words_path)
        .map_err(|e| format!("Failed to read {}: {}", words_path, e))?;
    let words = if words_path.ends_with(".json") {
        parse_word_list_json(&words_text)?
    } else {
        parse_word_list(&words_text)
    };

    if matches.is_present("profile") {
        let guard = pprof::ProfilerGuard::new(100).unwrap();
        std::thread::spawn(move || loop {
            if let Ok(report) = guard.report().build() {
                let file = File::create("flamegraph.svg").unwrap();
                report.flamegraph(file).unwrap();
            }
            std::thread::sleep(std::time::Duration::from_secs(5))
        });
    }

    let crossword = Crossword::new(&structure, words)?;

    match solve(&crossword) {
        Some(assignment) => {
            let rendered = crossword.render(&assignment);
            print!("{}", rendered);
            if let Some(output) = matches.value_of("output") {
                std::fs::write(output, rendered)
                    .map_err(|e| format!("Failed to write {}: {}", output, e))?;
            }
        }
        None => println!("No solution."),
    }
    Ok(())
}
