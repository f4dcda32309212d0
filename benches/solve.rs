use criterion::Benchmark;
use criterion::{criterion_group, criterion_main, Criterion};
use crossgen::{parse_word_list, solve, Crossword};

const WORDS: &str = "
cat
bag
dog
arc
cow
wet
ate
toe
sport
sound
trust
donut
apple
chess
stone
treat
";

pub fn criterion_benchmark(c: &mut Criterion) {
    let input = Crossword::new(
        "
#_#
___
#_#
",
        parse_word_list(WORDS),
    )
    .unwrap();
    c.bench(
        "solve",
        Benchmark::new("solve_plus_grid", move |b| {
            b.iter(|| solve(&input));
        }),
    );

    let input = Crossword::new(
        "
___##
#_###
#___#
###_#
##___
",
        parse_word_list(WORDS),
    )
    .unwrap();
    c.bench(
        "solve",
        Benchmark::new("solve_winding_grid", move |b| {
            b.iter(|| solve(&input));
        }),
    );

    let input = Crossword::new(
        "
_____
_###_
_###_
_###_
_____
",
        parse_word_list(WORDS),
    )
    .unwrap();
    c.bench(
        "solve",
        Benchmark::new("solve_ring_grid", move |b| {
            b.iter(|| solve(&input));
        }),
    );
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
