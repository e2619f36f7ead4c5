#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tscat::args::{placeholder_indices, substitute, substitute_count};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    template: &'a str,
    args: Vec<&'a str>,
    count: i64,
}

fuzz_target!(|input: Input<'_>| {
    let out = substitute(input.template, &input.args);
    if !input.template.contains('%') {
        assert_eq!(out, input.template);
    }
    let _ = substitute_count(input.template, input.count);

    let indices = placeholder_indices(input.template);
    assert!(indices.windows(2).all(|w| w[0] < w[1]));
    assert!(indices.iter().all(|&i| (1..=99).contains(&i)));
});
