//! Exhaustive small-input tests: every short string over the structurally
//! significant characters parses to completion in both output modes.

use tidycss::prelude::*;

/// Characters the lexer treats specially, plus a letter and whitespace.
const ALPHABET: &[char] = &[
    '{', '}', '(', ')', ';', ':', '"', '\'', '\\', '/', '*', '@', ',', '!', 'a', ' ', '\n',
];

/// Smaller set used for the longer inputs.
const CORE: &[char] = &['{', '}', ':', ';', '"', '(', '\\', 'a'];

/// Call `f` with every string over `alphabet` of length `0..=max_len`.
fn for_each_input(alphabet: &[char], max_len: usize, mut f: impl FnMut(&str)) {
    let mut indices: Vec<usize> = Vec::with_capacity(max_len);
    let mut input = String::with_capacity(max_len * 4);
    loop {
        input.clear();
        input.extend(indices.iter().map(|&i| alphabet[i]));
        f(&input);

        // Odometer increment; grow the length once every position wraps.
        let mut pos = 0;
        loop {
            if pos == indices.len() {
                if indices.len() == max_len {
                    return;
                }
                indices.push(0);
                indices.iter_mut().for_each(|i| *i = 0);
                break;
            }
            indices[pos] += 1;
            if indices[pos] < alphabet.len() {
                break;
            }
            indices[pos] = 0;
            pos += 1;
        }
    }
}

fn check_totality(alphabet: &[char], max_len: usize) -> usize {
    let cooked = CssParser::default();
    let raw = CssParser::new(ParseConfig::default().with_preserve_raw_input(true));
    let mut count = 0;

    for_each_input(alphabet, max_len, |css| {
        count += 1;
        let max_line = 1 + css.matches('\n').count() as u32;

        let sheet = cooked.parse(css);
        for (_, _, block) in sheet.document.iter() {
            for (property, value) in block.iter() {
                assert!(!value.is_empty(), "{css:?}: empty value for {property}");
                assert_eq!(value, value.trim(), "{css:?}: untrimmed value");
            }
        }
        assert!(
            sheet.log.iter().all(|(line, _)| (1..=max_line).contains(&line)),
            "{css:?}: diagnostic outside the input"
        );

        let sheet = raw.parse(css);
        assert!(sheet.document.is_empty(), "{css:?}: raw mode filled the document");
        assert!(sheet.log.iter().all(|(line, _)| (1..=max_line).contains(&line)));
    });
    count
}

#[test]
fn test_every_short_input_parses() {
    // 1 + 17 + 17^2 + 17^3 + 17^4
    assert_eq!(check_totality(ALPHABET, 4), 88_741);
}

#[test]
fn test_every_core_input_of_length_five_parses() {
    // 1 + 8 + 8^2 + 8^3 + 8^4 + 8^5
    assert_eq!(check_totality(CORE, 5), 37_449);
}
