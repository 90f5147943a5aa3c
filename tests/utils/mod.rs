use bytenfa::Regex;
use regex as rust_regex;

/// Matches `pattern` against `input` on both this crate's engine and the
/// `regex` crate, and asserts that `find`/`find_all`/`find_captures`/
/// `find_all_captures` all agree.
///
/// `pattern` must already be restricted to the grammar this crate
/// supports (no `{n,m}`, no `\d`/`\w`/`\s`, no inline flags, no
/// non-capturing groups): every group here is capturing, so group
/// indices line up directly between the two engines.
pub fn check_against_rust_regex(pattern: &str, input: &str) {
    let rust_re = rust_regex::Regex::new(pattern).expect("reference pattern must compile");
    let ours = Regex::new(pattern).expect("pattern must compile");

    let rust_match = rust_re.find(input).map(|m| (m.start(), m.end()));
    let my_match = ours.find(input).map(|m| (m.span.from, m.span.to));
    assert_eq!(
        my_match, rust_match,
        "Mismatch for pattern {pattern:?} input {input:?} (find)"
    );

    let rust_all: Vec<_> = rust_re.find_iter(input).map(|m| (m.start(), m.end())).collect();
    let my_all: Vec<_> = ours.find_all(input).map(|m| (m.span.from, m.span.to)).collect();
    assert_eq!(
        my_all, rust_all,
        "Mismatch for pattern {pattern:?} input {input:?} (find_all)"
    );

    let rust_caps = rust_re.captures(input);
    let rust_groups = rust_caps.as_ref().map(|caps| {
        (0..caps.len())
            .map(|i| caps.get(i).map(|m| m.as_str()))
            .collect::<Vec<_>>()
    });
    let my_caps = ours.find_captures(input);
    let my_groups = my_caps.as_ref().map(|caps| {
        (0..caps.group_len())
            .map(|i| caps.get(i).map(|g| std::str::from_utf8(g.slice()).unwrap()))
            .collect::<Vec<_>>()
    });
    assert_eq!(
        my_groups, rust_groups,
        "Mismatch for pattern {pattern:?} input {input:?} (find_captures)"
    );

    let rust_all_caps: Vec<Vec<Option<&str>>> = rust_re
        .captures_iter(input)
        .map(|caps| (0..caps.len()).map(|i| caps.get(i).map(|m| m.as_str())).collect())
        .collect();
    let my_all_caps: Vec<Vec<Option<&str>>> = ours
        .find_all_captures(input)
        .map(|caps| {
            (0..caps.group_len())
                .map(|i| caps.get(i).map(|g| std::str::from_utf8(g.slice()).unwrap()))
                .collect()
        })
        .collect();
    assert_eq!(
        my_all_caps, rust_all_caps,
        "Mismatch for pattern {pattern:?} input {input:?} (find_all_captures)"
    );
}
