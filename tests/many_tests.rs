mod utils;

#[test]
fn test_many() {
    const CASES: &[(&str, &str)] = &[
        (r"foo", "foobar"),
        (r"bar", "foobar"),
        (r"baz", "foobar"),
        (r"([a-zA-Z]+)-([0-9]+)", "test-42"),
        (r"([0-9]+)?", ""),
        (r"[a-z][a-z][a-z]", "xyz"),
        (r"[0-9]+=[0-9]+", "124221=12323=2=abd"),
        (
            r"Sherlock Holmes|Shrelock Holm|John Watson|Irene Adler|Inspector Lestrade|Professor Moriarty",
            "Professor Moriarty Sherlock Holmes John Watson Irene Adler",
        ),
        (
            r".*d",
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaad",
        ),
        (r"^$", ""),
        (r"^[a-z]+@[a-z]+\.com$", "foo@bar.com"),
        (r"bar$", "foobarfoobar"),
        (r"colou?r", "color colour colouur"),
        (r"(ab)+", "abababx"),
        (r"[A-Z][A-Z]+", "abc DEF GHI jkl"),
        (r"[^0-9]+", "abc123!@#"),
        (r"^foo", "foobarfoobaz"),
        (r".*[^A-Z]|[A-Z]", "AAAAAAAAAAAAAAAAAAAA"),
        (r".*[^A-Z]|[A-Z]", "AAAAB"),
        (r".*[^A-Z]|[A-Z]", "AABAB"),
        (r"a(b|c)+d", "abcbd"),
        (r"a.*?b", "axbxb"),
        (r"a.*b", "axbxb"),
        (r"(a)|(ab)", "ab"),
        (r"(ab)|(a)", "ab"),
    ];
    for (pattern, input) in CASES {
        println!("Testing: {pattern} on {input}");
        utils::check_against_rust_regex(pattern, input);
    }
}
