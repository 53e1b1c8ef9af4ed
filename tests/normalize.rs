use lucid_uri::Uri;

#[test]
fn remove_dot_segments() {
    let cases = [
        ("/a/b/c/./../../g", "/a/g"),
        ("mid/content=5/../6", "mid/6"),
        ("http://example.com/a/../b", "/b"),
        ("http://example.com/../b", "/b"),
        ("http://example.com/a/../b/", "/b/"),
        ("http://example.com/a/../../b", "/b"),
        ("./a/b", "a/b"),
        ("", ""),
        (".", ""),
        ("./", ""),
        ("..", ""),
        ("../", ""),
        ("/", "/"),
        ("a/b/..", "a/"),
        ("a/b/../", "a/"),
        ("a/b/.", "a/b/"),
        ("a/b/./", "a/b/"),
        ("a/b/./c", "a/b/c"),
        ("a/b/./c/", "a/b/c/"),
        ("/a/b/..", "/a/"),
        ("/a/b/.", "/a/b/"),
        ("/a/b/./c", "/a/b/c"),
        ("/a/b/./c/", "/a/b/c/"),
        ("./a/b/..", "a/"),
        ("./a/b/.", "a/b/"),
        ("./a/b/./c", "a/b/c"),
        ("./a/b/./c/", "a/b/c/"),
        ("../a/b/..", "a/"),
        ("../a/b/.", "a/b/"),
        ("../a/b/./c", "a/b/c"),
        ("../a/b/./c/", "a/b/c/"),
        ("../a/b/../c", "a/c"),
        ("../a/b/./../c/", "a/c/"),
        ("../a/b/./../c", "a/c"),
        ("../a/b/.././c/", "a/c/"),
        ("../a/b/.././c", "a/c"),
        ("/./c/d", "/c/d"),
        ("/../c/d", "/c/d"),
    ];
    for (input, normalized) in cases {
        let mut uri = Uri::parse(input).unwrap();
        uri.normalize_path();
        assert_eq!(uri.path_to_string().unwrap(), normalized, "{input}");
    }
}

#[test]
fn normalization_is_idempotent() {
    let inputs = [
        "/a/b/c/./../../g",
        "mid/content=5/../6",
        "a/b/..",
        "../../",
        "/",
        "",
        "a//b/./c",
    ];
    for input in inputs {
        let mut once = Uri::parse(input).unwrap();
        once.normalize_path();
        let mut twice = once.clone();
        twice.normalize_path();
        assert_eq!(once, twice, "{input}");
    }
}

#[test]
fn seed_normalization_segments() {
    let mut uri = Uri::parse("/a/b/c/./../../g").unwrap();
    uri.normalize_path();
    assert_eq!(uri.path(), [&b""[..], &b"a"[..], &b"g"[..]]);
}

#[test]
fn normalize_and_compare_equivalent_uris() {
    let reference = Uri::parse("example://a/b/c/%7Bfoo%7D").unwrap();
    let mut other = Uri::parse("eXAMPLE://a/./b/../b/%63/%7bfoo%7d").unwrap();
    assert_ne!(reference, other);
    other.normalize_path();
    assert_eq!(reference, other);
}

#[test]
fn leading_root_survives_excess_dot_dots() {
    let mut uri = Uri::parse("/../../../g").unwrap();
    uri.normalize_path();
    assert_eq!(uri.path_to_string().unwrap(), "/g");
}
