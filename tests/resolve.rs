use lucid_uri::Uri;

// The reference resolution examples of RFC 3986, section 5.4, normal
// and abnormal, against the base of that section.
#[test]
fn rfc_reference_resolution_examples() {
    let base = Uri::parse("http://a/b/c/d;p?q").unwrap();
    let cases = [
        // Section 5.4.1, normal examples.
        ("g:h", "g:h"),
        ("g", "http://a/b/c/g"),
        ("./g", "http://a/b/c/g"),
        ("g/", "http://a/b/c/g/"),
        ("/g", "http://a/g"),
        ("//g", "http://g"),
        ("?y", "http://a/b/c/d;p?y"),
        ("g?y", "http://a/b/c/g?y"),
        ("#s", "http://a/b/c/d;p?q#s"),
        ("g#s", "http://a/b/c/g#s"),
        ("g?y#s", "http://a/b/c/g?y#s"),
        (";x", "http://a/b/c/;x"),
        ("g;x", "http://a/b/c/g;x"),
        ("g;x?y#s", "http://a/b/c/g;x?y#s"),
        ("", "http://a/b/c/d;p?q"),
        (".", "http://a/b/c/"),
        ("./", "http://a/b/c/"),
        ("..", "http://a/b/"),
        ("../", "http://a/b/"),
        ("../g", "http://a/b/g"),
        ("../..", "http://a/"),
        ("../../", "http://a/"),
        ("../../g", "http://a/g"),
        // Section 5.4.2: a same-scheme reference is taken wholesale
        // (the strict behavior).
        ("http:g", "http:g"),
        // Section 5.4.2, abnormal examples: excess dot-dots.
        ("../../../g", "http://a/g"),
        ("../../../../g", "http://a/g"),
        ("/./g", "http://a/g"),
        ("/../g", "http://a/g"),
        // Dot segments only count when they are complete segments.
        ("g.", "http://a/b/c/g."),
        (".g", "http://a/b/c/.g"),
        ("g..", "http://a/b/c/g.."),
        ("..g", "http://a/b/c/..g"),
        // Nonsensical dot segments in the reference.
        ("./../g", "http://a/b/g"),
        ("./g/.", "http://a/b/c/g/"),
        ("g/./h", "http://a/b/c/g/h"),
        ("g/../h", "http://a/b/c/h"),
        ("g;x=1/./y", "http://a/b/c/g;x=1/y"),
        ("g;x=1/../y", "http://a/b/c/y"),
        // Queries and fragments are not path-merged.
        ("g?y/./x", "http://a/b/c/g?y/./x"),
        ("g?y/../x", "http://a/b/c/g?y/../x"),
        ("g#s/./x", "http://a/b/c/g#s/./x"),
        ("g#s/../x", "http://a/b/c/g#s/../x"),
    ];
    for (reference, target) in cases {
        let reference = Uri::parse(reference).unwrap();
        let expected = Uri::parse(target).unwrap();
        assert_eq!(base.resolve(&reference), expected, "{}", target);
    }
}

#[test]
fn seed_resolution_renders_exactly() {
    let base = Uri::parse("http://a/b/c/d;p?q").unwrap();
    let target = base.resolve(&Uri::parse("../../g").unwrap());
    assert_eq!(target.to_string(), "http://a/g");
}

#[test]
fn resolution_against_authority_roots() {
    let cases = [
        ("http://example.com", "foo", "http://example.com/foo"),
        ("http://example.com/", "foo", "http://example.com/foo"),
        ("http://example.com", "foo/", "http://example.com/foo/"),
        ("http://example.com/", "foo/", "http://example.com/foo/"),
        ("http://example.com", "/foo", "http://example.com/foo"),
        ("http://example.com/", "/foo", "http://example.com/foo"),
        ("http://example.com", "/foo/", "http://example.com/foo/"),
        ("http://example.com/", "/foo/", "http://example.com/foo/"),
        ("http://example.com/", "?foo", "http://example.com/?foo"),
        ("http://example.com/", "#foo", "http://example.com/#foo"),
    ];
    for (base, reference, target) in cases {
        let base = Uri::parse(base).unwrap();
        let reference = Uri::parse(reference).unwrap();
        let expected = Uri::parse(target).unwrap();
        assert_eq!(base.resolve(&reference), expected, "{target}");
    }
}

#[test]
fn reference_authority_replaces_base_authority() {
    let base = Uri::parse("http://apple.com/hello?work#apples").unwrap();
    let target = base.resolve(&Uri::parse("//google.com/search").unwrap());
    assert_eq!(target.to_string(), "http://google.com/search");
    assert_eq!(target.query(), None);
    assert_eq!(target.fragment(), None);
}

#[test]
fn empty_reference_with_query_keeps_base_path() {
    let base = Uri::parse("http://a/b/c/d;p?q").unwrap();
    let target = base.resolve(&Uri::parse("?").unwrap());
    assert_eq!(target.query(), Some(&b""[..]));
    assert_eq!(target.path_to_string().unwrap(), "/b/c/d;p");
}

#[test]
fn resolve_does_not_alias_its_inputs() {
    let base = Uri::parse("http://a/b/c/d;p?q").unwrap();
    let reference = Uri::parse("../g").unwrap();
    let target = base.resolve(&reference);
    assert_eq!(base, Uri::parse("http://a/b/c/d;p?q").unwrap());
    assert_eq!(reference, Uri::parse("../g").unwrap());
    assert_eq!(target.to_string(), "http://a/b/g");
}

#[test]
fn absolute_reference_is_normalized_but_kept_whole() {
    let base = Uri::parse("http://a/b/c/d;p?q").unwrap();
    let target = base.resolve(&Uri::parse("g:x/../y").unwrap());
    assert_eq!(target.scheme(), Some("g"));
    assert_eq!(target.path_to_string().unwrap(), "y");
}
