//! Dot-segment removal over decoded path segments.

/// Applies the `remove_dot_segments` algorithm of RFC 3986,
/// section 5.2.4, rebuilding the path one segment at a time.
pub(crate) fn remove_dot_segments(path: &[Vec<u8>]) -> Vec<Vec<u8>> {
    // `at_directory` tracks whether the rebuilt path currently refers
    // to a directory, i.e. whether the last consumed segment was ".",
    // ".." or empty.
    let mut normalized: Vec<Vec<u8>> = Vec::with_capacity(path.len());
    let mut at_directory = false;
    for segment in path {
        if segment == b"." {
            at_directory = true;
        } else if segment == b".." {
            if can_pop(&normalized) {
                normalized.pop();
            }
            at_directory = true;
        } else {
            // An empty segment marks a transition to directory context;
            // a repeated transition collapses.
            if !at_directory || !segment.is_empty() {
                normalized.push(segment.clone());
            }
            at_directory = segment.is_empty();
        }
    }
    // Close with a trailing slash when the walk ended at a directory.
    if at_directory && normalized.last().is_some_and(|segment| !segment.is_empty()) {
        normalized.push(Vec::new());
    }
    normalized
}

// The leading empty segment of an absolute path marks the root and is
// never popped.
fn can_pop(path: &[Vec<u8>]) -> bool {
    match path.first() {
        Some(segment) if segment.is_empty() => path.len() > 1,
        Some(_) => true,
        None => false,
    }
}

/// Whether the path begins with the empty segment that marks the root.
pub(crate) fn is_absolute(path: &[Vec<u8>]) -> bool {
    matches!(path.first(), Some(segment) if segment.is_empty())
}
