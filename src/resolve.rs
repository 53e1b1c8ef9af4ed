//! Reference resolution.

use crate::normalize::{is_absolute, remove_dot_segments};
use crate::Uri;

/// Computes the target of `reference` against `base`, following the
/// transformation of RFC 3986, section 5.2.2.
pub(crate) fn resolve(base: &Uri, reference: &Uri) -> Uri {
    let (scheme, authority, path, query);
    if reference.scheme.is_some() {
        scheme = reference.scheme.clone();
        authority = reference.authority.clone();
        path = remove_dot_segments(&reference.path);
        query = reference.query.clone();
    } else {
        scheme = base.scheme.clone();
        if reference.authority.is_some() {
            authority = reference.authority.clone();
            path = remove_dot_segments(&reference.path);
            query = reference.query.clone();
        } else {
            authority = base.authority.clone();
            if reference.path.is_empty() {
                path = base.path.clone();
                query = if reference.query.is_some() {
                    reference.query.clone()
                } else {
                    base.query.clone()
                };
            } else {
                query = reference.query.clone();
                path = if is_absolute(&reference.path) {
                    remove_dot_segments(&reference.path)
                } else {
                    remove_dot_segments(&merge(&base.path, &reference.path))
                };
            }
        }
    }
    Uri {
        scheme,
        authority,
        path,
        query,
        fragment: reference.fragment.clone(),
    }
}

// Section 5.2.3: the base keeps everything up to and including its last
// slash, then the reference's segments follow.
fn merge(base: &[Vec<u8>], reference: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let keep = if base.len() > 1 {
        &base[..base.len() - 1]
    } else {
        base
    };
    let mut merged = keep.to_vec();
    merged.extend_from_slice(reference);
    merged
}
