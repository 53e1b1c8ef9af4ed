//! The top-level reference parser.
//!
//! Parsing peels the components off in grammar order: the scheme cut,
//! the `//` authority marker, the path, then the fragment and query out
//! of the trailing region. Each component is element-decoded against
//! its own alphabet as it is peeled.

use crate::authority::Authority;
use crate::encoding::table::{ALPHA, PCHAR, QUERY_FRAGMENT, SCHEME_NOT_FIRST};
use crate::{encoding, Component, Error, Uri};

pub(crate) fn parse(input: &str) -> Result<Uri, Error> {
    let (scheme, rest) = parse_scheme(input)?;
    // The earliest of `?` and `#` ends the authority-and-path region.
    let path_end = rest.find(&['?', '#'][..]).unwrap_or(rest.len());
    let (authority_and_path, query_and_fragment) = rest.split_at(path_end);
    let (authority, path) = split_authority_and_path(authority_and_path)?;
    let (fragment, query_source) = take_fragment(query_and_fragment)?;
    let query = take_query(query_source)?;
    Ok(Uri {
        scheme,
        authority,
        path,
        query,
        fragment,
    })
}

fn parse_scheme(input: &str) -> Result<(Option<String>, &str), Error> {
    // Confine the colon search to the prefix before the first slash;
    // past it, a colon may legally appear in the authority or path and
    // must not be mistaken for the scheme delimiter.
    let limit = input.find('/').unwrap_or(input.len());
    match input[..limit].find(':') {
        Some(end) => {
            let scheme = check_scheme(&input[..end])?;
            Ok((Some(scheme.to_ascii_lowercase()), &input[end + 1..]))
        }
        None => Ok((None, input)),
    }
}

/// Checks a scheme name: one leading alphabetic character, then any mix
/// of letters, digits, `+`, `-` and `.`.
pub(crate) fn check_scheme(scheme: &str) -> Result<&str, Error> {
    match scheme.as_bytes() {
        [] => Err(Error::EmptyScheme),
        [first, rest @ ..] => {
            if ALPHA.contains(*first) && rest.iter().all(|&x| SCHEME_NOT_FIRST.contains(x)) {
                Ok(scheme)
            } else {
                Err(Error::IllegalCharacter(Component::Scheme))
            }
        }
    }
}

fn split_authority_and_path(input: &str) -> Result<(Option<Authority>, Vec<Vec<u8>>), Error> {
    match input.strip_prefix("//") {
        Some(rest) => {
            let authority_end = rest.find('/').unwrap_or(rest.len());
            let authority = Authority::parse(&rest[..authority_end])?;
            let path = &rest[authority_end..];
            // A present authority with nothing behind it still addresses
            // the root, so an empty path becomes the single empty segment.
            let path = if path.is_empty() {
                vec![Vec::new()]
            } else {
                parse_path(path)?
            };
            Ok((Some(authority), path))
        }
        None => Ok((None, parse_path(input)?)),
    }
}

fn parse_path(path: &str) -> Result<Vec<Vec<u8>>, Error> {
    match path {
        // The root by itself: absolute, marked by one empty segment.
        "/" => Ok(vec![Vec::new()]),
        "" => Ok(Vec::new()),
        path => path
            .split('/')
            .map(|segment| encoding::decode(segment, PCHAR, Component::Path))
            .collect(),
    }
}

fn take_fragment(query_and_fragment: &str) -> Result<(Option<Vec<u8>>, &str), Error> {
    match query_and_fragment.find('#') {
        Some(delimiter) => Ok((
            Some(encoding::decode(
                &query_and_fragment[delimiter + 1..],
                QUERY_FRAGMENT,
                Component::Fragment,
            )?),
            &query_and_fragment[..delimiter],
        )),
        None => Ok((None, query_and_fragment)),
    }
}

fn take_query(query_source: &str) -> Result<Option<Vec<u8>>, Error> {
    if query_source.is_empty() {
        Ok(None)
    } else {
        // A nonempty source always begins with the `?` delimiter.
        encoding::decode(&query_source[1..], QUERY_FRAGMENT, Component::Query).map(Some)
    }
}
