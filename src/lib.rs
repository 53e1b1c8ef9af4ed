#![warn(rust_2018_idioms, unreachable_pub, missing_docs)]
//! An RFC 3986 URI parser, resolver and builder with an owned,
//! percent-decoded data model.
//!
//! A [`Uri`] holds each component of a parsed URI reference in decoded
//! form: the scheme lower-cased, the path split into segments, and the
//! userinfo, host, query and fragment as plain octets with all percent
//! escapes resolved. Serializing with [`Display`](std::fmt::Display)
//! re-encodes exactly the characters each component requires.
//!
//! # Examples
//!
//! ```
//! use lucid_uri::Uri;
//!
//! let uri = Uri::parse("http://user@example.com:8080/foo/bar?baz#quux")?;
//! assert_eq!(uri.scheme(), Some("http"));
//! assert_eq!(uri.userinfo(), Some(&b"user"[..]));
//! assert_eq!(uri.host(), Some(&b"example.com"[..]));
//! assert_eq!(uri.port(), Some(8080));
//! assert_eq!(uri.path(), [&b""[..], &b"foo"[..], &b"bar"[..]]);
//! assert_eq!(uri.query(), Some(&b"baz"[..]));
//! assert_eq!(uri.fragment(), Some(&b"quux"[..]));
//!
//! let base = Uri::parse("http://a/b/c/d;p?q")?;
//! let target = base.resolve(&Uri::parse("../../g")?);
//! assert_eq!(target.to_string(), "http://a/g");
//! # Ok::<_, lucid_uri::Error>(())
//! ```

/// Utilities for percent-encoding.
pub mod encoding;

mod authority;
mod error;
mod fmt;
mod ip;
mod normalize;
mod parser;
mod resolve;
mod uri;

pub use authority::Authority;
pub use error::{Component, Error};
pub use uri::Uri;
