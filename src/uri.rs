//! The URI reference type.

use std::str::FromStr;
use std::string::FromUtf8Error;

use crate::{normalize, parser, resolve, Authority, Error};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A [URI reference][uri-ref] with an owned, percent-decoded data model.
///
/// Every component is stored decoded: the scheme lower-cased, the path
/// as a sequence of segments, and the userinfo, host, query and
/// fragment as plain octets with all percent escapes resolved. The
/// userinfo, query and fragment are tri-state (absent, present but
/// empty, or present with content) because serialization differs
/// (`http://host` versus `http://host?`).
///
/// A leading empty path segment marks an absolute path, a trailing
/// empty segment a trailing slash, and an empty sequence an empty path.
///
/// Two references are equal when all components are, with the port
/// compared only through its joint presence: a reference without a port
/// never equals one with a port, zero included.
///
/// [uri-ref]: https://datatracker.ietf.org/doc/html/rfc3986#section-4.1
///
/// # Examples
///
/// ```
/// use lucid_uri::Uri;
///
/// let uri = Uri::parse("https://www.example.com/search?q=uri#top")?;
/// assert_eq!(uri.scheme(), Some("https"));
/// assert_eq!(uri.host(), Some(&b"www.example.com"[..]));
/// assert_eq!(uri.path_to_string().unwrap(), "/search");
/// assert_eq!(uri.query(), Some(&b"q=uri"[..]));
/// assert_eq!(uri.fragment(), Some(&b"top"[..]));
/// # Ok::<_, lucid_uri::Error>(())
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Uri {
    pub(crate) scheme: Option<String>,
    pub(crate) authority: Option<Authority>,
    pub(crate) path: Vec<Vec<u8>>,
    pub(crate) query: Option<Vec<u8>>,
    pub(crate) fragment: Option<Vec<u8>>,
}

impl Uri {
    /// Parses a URI reference from a string.
    ///
    /// The scheme and a registered-name host are lower-cased; all other
    /// components are kept as given, with their percent escapes
    /// decoded.
    ///
    /// # Errors
    ///
    /// Returns `Err` on the first violation of the URI grammar: a
    /// malformed scheme, a malformed or truncated percent escape, a
    /// character outside its component's alphabet, a bad port, or a bad
    /// IP literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use lucid_uri::Uri;
    ///
    /// let uri = Uri::parse("urn:book:fantasy:Hobbit")?;
    /// assert_eq!(uri.scheme(), Some("urn"));
    /// assert_eq!(uri.path(), [&b"book:fantasy:Hobbit"[..]]);
    ///
    /// assert!(Uri::parse("0://www.example.com/").is_err());
    /// # Ok::<_, lucid_uri::Error>(())
    /// ```
    pub fn parse<S: AsRef<str>>(input: S) -> Result<Self, Error> {
        parser::parse(input.as_ref())
    }

    /// Returns the scheme, if present.
    ///
    /// A reference without a scheme is a [relative
    /// reference](Self::is_relative_reference).
    ///
    /// # Examples
    ///
    /// ```
    /// use lucid_uri::Uri;
    ///
    /// assert_eq!(Uri::parse("HTTP://example.com/")?.scheme(), Some("http"));
    /// assert_eq!(Uri::parse("//example.com/")?.scheme(), None);
    /// # Ok::<_, lucid_uri::Error>(())
    /// ```
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns the authority component, if present.
    #[must_use]
    pub fn authority(&self) -> Option<&Authority> {
        self.authority.as_ref()
    }

    /// Returns the decoded userinfo subcomponent, if present.
    ///
    /// An empty userinfo (`//@host`) is present and empty, not absent.
    #[must_use]
    pub fn userinfo(&self) -> Option<&[u8]> {
        self.authority.as_ref().and_then(|authority| authority.userinfo())
    }

    /// Returns the decoded host, if an authority is present.
    ///
    /// A registered name is lower-cased; an IP literal keeps its case
    /// and its brackets are stripped.
    ///
    /// # Examples
    ///
    /// ```
    /// use lucid_uri::Uri;
    ///
    /// let uri = Uri::parse("//www.Example.COM/")?;
    /// assert_eq!(uri.host(), Some(&b"www.example.com"[..]));
    ///
    /// let uri = Uri::parse("http://[2001:db8:85a3:8d3:1319:8a2e:370:7348]/")?;
    /// assert_eq!(uri.host(), Some(&b"2001:db8:85a3:8d3:1319:8a2e:370:7348"[..]));
    /// # Ok::<_, lucid_uri::Error>(())
    /// ```
    #[must_use]
    pub fn host(&self) -> Option<&[u8]> {
        self.authority.as_ref().map(Authority::host)
    }

    /// Returns the port, if present.
    ///
    /// An empty port (`//host:/`) counts as absent; a zero port does
    /// not.
    ///
    /// # Examples
    ///
    /// ```
    /// use lucid_uri::Uri;
    ///
    /// assert_eq!(Uri::parse("//example.com:8080/")?.port(), Some(8080));
    /// assert_eq!(Uri::parse("//example.com:0/")?.port(), Some(0));
    /// assert_eq!(Uri::parse("//example.com:/")?.port(), None);
    /// # Ok::<_, lucid_uri::Error>(())
    /// ```
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.authority.as_ref().and_then(Authority::port)
    }

    /// Checks whether a port is present.
    #[must_use]
    pub fn has_port(&self) -> bool {
        self.port().is_some()
    }

    /// Returns the path as its decoded segment list.
    ///
    /// # Examples
    ///
    /// ```
    /// use lucid_uri::Uri;
    ///
    /// assert_eq!(Uri::parse("")?.path(), [&b""[..]; 0]);
    /// assert_eq!(Uri::parse("/")?.path(), [&b""[..]]);
    /// assert_eq!(Uri::parse("/foo")?.path(), [&b""[..], &b"foo"[..]]);
    /// assert_eq!(Uri::parse("foo/")?.path(), [&b"foo"[..], &b""[..]]);
    /// # Ok::<_, lucid_uri::Error>(())
    /// ```
    #[must_use]
    pub fn path(&self) -> &[Vec<u8>] {
        &self.path
    }

    /// Returns the decoded query, if present.
    #[must_use]
    pub fn query(&self) -> Option<&[u8]> {
        self.query.as_deref()
    }

    /// Checks whether a query is present, even an empty one.
    ///
    /// # Examples
    ///
    /// ```
    /// use lucid_uri::Uri;
    ///
    /// assert!(Uri::parse("http://example.com?")?.has_query());
    /// assert!(!Uri::parse("http://example.com")?.has_query());
    /// # Ok::<_, lucid_uri::Error>(())
    /// ```
    #[must_use]
    pub fn has_query(&self) -> bool {
        self.query.is_some()
    }

    /// Returns the decoded fragment, if present.
    #[must_use]
    pub fn fragment(&self) -> Option<&[u8]> {
        self.fragment.as_deref()
    }

    /// Checks whether a fragment is present, even an empty one.
    #[must_use]
    pub fn has_fragment(&self) -> bool {
        self.fragment.is_some()
    }

    /// Returns the userinfo as a string, if present.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the decoded octets are not valid UTF-8.
    pub fn userinfo_to_string(&self) -> Result<Option<String>, FromUtf8Error> {
        self.userinfo()
            .map(|userinfo| String::from_utf8(userinfo.to_vec()))
            .transpose()
    }

    /// Returns the host as a string, if present.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the decoded octets are not valid UTF-8.
    pub fn host_to_string(&self) -> Result<Option<String>, FromUtf8Error> {
        self.host()
            .map(|host| String::from_utf8(host.to_vec()))
            .transpose()
    }

    /// Returns the query as a string, if present.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the decoded octets are not valid UTF-8.
    pub fn query_to_string(&self) -> Result<Option<String>, FromUtf8Error> {
        self.query()
            .map(|query| String::from_utf8(query.to_vec()))
            .transpose()
    }

    /// Returns the fragment as a string, if present.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the decoded octets are not valid UTF-8.
    pub fn fragment_to_string(&self) -> Result<Option<String>, FromUtf8Error> {
        self.fragment()
            .map(|fragment| String::from_utf8(fragment.to_vec()))
            .transpose()
    }

    /// Returns the path as a string, joining the segments with `/`.
    ///
    /// The segments are not re-encoded; this is the decoded path text.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the decoded octets are not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use lucid_uri::Uri;
    ///
    /// assert_eq!(Uri::parse("/foo/bar")?.path_to_string().unwrap(), "/foo/bar");
    /// assert_eq!(Uri::parse("http://example.com")?.path_to_string().unwrap(), "/");
    /// # Ok::<_, lucid_uri::Error>(())
    /// ```
    pub fn path_to_string(&self) -> Result<String, FromUtf8Error> {
        match self.path.as_slice() {
            [segment] if segment.is_empty() => Ok("/".to_owned()),
            path => String::from_utf8(path.join(&b"/"[..])),
        }
    }

    /// Checks whether this is a relative reference, i.e. whether the
    /// scheme is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use lucid_uri::Uri;
    ///
    /// assert!(Uri::parse("/foo")?.is_relative_reference());
    /// assert!(!Uri::parse("http://example.com/")?.is_relative_reference());
    /// # Ok::<_, lucid_uri::Error>(())
    /// ```
    #[must_use]
    pub fn is_relative_reference(&self) -> bool {
        self.scheme.is_none()
    }

    /// Checks whether the path is relative, i.e. does not begin with
    /// the empty segment that marks the root.
    ///
    /// An empty path counts as relative.
    #[must_use]
    pub fn contains_relative_path(&self) -> bool {
        !normalize::is_absolute(&self.path)
    }

    /// Sets or clears the scheme, validating and lower-casing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyScheme`] on `Some("")` and
    /// [`Error::IllegalCharacter`] on a name that does not start with a
    /// letter or strays outside letters, digits, `+`, `-` and `.`.
    pub fn set_scheme<S: Into<Option<String>>>(&mut self, scheme: S) -> Result<(), Error> {
        self.scheme = match scheme.into() {
            Some(scheme) => {
                parser::check_scheme(&scheme)?;
                Some(scheme.to_ascii_lowercase())
            }
            None => None,
        };
        Ok(())
    }

    /// Sets or clears the authority component.
    pub fn set_authority<T: Into<Option<Authority>>>(&mut self, authority: T) {
        self.authority = authority.into();
    }

    /// Sets the path to the given decoded segment list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathStartsWithDoubleSlash`] when no authority is
    /// present and the path would render with a leading `//`, which
    /// would be read back as an authority marker.
    ///
    /// # Examples
    ///
    /// ```
    /// use lucid_uri::{Error, Uri};
    ///
    /// let mut uri = Uri::default();
    /// uri.set_path(vec![b"".to_vec(), b"foo".to_vec()])?;
    /// assert_eq!(uri.to_string(), "/foo");
    ///
    /// let rootless = vec![b"".to_vec(), b"".to_vec(), b"g".to_vec()];
    /// assert_eq!(uri.set_path(rootless), Err(Error::PathStartsWithDoubleSlash));
    /// # Ok::<_, lucid_uri::Error>(())
    /// ```
    pub fn set_path<T: Into<Vec<Vec<u8>>>>(&mut self, path: T) -> Result<(), Error> {
        let path = path.into();
        self.check_path(&path)?;
        self.path = path;
        Ok(())
    }

    /// Sets the path by splitting a decoded string on `/`.
    ///
    /// `""` yields the empty path and `"/"` the bare root, matching the
    /// parser's segmentation so that serialization round-trips.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathStartsWithDoubleSlash`] under the same rule
    /// as [`set_path`](Self::set_path).
    pub fn set_path_from_str<S: AsRef<str>>(&mut self, path: S) -> Result<(), Error> {
        self.set_path(match path.as_ref() {
            "" => Vec::new(),
            "/" => vec![Vec::new()],
            path => path
                .split('/')
                .map(|segment| segment.as_bytes().to_vec())
                .collect::<Vec<_>>(),
        })
    }

    // Without an authority, a path of three or more segments whose first
    // two are empty would render starting with "//"; such a path may
    // only be combined with an authority.
    fn check_path(&self, path: &[Vec<u8>]) -> Result<(), Error> {
        if self.authority.is_none()
            && path.len() > 2
            && path[0].is_empty()
            && path[1].is_empty()
        {
            return Err(Error::PathStartsWithDoubleSlash);
        }
        Ok(())
    }

    /// Sets or clears the query.
    ///
    /// # Examples
    ///
    /// ```
    /// use lucid_uri::Uri;
    ///
    /// let mut uri = Uri::default();
    /// uri.set_query(Some(b"foo+bar".to_vec()));
    /// assert_eq!(uri.to_string(), "?foo%2Bbar");
    /// uri.set_query(None);
    /// assert_eq!(uri.to_string(), "");
    /// ```
    pub fn set_query<T: Into<Option<Vec<u8>>>>(&mut self, query: T) {
        self.query = query.into();
    }

    /// Sets or clears the fragment.
    pub fn set_fragment<T: Into<Option<Vec<u8>>>>(&mut self, fragment: T) {
        self.fragment = fragment.into();
    }

    /// Removes dot segments from the path in place, applying the
    /// `remove_dot_segments` algorithm of RFC 3986, section 5.2.4.
    ///
    /// An absolute path stays absolute, and a path that ends at a
    /// directory level keeps a trailing slash. Normalization is
    /// idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// use lucid_uri::Uri;
    ///
    /// let mut uri = Uri::parse("/a/b/c/./../../g")?;
    /// uri.normalize_path();
    /// assert_eq!(uri.path_to_string().unwrap(), "/a/g");
    /// # Ok::<_, lucid_uri::Error>(())
    /// ```
    pub fn normalize_path(&mut self) {
        self.path = normalize::remove_dot_segments(&self.path);
    }

    /// Resolves a reference against this base, following the
    /// transformation of RFC 3986, section 5.2.2, and returns the
    /// target.
    ///
    /// The target is a fresh value; neither input is modified. With a
    /// relative reference as the base the target is simply another
    /// relative reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use lucid_uri::Uri;
    ///
    /// let base = Uri::parse("http://a/b/c/d;p?q")?;
    /// assert_eq!(base.resolve(&Uri::parse("g")?).to_string(), "http://a/b/c/g");
    /// assert_eq!(base.resolve(&Uri::parse("../g")?).to_string(), "http://a/b/g");
    /// assert_eq!(base.resolve(&Uri::parse("?y")?).to_string(), "http://a/b/c/d;p?y");
    /// # Ok::<_, lucid_uri::Error>(())
    /// ```
    #[must_use]
    pub fn resolve(&self, reference: &Uri) -> Uri {
        resolve::resolve(self, reference)
    }
}

impl FromStr for Uri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Uri {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Uri {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
