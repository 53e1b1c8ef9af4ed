//! Error types.

use std::fmt;

/// The part of a URI reference in which an error was detected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Component {
    /// The scheme.
    Scheme,
    /// The userinfo subcomponent of the authority.
    Userinfo,
    /// The host subcomponent of the authority.
    Host,
    /// An IPv4 address, standalone or embedded in an IPv6 address.
    Ipv4Address,
    /// A bracketed IPv6 address.
    Ipv6Address,
    /// A bracketed IPvFuture address.
    IpvFuture,
    /// The path.
    Path,
    /// The query.
    Query,
    /// The fragment.
    Fragment,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scheme => "scheme",
            Self::Userinfo => "userinfo",
            Self::Host => "host",
            Self::Ipv4Address => "IPv4 address",
            Self::Ipv6Address => "IPv6 address",
            Self::IpvFuture => "IPvFuture address",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
        };
        f.write_str(name)
    }
}

/// An error encountered when parsing or assembling a URI reference.
///
/// Every variant is fatal: the parser reports the first error it meets
/// and produces no value.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// A scheme that is empty where one was given.
    #[error("scheme is empty")]
    EmptyScheme,

    /// An unencoded character outside the alphabet of the component it
    /// appeared in.
    #[error("illegal character in {0}")]
    IllegalCharacter(Component),

    /// A percent escape with a non-hexadecimal digit, or one cut short
    /// by the end of its component.
    #[error("invalid percent-encoded octet")]
    InvalidPercentEncoding,

    /// A path that would render with a leading `//` while no authority
    /// is present to delimit it.
    #[error("when authority is not present, path should not start with \"//\"")]
    PathStartsWithDoubleSlash,

    /// A port containing a non-digit character, or a value above 65535.
    #[error("invalid port number")]
    InvalidPortNumber,

    /// A host ending inside a bracketed IP literal or a percent escape,
    /// or an IP address cut short.
    #[error("truncated host")]
    TruncatedHost,

    /// An IP address with too few groups.
    #[error("too few address parts")]
    TooFewAddressParts,

    /// An IP address with too many groups.
    #[error("too many address parts")]
    TooManyAddressParts,

    /// An IPv6 address group with more than four hexadecimal digits.
    #[error("too many digits in IPv6 address group")]
    TooManyDigits,

    /// More than one `::` in an IPv6 address.
    #[error("too many double-colons in IPv6 address")]
    TooManyDoubleColons,

    /// An IPv4 decimal octet above 255.
    #[error("invalid decimal octet")]
    InvalidDecimalOctet,
}
