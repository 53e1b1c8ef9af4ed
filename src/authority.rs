//! The authority component and its host-and-port state machine.

use std::mem;

use crate::encoding::table::{HEXDIG, IPV_FUTURE, REG_NAME, USERINFO};
use crate::encoding::{self, PctDecoder};
use crate::ip::validate_ipv6_address;
use crate::{Component, Error};

/// An [authority] component: the `userinfo@host:port` composite that
/// follows `//` in a URI.
///
/// All parts are stored decoded. A registered name is lower-cased at
/// parse time; an IP literal keeps its case and is stored without the
/// enclosing brackets, which the serializer re-adds. The userinfo is
/// tri-state: absent, present but empty (`@host` round-trips), or
/// present with content. A port of zero is distinct from no port.
///
/// [authority]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2
///
/// # Examples
///
/// ```
/// use lucid_uri::Authority;
///
/// let authority = Authority::parse("user@example.com:8080")?;
/// assert_eq!(authority.userinfo(), Some(&b"user"[..]));
/// assert_eq!(authority.host(), b"example.com");
/// assert_eq!(authority.port(), Some(8080));
/// # Ok::<_, lucid_uri::Error>(())
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Authority {
    pub(crate) userinfo: Option<Vec<u8>>,
    pub(crate) host: Vec<u8>,
    pub(crate) port: Option<u16>,
}

impl Authority {
    /// Parses an authority string, sans the leading `//` marker.
    ///
    /// # Errors
    ///
    /// Returns `Err` on an illegal or malformed userinfo, host or port.
    pub fn parse<S: AsRef<str>>(authority: S) -> Result<Self, Error> {
        let authority = authority.as_ref();
        let (userinfo, host_port) = match authority.rfind('@') {
            Some(delimiter) => (
                Some(encoding::decode(
                    &authority[..delimiter],
                    USERINFO,
                    Component::Userinfo,
                )?),
                &authority[delimiter + 1..],
            ),
            None => (None, authority),
        };
        let (host, port) = parse_host_port(host_port)?;
        Ok(Self {
            userinfo,
            host,
            port,
        })
    }

    /// Returns the decoded userinfo subcomponent, if present.
    #[must_use]
    pub fn userinfo(&self) -> Option<&[u8]> {
        self.userinfo.as_deref()
    }

    /// Returns the decoded host subcomponent.
    ///
    /// The host is always present within an authority, although it may
    /// be empty.
    #[must_use]
    pub fn host(&self) -> &[u8] {
        &self.host
    }

    /// Returns the port subcomponent, if present.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Sets or clears the userinfo subcomponent.
    pub fn set_userinfo<T: Into<Option<Vec<u8>>>>(&mut self, userinfo: T) {
        self.userinfo = userinfo.into();
    }

    /// Sets the host subcomponent to the given decoded octets.
    pub fn set_host<T: Into<Vec<u8>>>(&mut self, host: T) {
        self.host = host.into();
    }

    /// Sets or clears the port subcomponent.
    pub fn set_port(&mut self, port: Option<u16>) {
        self.port = port;
    }
}

/// States of the host-and-port machine.
///
/// `FirstCharacter` and `IpLiteral` classify a byte and then hand the
/// same byte to their successor, so the driving loop advances the
/// cursor only when a state has consumed its input.
#[derive(Clone, Copy)]
enum HostState {
    FirstCharacter,
    NotIpLiteral,
    PercentEncoded,
    IpLiteral,
    Ipv6Address,
    IpvFutureNumber,
    IpvFutureBody,
    GarbageCheck,
    Port,
}

fn parse_host_port(input: &str) -> Result<(Vec<u8>, Option<u16>), Error> {
    let bytes = input.as_bytes();
    let mut host = Vec::new();
    // The text between the brackets of an IPv6 literal, validated as a
    // whole once the closing bracket arrives.
    let mut address = Vec::new();
    let mut port = Vec::new();
    let mut decoder = PctDecoder::new();
    let mut is_reg_name = false;
    let mut state = HostState::FirstCharacter;

    let mut i = 0;
    while i < bytes.len() {
        let x = bytes[i];
        match state {
            HostState::FirstCharacter => {
                if x == b'[' {
                    state = HostState::IpLiteral;
                } else {
                    is_reg_name = true;
                    state = HostState::NotIpLiteral;
                    // Re-dispatch the same byte.
                    continue;
                }
            }
            HostState::NotIpLiteral => {
                // The decoder is back at its initial state whenever this
                // state is live, so the escape can feed it directly.
                if x == b'%' {
                    state = HostState::PercentEncoded;
                } else if x == b':' {
                    state = HostState::Port;
                } else if REG_NAME.contains(x) {
                    host.push(x);
                } else {
                    return Err(Error::IllegalCharacter(Component::Host));
                }
            }
            HostState::PercentEncoded => {
                if let Some(octet) = decoder.push(x)? {
                    host.push(octet);
                    state = HostState::NotIpLiteral;
                }
            }
            HostState::IpLiteral => {
                if x == b'v' {
                    host.push(x);
                    state = HostState::IpvFutureNumber;
                } else {
                    state = HostState::Ipv6Address;
                    continue;
                }
            }
            HostState::Ipv6Address => {
                if x == b']' {
                    validate_ipv6_address(&address)?;
                    host = mem::take(&mut address);
                    state = HostState::GarbageCheck;
                } else {
                    address.push(x);
                }
            }
            HostState::IpvFutureNumber => {
                if x == b'.' {
                    host.push(x);
                    state = HostState::IpvFutureBody;
                } else if x == b']' {
                    return Err(Error::TruncatedHost);
                } else if HEXDIG.contains(x) {
                    host.push(x);
                } else {
                    return Err(Error::IllegalCharacter(Component::IpvFuture));
                }
            }
            HostState::IpvFutureBody => {
                if x == b']' {
                    state = HostState::GarbageCheck;
                } else if IPV_FUTURE.contains(x) {
                    host.push(x);
                } else {
                    return Err(Error::IllegalCharacter(Component::IpvFuture));
                }
            }
            HostState::GarbageCheck => {
                // Only a port delimiter may follow the closing bracket.
                if x == b':' {
                    state = HostState::Port;
                } else {
                    return Err(Error::IllegalCharacter(Component::Host));
                }
            }
            HostState::Port => port.push(x),
        }
        i += 1;
    }

    match state {
        HostState::PercentEncoded
        | HostState::IpLiteral
        | HostState::Ipv6Address
        | HostState::IpvFutureNumber
        | HostState::IpvFutureBody => return Err(Error::TruncatedHost),
        HostState::FirstCharacter
        | HostState::NotIpLiteral
        | HostState::GarbageCheck
        | HostState::Port => {}
    }

    if is_reg_name {
        host.make_ascii_lowercase();
    }
    Ok((host, parse_port(&port)?))
}

fn parse_port(port: &[u8]) -> Result<Option<u16>, Error> {
    if port.is_empty() {
        return Ok(None);
    }
    let mut value = 0u32;
    for &x in port {
        if !x.is_ascii_digit() {
            return Err(Error::InvalidPortNumber);
        }
        value = value * 10 + u32::from(x - b'0');
        if value > u32::from(u16::MAX) {
            return Err(Error::InvalidPortNumber);
        }
    }
    Ok(Some(value as u16))
}
