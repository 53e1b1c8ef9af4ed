//! IP address validation for bracketed host literals.

use crate::encoding::table::{DIGIT, HEXDIG};
use crate::{Component, Error};

#[derive(Clone, Copy)]
enum V6State {
    /// Nothing consumed yet.
    NoGroupsYet,
    /// A leading colon; only a second one may follow.
    LeadingColon,
    /// Directly behind `::`.
    AfterDoubleColon,
    /// Inside a group of hex digits. The flag stays set while the group
    /// could still turn out to be the first octet of a trailing
    /// dotted-quad address.
    InGroup { could_be_v4: bool },
    /// Behind the colon that closed a group.
    AfterGroupColon,
}

/// Validates the text between the brackets of an IP literal as an IPv6
/// address: at most one `::`, one to four hex digits per group, eight
/// groups without an ellipsis or at most seven with one, and an
/// optional trailing embedded IPv4 address counting as two groups.
pub(crate) fn validate_ipv6_address(address: &[u8]) -> Result<(), Error> {
    let mut groups = 0usize;
    let mut digits = 0usize;
    let mut double_colon = false;
    let mut v4_start = 0usize;
    let mut state = V6State::NoGroupsYet;

    for (i, &x) in address.iter().enumerate() {
        state = match state {
            V6State::NoGroupsYet => {
                if x == b':' {
                    V6State::LeadingColon
                } else if DIGIT.contains(x) {
                    v4_start = i;
                    digits = 1;
                    V6State::InGroup { could_be_v4: true }
                } else if HEXDIG.contains(x) {
                    digits = 1;
                    V6State::InGroup { could_be_v4: false }
                } else {
                    return Err(Error::IllegalCharacter(Component::Ipv6Address));
                }
            }
            V6State::LeadingColon => {
                if x == b':' {
                    double_colon = true;
                    V6State::AfterDoubleColon
                } else {
                    return Err(Error::IllegalCharacter(Component::Ipv6Address));
                }
            }
            V6State::AfterDoubleColon => {
                digits = 1;
                if DIGIT.contains(x) {
                    v4_start = i;
                    V6State::InGroup { could_be_v4: true }
                } else if HEXDIG.contains(x) {
                    V6State::InGroup { could_be_v4: false }
                } else {
                    return Err(Error::IllegalCharacter(Component::Ipv6Address));
                }
            }
            V6State::InGroup { could_be_v4 } => {
                if x == b':' {
                    groups += 1;
                    V6State::AfterGroupColon
                } else if x == b'.' && could_be_v4 {
                    // The rest is a dotted quad, counting as two groups.
                    validate_ipv4_address(&address[v4_start..])?;
                    return finish(double_colon, groups + 2);
                } else if digits == 4 {
                    return Err(Error::TooManyDigits);
                } else if DIGIT.contains(x) {
                    digits += 1;
                    V6State::InGroup { could_be_v4 }
                } else if HEXDIG.contains(x) {
                    digits += 1;
                    V6State::InGroup { could_be_v4: false }
                } else {
                    return Err(Error::IllegalCharacter(Component::Ipv6Address));
                }
            }
            V6State::AfterGroupColon => {
                if x == b':' {
                    if double_colon {
                        return Err(Error::TooManyDoubleColons);
                    }
                    double_colon = true;
                    V6State::AfterDoubleColon
                } else if DIGIT.contains(x) {
                    v4_start = i;
                    digits = 1;
                    V6State::InGroup { could_be_v4: true }
                } else if HEXDIG.contains(x) {
                    digits = 1;
                    V6State::InGroup { could_be_v4: false }
                } else {
                    return Err(Error::IllegalCharacter(Component::Ipv6Address));
                }
            }
        };
    }

    match state {
        V6State::LeadingColon | V6State::AfterGroupColon => Err(Error::TruncatedHost),
        V6State::InGroup { .. } => finish(double_colon, groups + 1),
        V6State::NoGroupsYet | V6State::AfterDoubleColon => finish(double_colon, groups),
    }
}

fn finish(double_colon: bool, groups: usize) -> Result<(), Error> {
    match (double_colon, groups) {
        (true, n) if n <= 7 => Ok(()),
        (false, 8) => Ok(()),
        (false, n) if n < 8 => Err(Error::TooFewAddressParts),
        _ => Err(Error::TooManyAddressParts),
    }
}

#[derive(Clone, Copy)]
enum V4State {
    NotInOctet,
    InOctet,
}

/// Validates a dotted-quad IPv4 address: exactly four decimal octet
/// groups, each no larger than 255.
pub(crate) fn validate_ipv4_address(address: &[u8]) -> Result<(), Error> {
    let mut groups = 0usize;
    let mut octet = 0u32;
    let mut state = V4State::NotInOctet;

    for &x in address {
        state = match state {
            V4State::NotInOctet => {
                if DIGIT.contains(x) {
                    octet = u32::from(x - b'0');
                    V4State::InOctet
                } else {
                    return Err(Error::IllegalCharacter(Component::Ipv4Address));
                }
            }
            V4State::InOctet => {
                if x == b'.' {
                    groups += 1;
                    if groups > 4 {
                        return Err(Error::TooManyAddressParts);
                    }
                    if octet > 255 {
                        return Err(Error::InvalidDecimalOctet);
                    }
                    V4State::NotInOctet
                } else if DIGIT.contains(x) {
                    octet = octet.saturating_mul(10).saturating_add(u32::from(x - b'0'));
                    V4State::InOctet
                } else {
                    return Err(Error::IllegalCharacter(Component::Ipv4Address));
                }
            }
        };
    }

    match state {
        V4State::NotInOctet => Err(Error::TruncatedHost),
        V4State::InOctet => {
            groups += 1;
            if octet > 255 {
                return Err(Error::InvalidDecimalOctet);
            }
            match groups {
                4 => Ok(()),
                n if n < 4 => Err(Error::TooFewAddressParts),
                _ => Err(Error::TooManyAddressParts),
            }
        }
    }
}
