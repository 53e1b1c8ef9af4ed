//! Serialization to the canonical string form.

use std::fmt;

use crate::encoding::encode;
use crate::encoding::table::{PCHAR, QUERY_FRAGMENT, QUERY_WITHOUT_PLUS, REG_NAME, USERINFO};
use crate::{normalize, Authority, Uri};

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }
        if let Some(authority) = &self.authority {
            write!(f, "//{authority}")?;
        }
        if normalize::is_absolute(&self.path) && self.path.len() == 1 {
            // The bare root: one empty segment, rendered as a lone slash.
            f.write_str("/")?;
        } else if self.authority.is_none()
            && self.path.len() >= 3
            && self.path[0].is_empty()
            && self.path[1].is_empty()
        {
            // Exactly two empty segments render as a lone slash, but a
            // third segment would open the rendering with "//" and be
            // read back as an authority marker. The setters refuse to
            // build such a path without an authority; this covers a
            // value whose authority was cleared afterwards.
            f.write_str("/.")?;
        }
        for (i, segment) in self.path.iter().enumerate() {
            write!(f, "{}", encode(segment, PCHAR))?;
            if i + 1 < self.path.len() {
                f.write_str("/")?;
            }
        }
        if let Some(query) = &self.query {
            write!(f, "?{}", encode(query, QUERY_WITHOUT_PLUS))?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", encode(fragment, QUERY_FRAGMENT))?;
        }
        Ok(())
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(userinfo) = &self.userinfo {
            write!(f, "{}@", encode(userinfo, USERINFO))?;
        }
        if self.host.contains(&b':') {
            // A colon cannot appear in a registered name, so the host is
            // an IP literal and gets its brackets back.
            write!(f, "[{}]", String::from_utf8_lossy(&self.host))?;
        } else {
            write!(f, "{}", encode(&self.host, REG_NAME))?;
        }
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}
