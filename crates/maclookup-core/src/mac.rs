// ── MAC address validation ──
//
// A MAC is accepted iff it is six 2-digit hex groups joined by a single
// separator kind: all colons or all hyphens. Mixed separators are rejected.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};
use thiserror::Error;

static MAC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9A-Fa-f]{2}(?:(?::[0-9A-Fa-f]{2}){5}|(?:-[0-9A-Fa-f]{2}){5})$")
        .expect("MAC pattern is a valid regex")
});

/// Syntactic check only; no side effects.
pub fn validate_mac(candidate: &str) -> bool {
    MAC_PATTERN.is_match(candidate)
}

/// Rejected MAC syntax, carrying the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid MAC address: {input:?}")]
pub struct InvalidMac {
    pub input: String,
}

/// A validated MAC address.
///
/// Displays in canonical form `AA:BB:CC:DD:EE:FF` regardless of the
/// case or separator it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub fn parse(raw: &str) -> Result<Self, InvalidMac> {
        if !validate_mac(raw) {
            return Err(InvalidMac { input: raw.into() });
        }

        let mut octets = [0u8; 6];
        for (slot, group) in octets.iter_mut().zip(raw.split([':', '-'])) {
            *slot = u8::from_str_radix(group, 16).map_err(|_| InvalidMac { input: raw.into() })?;
        }
        Ok(Self(octets))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

impl FromStr for MacAddress {
    type Err = InvalidMac;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accepts_colon_and_hyphen_forms() {
        assert!(validate_mac("AA:BB:CC:DD:EE:FF"));
        assert!(validate_mac("aa-bb-cc-dd-ee-ff"));
        assert!(validate_mac("0a:1B:2c:3D:4e:5F"));
    }

    #[test]
    fn rejects_mixed_separators() {
        assert!(!validate_mac("AA:BB-CC:DD:EE:FF"));
        assert!(!validate_mac("AA-BB-CC-DD-EE:FF"));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in [
            "",
            "ZZ:ZZ:ZZ:ZZ:ZZ:ZZ",
            "AA:BB:CC:DD:EE",
            "AA:BB:CC:DD:EE:FF:00",
            "AABBCCDDEEFF",
            "AA.BB.CC.DD.EE.FF",
            "A:BB:CC:DD:EE:FF",
            " AA:BB:CC:DD:EE:FF",
            "AA:BB:CC:DD:EE:FF\n",
        ] {
            assert!(!validate_mac(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn parse_normalizes_to_canonical_form() {
        let mac = MacAddress::parse("aa-bb-cc-0d-ee-ff").unwrap();
        assert_eq!(mac.to_string(), "AA:BB:CC:0D:EE:FF");
        assert_eq!(mac, MacAddress([0xaa, 0xbb, 0xcc, 0x0d, 0xee, 0xff]));
    }

    #[test]
    fn canonical_form_validates() {
        for raw in ["00:00:00:00:00:00", "ff-ff-ff-ff-ff-ff", "De:aD:bE:eF:01:02"] {
            let mac: MacAddress = raw.parse().unwrap();
            assert!(validate_mac(&mac.to_string()));
            assert_eq!(MacAddress::parse(&mac.to_string()).unwrap(), mac);
        }
    }

    #[test]
    fn parse_error_keeps_input() {
        let err = MacAddress::parse("ZZ:ZZ:ZZ:ZZ:ZZ:ZZ").unwrap_err();
        assert_eq!(err.input, "ZZ:ZZ:ZZ:ZZ:ZZ:ZZ");
        assert!(err.to_string().contains("ZZ:ZZ"));
    }
}
