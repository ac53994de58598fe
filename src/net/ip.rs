//! Strict IPv4 address and CIDR mask literals.
//!
//! Parsing here is deliberately stricter than [`std::net::Ipv4Addr`]: no
//! leading zeros ("127.0.0.01"), no surrounding whitespace, no partial
//! quads. Whatever passes is kept verbatim as the displayable text, with
//! the octets and the packed 32-bit value derived alongside.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("not a valid IP address")]
    Address,
    #[error("not a valid IP mask")]
    Mask,
}

/// A validated IPv4 host address.
///
/// Equality and hashing consider only the packed [`bits`](Self::bits) value;
/// the original literal is carried along for display.
#[derive(Debug, Clone)]
pub struct IpAddress {
    text: String,
    octets: [u8; 4],
    bits: u32,
}

impl IpAddress {
    /// Non-failing probe variant of [`FromStr`] parsing.
    pub fn try_parse(text: &str) -> Option<IpAddress> {
        text.parse().ok()
    }

    /// The literal this address was parsed from, byte for byte.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The four octets in network order.
    pub fn octets(&self) -> [u8; 4] {
        self.octets
    }

    /// The address as a big-endian packed 32-bit value.
    pub fn bits(&self) -> u32 {
        self.bits
    }
}

impl FromStr for IpAddress {
    type Err = ParseError;

    /// Single left-to-right scan over the input bytes. Each quad component
    /// must be 1-3 decimal digits, value 0-255, with "0" the only component
    /// allowed to start with a zero. Exactly three dots; anything else in
    /// the input rejects the whole string.
    fn from_str(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Err(ParseError::Address);
        }

        let mut octets = [0u8; 4];
        let mut component = 0;
        let mut at_start = true;

        for byte in s.bytes() {
            if at_start {
                match byte {
                    b'0'..=b'9' => {
                        octets[component] = byte - b'0';
                        at_start = false;
                    }
                    _ => return Err(ParseError::Address),
                }
            } else {
                match byte {
                    b'0'..=b'9' => {
                        // A second digit after "0" is a leading zero.
                        if octets[component] == 0 {
                            return Err(ParseError::Address);
                        }
                        let value = u32::from(octets[component]) * 10 + u32::from(byte - b'0');
                        if value > 255 {
                            return Err(ParseError::Address);
                        }
                        octets[component] = value as u8;
                    }
                    b'.' => {
                        component += 1;
                        at_start = true;
                        if component == 4 {
                            return Err(ParseError::Address);
                        }
                    }
                    _ => return Err(ParseError::Address),
                }
            }
        }

        // The scan must not end mid-dot and must have filled all four quads.
        if at_start || component < 3 {
            return Err(ParseError::Address);
        }

        Ok(IpAddress {
            text: s.to_owned(),
            octets,
            bits: u32::from_be_bytes(octets),
        })
    }
}

impl PartialEq for IpAddress {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl Eq for IpAddress {}

impl Hash for IpAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A CIDR literal (`a.b.c.d/n`) reduced to its network-bit pattern.
///
/// Equality considers only the prefix length and the network bits, so
/// `127.0.0.1/8` and `127.0.0.0/8` compare equal.
#[derive(Debug, Clone)]
pub struct IpMask {
    text: String,
    base: IpAddress,
    prefix_len: u8,
    network_bits: u32,
}

impl IpMask {
    /// The literal this mask was parsed from.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The base address left of the slash.
    pub fn base(&self) -> &IpAddress {
        &self.base
    }

    /// Prefix length right of the slash, 0-32.
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// The top `prefix_len` bits of the base address, right-aligned.
    pub fn network_bits(&self) -> u32 {
        self.network_bits
    }

    /// Whether `addr` falls inside this mask's network.
    pub fn contains(&self, addr: &IpAddress) -> bool {
        network_prefix(addr.bits(), self.prefix_len) == self.network_bits
    }
}

impl FromStr for IpMask {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let (addr_part, prefix_part) = s.split_once('/').ok_or(ParseError::Mask)?;

        // 1 or 2 digits; a second '/' would land here and fail the digit
        // checks below.
        let digits = prefix_part.as_bytes();
        if digits.is_empty() || digits.len() > 2 {
            return Err(ParseError::Mask);
        }

        let mut prefix_len = match digits[0] {
            d @ b'0'..=b'9' => d - b'0',
            _ => return Err(ParseError::Mask),
        };
        if digits.len() == 2 {
            // "00".."09" are leading-zero forms, same rule as quad components.
            if prefix_len == 0 {
                return Err(ParseError::Mask);
            }
            match digits[1] {
                d @ b'0'..=b'9' => prefix_len = prefix_len * 10 + (d - b'0'),
                _ => return Err(ParseError::Mask),
            }
        }
        if prefix_len > 32 {
            return Err(ParseError::Mask);
        }

        let base: IpAddress = addr_part.parse().map_err(|_| ParseError::Mask)?;
        let network_bits = network_prefix(base.bits(), prefix_len);

        Ok(IpMask {
            text: s.to_owned(),
            base,
            prefix_len,
            network_bits,
        })
    }
}

impl PartialEq for IpMask {
    fn eq(&self, other: &Self) -> bool {
        self.prefix_len == other.prefix_len && self.network_bits == other.network_bits
    }
}

impl Eq for IpMask {}

impl fmt::Display for IpMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Top `prefix_len` bits of `bits`, right-aligned. A zero prefix matches
/// everything, so its network pattern is 0; shifting a u32 by 32 is not
/// defined, hence the explicit case.
fn network_prefix(bits: u32, prefix_len: u8) -> u32 {
    if prefix_len == 0 {
        0
    } else {
        bits >> (32 - u32::from(prefix_len))
    }
}
