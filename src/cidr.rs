//! The IPv4 prefix type and the bit arithmetic it is built on.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::net::Ipv4Addr;
use std::str::FromStr;

use thiserror::Error;

/// An IPv4 CIDR prefix: an address together with the number of leading bits that are significant.
///
/// The address may carry host bits beyond the prefix length (a *non-canonical* prefix). Equality,
/// ordering, hashing and formatting all apply to the canonical form (host bits cleared), so two
/// prefixes denoting the same address range are interchangeable:
///
/// ```
/// # use cidr_trie::V4Cidr;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let canonical: V4Cidr = "64.0.0.0/8".parse()?;
/// let sloppy: V4Cidr = "64.0.3.0/8".parse()?;
/// assert_eq!(canonical, sloppy);
/// assert_eq!(sloppy.to_string(), "64.0.0.0/8");
/// # Ok(())
/// # }
/// ```
///
/// The ordering sorts by canonical address first and ties on the prefix length, shorter (less
/// specific) first. A prefix therefore sorts before everything it contains.
#[derive(Clone, Copy)]
pub struct V4Cidr {
    addr: Ipv4Addr,
    len: u8,
}

/// The prefix length is greater than 32.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("prefix length must be between 0 and 32")]
pub struct PrefixLenError;

/// Errors returned when parsing a [`V4Cidr`] from its textual `a.b.c.d/len` form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCidrError {
    /// The address part is not a valid dotted-decimal IPv4 address.
    #[error("invalid IPv4 address: {0}")]
    Addr(#[from] std::net::AddrParseError),
    /// The part after the `/` is not a number.
    #[error("invalid prefix length: {0}")]
    Len(#[from] std::num::ParseIntError),
    /// The prefix length is out of range.
    #[error(transparent)]
    LenRange(#[from] PrefixLenError),
}

impl V4Cidr {
    /// The length of a full host prefix.
    pub const MAX_LEN: u8 = 32;

    /// Create a new prefix from an address and a prefix length. Fails only if `len` exceeds 32;
    /// host bits beyond `len` are accepted and treated as canonicalized by every operation.
    ///
    /// ```
    /// # use cidr_trie::V4Cidr;
    /// use std::net::Ipv4Addr;
    /// let cidr = V4Cidr::new(Ipv4Addr::new(10, 0, 0, 0), 8).unwrap();
    /// assert_eq!(cidr.to_string(), "10.0.0.0/8");
    /// assert!(V4Cidr::new(Ipv4Addr::new(10, 0, 0, 0), 33).is_err());
    /// ```
    pub fn new(addr: Ipv4Addr, len: u8) -> Result<Self, PrefixLenError> {
        if len > Self::MAX_LEN {
            return Err(PrefixLenError);
        }
        Ok(Self { addr, len })
    }

    /// The prefix that matches every address: `0.0.0.0/0`.
    pub fn zero() -> Self {
        Self {
            addr: Ipv4Addr::UNSPECIFIED,
            len: 0,
        }
    }

    /// The address as given at construction, including any host bits.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The network address: the address with all host bits cleared.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.mask())
    }

    /// The prefix length.
    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    /// The canonical form of this prefix, with all host bits cleared.
    ///
    /// ```
    /// # use cidr_trie::V4Cidr;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let sloppy: V4Cidr = "192.168.1.7/16".parse()?;
    /// assert_eq!(sloppy.canonical().addr(), "192.168.0.0".parse::<std::net::Ipv4Addr>()?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn canonical(&self) -> Self {
        Self {
            addr: self.network(),
            len: self.len,
        }
    }

    /// The raw address bits, masked to the prefix length.
    pub(crate) fn mask(&self) -> u32 {
        u32::from(self.addr) & mask_from_prefix_len(self.len)
    }

    /// Check if `self` contains `other` in its address range. Also `true` if the two prefixes are
    /// identical.
    ///
    /// ```
    /// # use cidr_trie::V4Cidr;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let net: V4Cidr = "10.0.0.0/8".parse()?;
    /// assert!(net.contains(&"10.0.3.0/24".parse()?));
    /// assert!(net.contains(&net));
    /// assert!(!net.contains(&"11.0.0.0/8".parse()?));
    /// assert!(!net.contains(&"0.0.0.0/0".parse()?));
    /// # Ok(())
    /// # }
    /// ```
    pub fn contains(&self, other: &Self) -> bool {
        if self.len > other.len {
            return false;
        }
        u32::from(other.addr) & mask_from_prefix_len(self.len) == self.mask()
    }

    /// Check if a specific bit of the canonical address is set, counted from the left, where 0 is
    /// the most significant bit. Bits at or beyond the prefix length read as zero.
    pub fn is_bit_set(&self, bit: u8) -> bool {
        if bit >= Self::MAX_LEN {
            return false;
        }
        self.mask() & (0x8000_0000u32 >> bit) != 0
    }

    /// The narrowest prefix containing both `self` and `other`: the length is the number of
    /// leading address bits the two have in common, capped by both prefix lengths so that the
    /// result is never more specific than either input.
    ///
    /// The operation is symmetric, and applied to two equal prefixes it returns their canonical
    /// form.
    ///
    /// ```
    /// # use cidr_trie::V4Cidr;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let a: V4Cidr = "64.0.0.0/8".parse()?;
    /// let b: V4Cidr = "65.0.3.0/24".parse()?;
    /// assert_eq!(a.common_prefix(&b), "64.0.0.0/7".parse()?);
    /// assert_eq!(b.common_prefix(&a), "64.0.0.0/7".parse()?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn common_prefix(&self, other: &Self) -> Self {
        let a = self.mask();
        let b = other.mask();
        let len = ((a ^ b).leading_zeros() as u8)
            .min(self.len)
            .min(other.len);
        Self {
            addr: Ipv4Addr::from(a & mask_from_prefix_len(len)),
            len,
        }
    }
}

/// The bit mask selecting the first `len` bits of an address.
pub(crate) const fn mask_from_prefix_len(len: u8) -> u32 {
    if len >= 32 {
        u32::MAX
    } else if len == 0 {
        0
    } else {
        !(u32::MAX >> len)
    }
}

impl PartialEq for V4Cidr {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.mask() == other.mask()
    }
}

impl Eq for V4Cidr {}

impl Hash for V4Cidr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mask().hash(state);
        self.len.hash(state);
    }
}

impl Ord for V4Cidr {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.mask(), self.len).cmp(&(other.mask(), other.len))
    }
}

impl PartialOrd for V4Cidr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for V4Cidr {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for V4Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.len)
    }
}

impl fmt::Debug for V4Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for V4Cidr {
    type Err = ParseCidrError;

    /// Parse the textual `a.b.c.d/len` form. The `/len` suffix is optional; a bare address is a
    /// host prefix (`/32`).
    ///
    /// ```
    /// # use cidr_trie::V4Cidr;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// assert_eq!("10.0.0.1".parse::<V4Cidr>()?, "10.0.0.1/32".parse()?);
    /// assert!("10.0.0.0/33".parse::<V4Cidr>().is_err());
    /// assert!("10.0.0/8".parse::<V4Cidr>().is_err());
    /// # Ok(())
    /// # }
    /// ```
    fn from_str(s: &str) -> Result<Self, ParseCidrError> {
        match s.split_once('/') {
            Some((addr, len)) => Ok(Self::new(addr.parse()?, len.parse()?)?),
            None => Ok(Self::from(s.parse::<Ipv4Addr>()?)),
        }
    }
}

impl From<Ipv4Addr> for V4Cidr {
    /// A single address as a host prefix (`/32`).
    fn from(addr: Ipv4Addr) -> Self {
        Self { addr, len: 32 }
    }
}

#[cfg(feature = "ipnet")]
impl From<ipnet::Ipv4Net> for V4Cidr {
    fn from(net: ipnet::Ipv4Net) -> Self {
        Self {
            addr: net.addr(),
            len: net.prefix_len(),
        }
    }
}

#[cfg(feature = "ipnet")]
impl From<V4Cidr> for ipnet::Ipv4Net {
    fn from(cidr: V4Cidr) -> Self {
        ipnet::Ipv4Net::new(cidr.network(), cidr.len).unwrap()
    }
}
