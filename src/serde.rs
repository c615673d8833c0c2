//! Serialization and Deserialization implementation.

use std::collections::HashMap;
use std::net::Ipv4Addr;

use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{V4Cidr, V4Trie};

impl Serialize for V4Cidr {
    /// Serialize as the canonical `a.b.c.d/len` string in human-readable formats, and as the
    /// canonical `(u32, u8)` pair otherwise.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            (self.mask(), self.prefix_len()).serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for V4Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(::serde::de::Error::custom)
        } else {
            let (addr, len) = <(u32, u8)>::deserialize(deserializer)?;
            V4Cidr::new(Ipv4Addr::from(addr), len).map_err(::serde::de::Error::custom)
        }
    }
}

impl<T: Serialize> Serialize for V4Trie<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let map: HashMap<&V4Cidr, &T> = HashMap::from_iter(self);
        map.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for V4Trie<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map: HashMap<V4Cidr, T> = HashMap::deserialize(deserializer)?;
        Ok(Self::from_iter(map))
    }
}
