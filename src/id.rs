#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, ops, str};

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a UUID byte array from UUIDv1 field values, overwriting the version and variant
    /// bits appropriately.
    ///
    /// `timestamp` counts 100-nanosecond intervals elapsed since the Gregorian epoch (1582-10-15
    /// 00:00:00 UTC). The upper four bits of `timestamp` and the upper two bits of `clock_seq`
    /// are discarded because the version and variant fields occupy their bit positions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid1::Uuid;
    ///
    /// let node_id = [0x9f, 0x6b, 0xde, 0xce, 0xd8, 0x46];
    /// let x = Uuid::from_fields_v1(0x1ec9414c232ab00, 0x33c8, node_id);
    /// assert_eq!(x.to_string(), "c232ab00-9414-11ec-b3c8-9f6bdeced846");
    /// ```
    pub const fn from_fields_v1(timestamp: u64, clock_seq: u16, node_id: [u8; 6]) -> Self {
        Self([
            (timestamp >> 24) as u8,
            (timestamp >> 16) as u8,
            (timestamp >> 8) as u8,
            timestamp as u8,
            (timestamp >> 40) as u8,
            (timestamp >> 32) as u8,
            0x10 | (timestamp >> 56) as u8 & 0x0f,
            (timestamp >> 48) as u8,
            0x80 | (clock_seq >> 8) as u8 & 0x3f,
            clock_seq as u8,
            node_id[0],
            node_id[1],
            node_id[2],
            node_id[3],
            node_id[4],
            node_id[5],
        ])
    }

    /// Overwrites the version field (the upper four bits of octet 6) with `version`.
    pub fn set_version(&mut self, version: u8) {
        self.0[6] = (self.0[6] & 0x0f) | (version << 4);
    }

    /// Overwrites the variant field (the upper two bits of octet 8) with the RFC 4122 bit
    /// pattern `10`.
    pub fn set_variant(&mut self) {
        self.0[8] = (self.0[8] & 0x3f) | 0x80;
    }

    /// Returns the 60-bit `timestamp` field value: the number of 100-nanosecond intervals
    /// elapsed since the Gregorian epoch (1582-10-15 00:00:00 UTC).
    pub const fn timestamp(&self) -> u64 {
        ((self.0[6] & 0x0f) as u64) << 56
            | (self.0[7] as u64) << 48
            | (self.0[4] as u64) << 40
            | (self.0[5] as u64) << 32
            | (self.0[0] as u64) << 24
            | (self.0[1] as u64) << 16
            | (self.0[2] as u64) << 8
            | self.0[3] as u64
    }

    /// Returns the 14-bit `clock_seq` field value.
    pub const fn clock_seq(&self) -> u16 {
        ((self.0[8] & 0x3f) as u16) << 8 | self.0[9] as u16
    }

    /// Returns the 48-bit `node` field value as a 6-byte array.
    pub const fn node_id(&self) -> [u8; 6] {
        [
            self.0[10], self.0[11], self.0[12], self.0[13], self.0[14], self.0[15],
        ]
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0b0000..=0b0111 => Variant::Var0,
            0b1000..=0b1011 => Variant::Var10,
            0b1100..=0b1101 => Variant::Var110,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID or `None` if the UUID does not have the
    /// variant field value of `10`.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// This method is primarily for `no_std` environments where heap-allocated string types are
    /// not readily available. Use the [`fmt::Display`] trait usually to get the 8-4-4-4-12
    /// canonical hexadecimal string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid1::Uuid;
    ///
    /// let x = Uuid::from_fields_v1(0x1ec9414c232ab00, 0x33c8, [0x9f, 0x6b, 0xde, 0xce, 0xd8, 0x46]);
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "c232ab00-9414-11ec-b3c8-9f6bdeced846");
    /// assert_eq!(format!("{}", y), "c232ab00-9414-11ec-b3c8-9f6bdeced846");
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut buf_iter = buffer.iter_mut();
        for i in 0..16 {
            let e = self.0[i] as usize;
            *buf_iter.next().unwrap() = DIGITS[e >> 4];
            *buf_iter.next().unwrap() = DIGITS[e & 15];
            if i == 3 || i == 5 || i == 7 || i == 9 {
                *buf_iter.next().unwrap() = b'-';
            }
        }
        debug_assert!(buffer.is_ascii());
        UuidStr(buffer)
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated 8-4-4-4-12 string
/// representation.
struct UuidStr([u8; 36]);

impl ops::Deref for UuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for UuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

/// A reserved UUID variant field value.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// The variant `0` (NCS backward compatibility).
    Var0,
    /// The variant `10` (RFC 4122).
    Var10,
    /// The variant `110` (Microsoft Corporation backward compatibility).
    Var110,
    /// The variant `111` (reserved for future definition).
    VarReserved,
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::Uuid;

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}
