use std::{cmp, fmt, ops, str};

/// Represents a Universally Unique IDentifier.
///
/// The 16 bytes are stored in the big-endian RFC 4122 field order, so the derived [`Ord`]
/// compares identifiers as unsigned 128-bit integers.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// The variant field of a UUID, determined by the leading bits of the eighth byte.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0xx`: reserved, NCS backward compatibility.
    Var0,
    /// `10x`: the DCE 1.1 / RFC 4122 layout.
    Var10,
    /// `110`: reserved, Microsoft backward compatibility.
    Var110,
    /// `111`: reserved for future definition.
    Var111,
}

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Name space for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self([
        0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self([
        0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space for X.500 DNs (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self([
        0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a UUID from the six RFC 4122 fields.
    ///
    /// No bit is altered; the caller is responsible for the version and variant bits.
    pub const fn from_fields(
        time_low: u32,
        time_mid: u16,
        time_hi_and_version: u16,
        clock_seq_hi_and_reserved: u8,
        clock_seq_low: u8,
        node: [u8; 6],
    ) -> Self {
        Self([
            (time_low >> 24) as u8,
            (time_low >> 16) as u8,
            (time_low >> 8) as u8,
            time_low as u8,
            (time_mid >> 8) as u8,
            time_mid as u8,
            (time_hi_and_version >> 8) as u8,
            time_hi_and_version as u8,
            clock_seq_hi_and_reserved,
            clock_seq_low,
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }

    /// Creates a UUIDv1 from a 60-bit timestamp (100-nanosecond intervals since 1582-10-15), a
    /// 14-bit clock sequence, and a 48-bit node identifier.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` or `clock_seq` does not fit in its field.
    pub const fn from_fields_v1(timestamp: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        if timestamp >= 1 << 60 || clock_seq >= 1 << 14 {
            panic!("invalid field value");
        }

        Self::from_fields(
            timestamp as u32,
            (timestamp >> 32) as u16,
            0x1000 | (timestamp >> 48) as u16,
            0x80 | (clock_seq >> 8) as u8,
            clock_seq as u8,
            node,
        )
    }

    /// Stamps the version nibble and the `10` variant bits onto otherwise arbitrary bytes, as
    /// required for random and hash-derived UUIDs.
    pub(crate) const fn with_version(mut bytes: [u8; 16], version: u8) -> Self {
        bytes[6] = (version << 4) | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self(bytes)
    }

    /// Returns the `time_low` field.
    pub const fn time_low(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Returns the `time_mid` field.
    pub const fn time_mid(&self) -> u16 {
        u16::from_be_bytes([self.0[4], self.0[5]])
    }

    /// Returns the `time_hi_and_version` field.
    pub const fn time_hi_and_version(&self) -> u16 {
        u16::from_be_bytes([self.0[6], self.0[7]])
    }

    /// Returns the `clock_seq_hi_and_reserved` field.
    pub const fn clock_seq_hi_and_reserved(&self) -> u8 {
        self.0[8]
    }

    /// Returns the `clock_seq_low` field.
    pub const fn clock_seq_low(&self) -> u8 {
        self.0[9]
    }

    /// Returns the 48-bit `node` field.
    pub const fn node(&self) -> [u8; 6] {
        [
            self.0[10], self.0[11], self.0[12], self.0[13], self.0[14], self.0[15],
        ]
    }

    /// Returns the 14-bit clock sequence, i.e. `clock_seq_hi_and_reserved` and `clock_seq_low`
    /// without the variant bits.
    pub const fn clock_seq(&self) -> u16 {
        ((self.0[8] as u16 & 0x3f) << 8) | self.0[9] as u16
    }

    /// Returns the 60-bit timestamp of a UUIDv1, or `None` if this is not a UUIDv1.
    pub const fn timestamp(&self) -> Option<u64> {
        match self.version() {
            Some(1) => Some(
                ((self.time_hi_and_version() as u64 & 0x0fff) << 48)
                    | ((self.time_mid() as u64) << 32)
                    | self.time_low() as u64,
            ),
            _ => None,
        }
    }

    /// Reports the variant field value of the UUID.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{Uuid, Variant};
    ///
    /// assert_eq!(Uuid::NAMESPACE_DNS.variant(), Variant::Var10);
    /// assert_eq!(Uuid::NIL.variant(), Variant::Var0);
    /// assert_eq!(Uuid::MAX.variant(), Variant::Var111);
    /// ```
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 5 {
            0b000..=0b011 => Variant::Var0,
            0b100 | 0b101 => Variant::Var10,
            0b110 => Variant::Var110,
            _ => Variant::Var111,
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

    /// Compares two UUIDs as 16-byte big-endian unsigned integers, returning `-1`, `0`, or `1`.
    ///
    /// This is the same order as [`Ord`], expressed as a signed integer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// assert_eq!(Uuid::NIL.compare(&Uuid::NAMESPACE_DNS), -1);
    /// assert_eq!(Uuid::NAMESPACE_DNS.compare(&Uuid::NAMESPACE_DNS), 0);
    /// assert_eq!(Uuid::MAX.compare(&Uuid::NAMESPACE_DNS), 1);
    /// ```
    pub fn compare(&self, other: &Self) -> i32 {
        match self.cmp(other) {
            cmp::Ordering::Less => -1,
            cmp::Ordering::Equal => 0,
            cmp::Ordering::Greater => 1,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let x = "6BA7B810-9DAD-11D1-80B4-00C04FD430C8".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", y), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), rfc4122::ParseError>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut pos = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[pos] = DIGITS[(e >> 4) as usize];
            buffer[pos + 1] = DIGITS[(e & 15) as usize];
            pos += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[pos] = b'-';
                pos += 1;
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

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation, accepting both
    /// upper and lower case digits.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseError = ParseError {};
        let mut dst = [0u8; 16];
        let mut iter = src.chars();
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            let lo = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            *e = (hi << 4) | lo;
            if (i == 3 || i == 5 || i == 7 || i == 9) && iter.next().ok_or(ERR)? != '-' {
                return Err(ERR);
            }
        }
        if iter.next().is_none() {
            Ok(Self(dst))
        } else {
            Err(ERR)
        }
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

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
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

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("invalid string representation")]
pub struct ParseError {}

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

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [((u64, u16, [u8; 6]), &'static str)] {
        const MAX_UINT60: u64 = (1 << 60) - 1;
        const MAX_UINT14: u16 = (1 << 14) - 1;

        &[
            ((0, 0, [0; 6]), "00000000-0000-1000-8000-000000000000"),
            ((MAX_UINT60, 0, [0; 6]), "ffffffff-ffff-1fff-8000-000000000000"),
            ((0, MAX_UINT14, [0; 6]), "00000000-0000-1000-bfff-000000000000"),
            ((0, 0, [0xff; 6]), "00000000-0000-1000-8000-ffffffffffff"),
            (
                (MAX_UINT60, MAX_UINT14, [0xff; 6]),
                "ffffffff-ffff-1fff-bfff-ffffffffffff",
            ),
            (
                (0x1d19dad_6ba7b810, 0x00b4, [0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]),
                "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (fs, text) in prepare_cases() {
            let from_fields = Uuid::from_fields_v1(fs.0, fs.1, fs.2);
            assert_eq!(Ok(from_fields), text.parse());
            assert_eq!(Ok(from_fields), text.to_uppercase().parse());
            assert_eq!(&from_fields.encode() as &str, *text);
            assert_eq!(&from_fields.to_string(), text);
            assert_eq!(&from_fields.encode().to_string(), text);
            #[cfg(feature = "uuid")]
            assert_eq!(&uuid::Uuid::from(from_fields).to_string(), text);
        }
    }

    /// Reads back field values
    #[test]
    fn reads_back_field_values() {
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v1(fs.0, fs.1, fs.2);
            assert_eq!(e.version(), Some(1));
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.timestamp(), Some(fs.0));
            assert_eq!(e.clock_seq(), fs.1);
            assert_eq!(e.node(), fs.2);
        }

        let e = Uuid::NAMESPACE_DNS;
        assert_eq!(e.time_low(), 0x6ba7b810);
        assert_eq!(e.time_mid(), 0x9dad);
        assert_eq!(e.time_hi_and_version(), 0x11d1);
        assert_eq!(e.clock_seq_hi_and_reserved(), 0x80);
        assert_eq!(e.clock_seq_low(), 0xb4);
        assert_eq!(e.node(), [0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]);
        assert_eq!(
            Uuid::from_fields(0x6ba7b810, 0x9dad, 0x11d1, 0x80, 0xb4, e.node()),
            e
        );
    }

    /// Returns no timestamp for other versions
    #[test]
    fn returns_no_timestamp_for_other_versions() {
        let e: Uuid = "2ed6657d-e927-568b-95e1-2665a8aea6a2".parse().unwrap();
        assert_eq!(e.version(), Some(5));
        assert_eq!(e.timestamp(), None);
        assert_eq!(Uuid::NIL.version(), None);
        assert_eq!(Uuid::NIL.timestamp(), None);
    }

    /// Stamps version and variant bits without touching others
    #[test]
    fn stamps_version_and_variant_bits_without_touching_others() {
        for version in [1, 3, 4, 5] {
            let e = Uuid::with_version([0xff; 16], version);
            assert_eq!(e.version(), Some(version));
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.as_bytes()[6] & 0x0f, 0x0f);
            assert_eq!(e.as_bytes()[8] & 0x3f, 0x3f);

            let e = Uuid::with_version([0x00; 16], version);
            assert_eq!(e.version(), Some(version));
            assert_eq!(e.variant(), Variant::Var10);
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            "not-a-uuid",
            " 6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8 ",
            "+6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "-ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b8109dad11d180b400c04fd430c8",
            "6ba7b810-9dad11d1-80b4-00c04fd430c8",
            "{6ba7b810-9dad-11d1-80b4-00c04fd430c8}",
            "6ba7b810-9dad-11 1-80b4-00c04fd430c8",
            "6ba7b81g-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b810-9dad-11d1-80b4_00c04fd430c8",
            "6ba7b810-9dad-11d1-80b4-00c04fd430c",
            "6ba7b810-9dad-11d1-80b4-00c04fd430c80",
        ];

        for e in cases {
            assert!(e.parse::<Uuid>().is_err());
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );

        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v1(fs.0, fs.1, fs.2);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(e.encode().to_uppercase().parse(), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_u128(), u128::from(e));
        }
    }

    /// Compares as big-endian unsigned integers
    #[test]
    fn compares_as_big_endian_unsigned_integers() {
        let mut samples: Vec<Uuid> = [
            "00000000-0000-0000-0000-000000000001",
            "00000000-0000-0000-0000-000000000100",
            "00000001-0000-0000-0000-000000000000",
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b811-9dad-11d1-80b4-00c04fd430c8",
            "7fffffff-ffff-ffff-ffff-ffffffffffff",
            "80000000-0000-0000-0000-000000000000",
        ]
        .iter()
        .map(|e| e.parse().unwrap())
        .collect();
        samples.push(Uuid::MAX);

        for (i, a) in samples.iter().enumerate() {
            assert_eq!(a.compare(a), 0);
            assert_eq!(Uuid::NIL.compare(a), -1);
            assert_eq!(a.compare(&Uuid::NIL), 1);
            for (j, b) in samples.iter().enumerate() {
                assert_eq!(a.compare(b), -b.compare(a));
                assert_eq!(a.compare(b), (i as i32 - j as i32).signum());
                assert_eq!(a.compare(b) == 0, a == b);
                assert_eq!(a.compare(b) < 0, a < b);
                assert_eq!(
                    a.compare(b).signum(),
                    u128::from(*a).cmp(&u128::from(*b)) as i32
                );
            }
        }

        for a in &samples {
            for b in &samples {
                for c in &samples {
                    if a.compare(b) < 0 && b.compare(c) < 0 {
                        assert_eq!(a.compare(c), -1);
                    }
                }
            }
        }
    }
}
