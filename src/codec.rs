//! External representations of a UUID and conversion between them.

use std::{fmt, str};

use crate::{generator, node, Error, Result, Uuid, Variant};

/// Selects one of the three external representations of a UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Format {
    /// 16 raw bytes in big-endian field order (tag: `bin`).
    Bin,
    /// The 36-character 8-4-4-4-12 lowercase hexadecimal form (tag: `str`).
    #[default]
    Str,
    /// A multi-line human-readable description of the fields (tag: `txt`). Export only.
    Txt,
}

impl Format {
    /// Returns the short tag that names this format.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Bin => "bin",
            Self::Str => "str",
            Self::Txt => "txt",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl str::FromStr for Format {
    type Err = Error;

    /// Recognizes the tags `bin`, `str`, and `txt`.
    fn from_str(src: &str) -> Result<Self> {
        match src {
            "bin" => Ok(Self::Bin),
            "str" => Ok(Self::Str),
            "txt" => Ok(Self::Txt),
            _ => Err(Error::InvalidArgument(format!(
                "unknown format {:?}; expected bin, str, or txt",
                src
            ))),
        }
    }
}

/// A UUID rendered in one of the [`Format`]s.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Representation {
    /// Binary form.
    Bin([u8; 16]),
    /// Canonical string form.
    Str(String),
    /// Text dump.
    Txt(String),
}

impl Representation {
    /// Returns the format of this representation.
    pub const fn format(&self) -> Format {
        match self {
            Self::Bin(_) => Format::Bin,
            Self::Str(_) => Format::Str,
            Self::Txt(_) => Format::Txt,
        }
    }

    /// Returns the raw bytes of the representation; the UTF-8 bytes for textual forms.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Bin(bytes) => &bytes[..],
            Self::Str(text) | Self::Txt(text) => text.as_bytes(),
        }
    }

    /// Returns the string for textual forms, or `None` for the binary form.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Bin(_) => None,
            Self::Str(text) | Self::Txt(text) => Some(text.as_str()),
        }
    }
}

impl AsRef<[u8]> for Representation {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Uuid {
    /// Renders the UUID in `format`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{Format, Representation, Uuid};
    ///
    /// let e = Uuid::NAMESPACE_DNS;
    /// assert_eq!(
    ///     e.export(Format::Str),
    ///     Representation::Str("6ba7b810-9dad-11d1-80b4-00c04fd430c8".to_owned())
    /// );
    /// assert_eq!(e.export(Format::Bin).as_bytes(), e.as_bytes());
    /// assert!(e.export(Format::Txt).as_str().unwrap().contains("version: 1"));
    /// ```
    pub fn export(&self, format: Format) -> Representation {
        match format {
            Format::Bin => Representation::Bin(*self.as_bytes()),
            Format::Str => Representation::Str(self.to_string()),
            Format::Txt => Representation::Txt(Dump(self).to_string()),
        }
    }

    /// Restores a UUID from its binary or string representation. String input is accepted in
    /// either letter case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if `data` does not conform to `format`, and
    /// [`Error::InvalidArgument`] for [`Format::Txt`], which cannot be imported.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{Format, Uuid};
    ///
    /// let e = Uuid::import(Format::Str, b"6BA7B810-9DAD-11D1-80B4-00C04FD430C8")?;
    /// assert_eq!(e, Uuid::NAMESPACE_DNS);
    /// assert_eq!(Uuid::import(Format::Bin, e.as_bytes())?, e);
    /// assert!(Uuid::import(Format::Bin, &[0u8; 15]).is_err());
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub fn import(format: Format, data: &[u8]) -> Result<Self> {
        match format {
            Format::Bin => <[u8; 16]>::try_from(data).map(Self::from).map_err(|_| {
                Error::MalformedInput(format!("expected 16 bytes, got {}", data.len()))
            }),
            Format::Str => str::from_utf8(data)
                .map_err(|err| Error::MalformedInput(err.to_string()))?
                .parse::<Self>()
                .map_err(Error::from),
            Format::Txt => Err(Error::InvalidArgument(
                "text representation cannot be imported".to_owned(),
            )),
        }
    }
}

/// Multi-line text dump of a UUID, rendered through [`Display`](fmt::Display).
struct Dump<'a>(&'a Uuid);

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const INDENT: &str = "                 ";
        let uuid = self.0;

        writeln!(f, "encode: STR:     {}", uuid)?;
        writeln!(f, "        SIV:     {}", u128::from(*uuid))?;

        let variant = match uuid.variant() {
            _ if *uuid == Uuid::NIL || *uuid == Uuid::MAX => "n.a.",
            Variant::Var0 => "reserved (NCS backward compatible)",
            Variant::Var10 => "DCE 1.1, ISO/IEC 11578:1996",
            Variant::Var110 => "reserved (Microsoft GUID)",
            Variant::Var111 => "reserved (future use)",
        };
        writeln!(f, "decode: variant: {}", variant)?;

        let version = match uuid.version() {
            Some(1) => "1 (time and node based)",
            Some(3) => "3 (name based, MD5)",
            Some(4) => "4 (random data based)",
            Some(5) => "5 (name based, SHA-1)",
            Some(_) => "unknown",
            None => "n.a.",
        };
        writeln!(f, "        version: {}", version)?;

        if *uuid == Uuid::NIL {
            writeln!(f, "        content: special case: DCE 1.1 Nil UUID")
        } else if *uuid == Uuid::MAX {
            writeln!(f, "        content: special case: Max UUID")
        } else if let Some(timestamp) = uuid.timestamp() {
            let node = uuid.node();
            writeln!(f, "        content: time:  {}", format_time(timestamp))?;
            writeln!(f, "{}clock: {} (usually random)", INDENT, uuid.clock_seq())?;
            writeln!(
                f,
                "{}node:  {} ({})",
                INDENT,
                generator::format_node(&node),
                node::describe(&node)
            )
        } else {
            let octets = uuid
                .as_bytes()
                .iter()
                .map(|e| format!("{:02X}", e))
                .collect::<Vec<_>>();
            writeln!(f, "        content: {}", octets[..8].join(":"))?;
            writeln!(f, "{}{}", INDENT, octets[8..].join(":"))?;
            match uuid.version() {
                Some(3) => writeln!(f, "{}(not decipherable: MD5 message digest only)", INDENT),
                Some(4) => writeln!(f, "{}(no semantics: random data only)", INDENT),
                Some(5) => writeln!(f, "{}(not decipherable: SHA-1 message digest only)", INDENT),
                _ => Ok(()),
            }
        }
    }
}

/// Formats a UUIDv1 timestamp as a UTC date and time with 100-nanosecond precision.
fn format_time(timestamp: u64) -> String {
    let unix_ticks = timestamp as i64 - generator::GREGORIAN_OFFSET as i64;
    let secs = unix_ticks.div_euclid(10_000_000);
    let ticks = unix_ticks.rem_euclid(10_000_000) as u32;
    match chrono::DateTime::from_timestamp(secs, ticks * 100) {
        Some(dt) => format!(
            "{}.{:06}.{} UTC",
            dt.format("%Y-%m-%d %H:%M:%S"),
            ticks / 10,
            ticks % 10
        ),
        None => format!("{} (out of range)", timestamp),
    }
}
