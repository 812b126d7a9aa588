//! Universally unique identifiers as defined by DCE 1.1 and RFC 4122
//!
//! ```rust
//! use rfc4122::{uuid1, uuid4, uuid5, Uuid};
//!
//! let uuid = uuid1()?;
//! println!("{}", uuid); // e.g. "5b6d0be2-d47f-11ee-9a29-0242ac120002"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//!
//! let uuid = uuid5(&Uuid::NAMESPACE_DNS, "www.example.com");
//! assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
//! # Ok::<(), rfc4122::Error>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! Every UUID is a 128-bit value stored as 16 big-endian bytes with the following fields:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |       time_hi         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|  clock_seq_hi |clk_seq_low  |         node (0-1)          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         node (2-5)                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 4-bit `ver` field holds the version: `0001` (time and node based), `0011` (name based,
//!   MD5), `0100` (random), or `0101` (name based, SHA-1).
//! - The 2-bit `var` field is set at `10`.
//! - For version 1, `time_low`, `time_mid`, and `time_hi` hold a 60-bit count of 100-nanosecond
//!   intervals since 1582-10-15 00:00:00 UTC, the 14-bit clock sequence guards against clock
//!   regressions, and `node` is the MAC address of the host or a random multicast address.
//! - For versions 3 and 5, the fields hold the leading bits of the hash of a namespace UUID
//!   followed by a name.
//! - For version 4, the fields hold 122 random bits.
//!
//! # Representations
//!
//! Identifiers can be exported to and imported from 16 raw bytes or the canonical
//! 8-4-4-4-12 hexadecimal string, and exported as a human-readable text dump:
//!
//! ```rust
//! use rfc4122::{import, uuid_v3, Format};
//!
//! let e = uuid_v3("ns:DNS", "www.example.com", Format::Bin)?;
//! let uuid = import(Format::Bin, &e)?;
//! assert_eq!(uuid.to_string(), "5df41881-3aed-3515-88a7-2f4a814cf09e");
//! println!("{}", uuid.export(Format::Txt).as_str().unwrap_or_default());
//! # Ok::<(), rfc4122::Error>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen` enables the process-wide UUIDv1 generator behind [`uuid1()`] and the entry
//!   point functions [`uuid()`], [`uuid_v1()`], [`uuid_v3()`], [`uuid_v4()`], [`uuid_v5()`], and
//!   [`import()`]. Without it, callers create and own [`V1Generator`] instances themselves.
//!
//! Optional features:
//!
//! - `serde` enables the serialization and deserialization of [`Uuid`] objects.
//! - `uuid` enables the conversion between [`Uuid`] and `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{ParseError, Uuid, Variant};

mod error;
pub use error::{Error, Result};

pub mod codec;
pub use codec::{Format, Representation};

pub mod node;
pub use node::NodeSource;

pub mod generator;
pub use generator::{Rng, V1Generator};

mod name;
pub use name::{resolve_namespace, uuid3, uuid5};

mod v4;
pub use v4::uuid4;

mod request;
pub use request::{GenerationRequest, Version};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::uuid1;

mod entry;
#[cfg(feature = "global_gen")]
pub use entry::{import, uuid, uuid_v1, uuid_v3, uuid_v4, uuid_v5};
