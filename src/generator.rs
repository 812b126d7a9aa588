//! UUIDv1 generator and related types.

use crate::{node::SystemNode, NodeSource, Result, Uuid};

pub mod with_rand08;


/// The number of 100-nanosecond intervals between 1582-10-15 (the start of the Gregorian
/// calendar) and 1970-01-01.
pub(crate) const GREGORIAN_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

/// A trait that defines the minimum random number generator interface for [`V1Generator`].
pub trait Rng {
    /// Fills `dest` with random data, or returns
    /// [`NodeUnavailable`](crate::Error::NodeUnavailable) if the underlying source cannot
    /// produce any.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;
}

/// Represents a UUIDv1 generator that encapsulates the clock sequence and node identifier, and
/// guarantees that no `(timestamp, clock_seq)` pair is issued twice for its node.
///
/// A generator is a plain context object: the caller decides its scope by where it is stored.
/// The following example shares one across threads using Rust's standard synchronization
/// mechanism, which is also how [`uuid1()`](crate::uuid1) works.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use rfc4122::V1Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(V1Generator::with_rand08(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate().unwrap(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
///
/// # Clock handling
///
/// The clock sequence is seeded from the random number generator on first use. Afterwards:
///
/// - If the clock reads earlier than the previous reading, the clock sequence is incremented
///   and the new reading is used as is.
/// - If the clock has not advanced past the last issued timestamp (same tick, or a burst that
///   outran the clock), the last timestamp is incremented by one.
/// - Otherwise the clock reading is used.
///
/// # Node
///
/// The node identifier is resolved once, on first use: the [`NodeSource`] is asked for a hardware
/// address and, if it has none, 48 random bits with the multicast bit set are used instead.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V1Generator<R, N = SystemNode> {
    timestamp: u64,
    last_clock: u64,
    clock_seq: u16,
    node: Option<[u8; 6]>,

    /// The random number generator used by the generator.
    rng: R,

    /// The source consulted for a hardware node identifier.
    node_source: N,
}

impl<R: Rng> V1Generator<R> {
    /// Creates a generator instance that uses the MAC address of the host as the node, if any.
    pub const fn new(rng: R) -> Self {
        Self::with_node_source(rng, SystemNode)
    }
}

impl<R: Rng, N: NodeSource> V1Generator<R, N> {
    /// Creates a generator instance with a custom node source.
    pub const fn with_node_source(rng: R, node_source: N) -> Self {
        Self {
            timestamp: 0,
            last_clock: 0,
            clock_seq: 0,
            node: None,
            rng,
            node_source,
        }
    }

    /// Generates a new UUIDv1 object from the current system time.
    ///
    /// # Errors
    ///
    /// Returns [`NodeUnavailable`](crate::Error::NodeUnavailable) if the node or the initial
    /// clock sequence cannot be obtained.
    pub fn generate(&mut self) -> Result<Uuid> {
        self.generate_core(gregorian_now())
    }

    /// Generates a new UUIDv1 object from a `clock` reading given in 100-nanosecond intervals
    /// since 1582-10-15.
    ///
    /// See the [`V1Generator`] type documentation for the description.
    ///
    /// # Errors
    ///
    /// Returns [`NodeUnavailable`](crate::Error::NodeUnavailable) if the node or the initial
    /// clock sequence cannot be obtained.
    ///
    /// # Panics
    ///
    /// Panics if `clock` is not a 60-bit positive integer.
    pub fn generate_core(&mut self, clock: u64) -> Result<Uuid> {
        const MAX_TIMESTAMP: u64 = (1 << 60) - 1;
        const MAX_CLOCK_SEQ: u16 = (1 << 14) - 1;

        assert!(
            0 < clock && clock <= MAX_TIMESTAMP,
            "`clock` must be a 60-bit positive integer"
        );

        let node = self.node()?;

        if self.timestamp == 0 {
            let mut seed = [0u8; 2];
            self.rng.try_fill_bytes(&mut seed)?;
            self.clock_seq = u16::from_be_bytes(seed) & MAX_CLOCK_SEQ;
            self.timestamp = clock;
            tracing::debug!(clock_seq = self.clock_seq, "seeded clock sequence");
        } else if clock < self.last_clock || self.timestamp == MAX_TIMESTAMP {
            // a new clock sequence keeps the timestamps issued before the rollback unique
            self.clock_seq = (self.clock_seq + 1) & MAX_CLOCK_SEQ;
            self.timestamp = clock;
            tracing::warn!(
                rollback = self.last_clock.saturating_sub(clock),
                clock_seq = self.clock_seq,
                "clock moved backwards; incremented clock sequence"
            );
        } else if clock > self.timestamp {
            self.timestamp = clock;
        } else {
            self.timestamp += 1;
        }
        self.last_clock = clock;

        Ok(Uuid::from_fields_v1(self.timestamp, self.clock_seq, node))
    }

    /// Returns the node identifier of this generator, resolving it on the first call.
    ///
    /// # Errors
    ///
    /// Returns [`NodeUnavailable`](crate::Error::NodeUnavailable) if there is no hardware
    /// address and the random number generator fails.
    pub fn node(&mut self) -> Result<[u8; 6]> {
        if let Some(node) = self.node {
            return Ok(node);
        }

        let node = match self.node_source.hardware_node() {
            Some(node) => {
                tracing::debug!(node = %format_node(&node), "using hardware node");
                node
            }
            None => {
                let mut node = [0u8; 6];
                self.rng.try_fill_bytes(&mut node)?;
                node[0] |= 0x01;
                tracing::debug!(node = %format_node(&node), "using random multicast node");
                node
            }
        };
        self.node = Some(node);
        Ok(node)
    }
}

/// Returns the current system time in 100-nanosecond intervals since 1582-10-15.
fn gregorian_now() -> u64 {
    use std::time;
    match time::SystemTime::now().duration_since(time::UNIX_EPOCH) {
        Ok(d) => GREGORIAN_OFFSET + (d.as_nanos() / 100) as u64,
        Err(err) => GREGORIAN_OFFSET
            .saturating_sub((err.duration().as_nanos() / 100) as u64)
            .max(1),
    }
}

/// Formats a node identifier as colon-separated lowercase hex octets.
pub(crate) fn format_node(node: &[u8; 6]) -> String {
    node.iter()
        .map(|e| format!("{:02x}", e))
        .collect::<Vec<_>>()
        .join(":")
}
