//! Integration with `rand` (v0.8) crate.

use super::{Rng, V1Generator};
use crate::{Error, NodeSource, Result};
use rand::RngCore;

/// An adapter that implements [`Rng`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> Rng for Adapter<T> {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        self.0.try_fill_bytes(dest).map_err(|err| {
            Error::NodeUnavailable(format!("random number generator failed: {}", err))
        })
    }
}

impl<T: RngCore> V1Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::V1Generator;
    ///
    /// let mut g = V1Generator::with_rand08(rand::rngs::OsRng);
    /// println!("{}", g.generate()?);
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}

impl<T: RngCore, N: NodeSource> V1Generator<Adapter<T>, N> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate and a custom node source.
    pub const fn with_rand08_and_node_source(rng: T, node_source: N) -> Self {
        Self::with_node_source(Adapter(rng), node_source)
    }
}
