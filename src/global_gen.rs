//! Process-wide UUIDv1 generator.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::{Result, Uuid};
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        // the generator state is consistent between calls even if a holder panicked
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Generates a UUIDv1 object.
///
/// This function employs a global generator, so every call in the process shares one clock
/// sequence and node identifier and no `(timestamp, clock_seq)` pair is handed out twice. The
/// node is the MAC address of the host if one can be found, or else a random multicast address
/// chosen once per process. On Unix, this function resets the generator when the process ID
/// changes (i.e., upon process forks) so that the child picks a new clock sequence.
///
/// # Errors
///
/// Returns [`NodeUnavailable`](crate::Error::NodeUnavailable) if neither a hardware address nor
/// random bytes can be obtained.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid1()?;
/// println!("{}", uuid); // e.g., "5b6d0be2-d47f-11ee-9a29-0242ac120002"
/// assert_eq!(uuid.version(), Some(1));
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid1() -> Result<Uuid> {
    lock_global_gen().get_mut().generate()
}

mod inner {
    use rand::rngs::OsRng;

    use crate::generator::{with_rand08::Adapter, V1Generator};

    /// The type alias for the generator behind the global lock.
    ///
    /// The random number generator is only consulted to seed the clock sequence and, without a
    /// hardware address, to pick the node, so the operating system source is used directly.
    pub type GlobalGen = V1Generator<Adapter<OsRng>>;

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: GlobalGen,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: V1Generator::with_rand08(OsRng),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`V1Generator`] instance, reseting the
        /// generator state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut GlobalGen {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                tracing::warn!(
                    parent = self.pid,
                    "process ID changed; resetting UUIDv1 generator"
                );
                *self = Default::default();
            }
            &mut self.generator
        }
    }

}
