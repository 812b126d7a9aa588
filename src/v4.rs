//! UUIDv4-related functionality

use crate::Uuid;
use rand::random;

/// Generates a UUIDv4 object.
///
/// All bits other than the version and variant fields come from the thread-local
/// cryptographically secure random number generator of the `rand` crate, so this function needs
/// no locking.
///
/// # Examples
///
/// ```rust
/// use rfc4122::uuid4;
///
/// let uuid = uuid4();
/// println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// ```
pub fn uuid4() -> Uuid {
    Uuid::with_version(random(), 4)
}
