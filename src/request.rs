//! Tagged generation requests.

use crate::{resolve_namespace, uuid3, uuid4, uuid5};
use crate::{Error, NodeSource, Result, Rng, Uuid, V1Generator};

/// The UUID versions this crate can generate.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Version {
    /// Time and node based.
    V1 = 1,
    /// Name based, MD5.
    V3 = 3,
    /// Random.
    V4 = 4,
    /// Name based, SHA-1.
    V5 = 5,
}

impl Version {
    /// Returns whether the version requires a namespace and a name.
    pub const fn is_name_based(&self) -> bool {
        matches!(self, Self::V3 | Self::V5)
    }
}

impl TryFrom<u8> for Version {
    type Error = Error;

    fn try_from(src: u8) -> Result<Self> {
        match src {
            1 => Ok(Self::V1),
            3 => Ok(Self::V3),
            4 => Ok(Self::V4),
            5 => Ok(Self::V5),
            _ => Err(Error::InvalidArgument(format!(
                "unsupported version {}; expected 1, 3, 4, or 5",
                src
            ))),
        }
    }
}

impl From<Version> for u8 {
    fn from(src: Version) -> Self {
        src as u8
    }
}

/// Describes a UUID to be generated, carrying exactly the inputs its version needs.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{GenerationRequest, Uuid};
///
/// let name = "www.example.com".as_bytes();
/// let req = GenerationRequest::from_args(5, Some(("ns:DNS", name)))?;
/// assert_eq!(
///     req,
///     GenerationRequest::V5 { namespace: Uuid::NAMESPACE_DNS, name }
/// );
///
/// assert!(GenerationRequest::from_args(4, Some(("ns:DNS", name))).is_err());
/// assert!(GenerationRequest::from_args(5, None).is_err());
/// # Ok::<(), rfc4122::Error>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GenerationRequest<'a> {
    /// Time and node based.
    V1,
    /// Name based, MD5.
    V3 {
        /// The namespace UUID.
        namespace: Uuid,
        /// The name, as raw bytes.
        name: &'a [u8],
    },
    /// Random.
    V4,
    /// Name based, SHA-1.
    V5 {
        /// The namespace UUID.
        namespace: Uuid,
        /// The name, as raw bytes.
        name: &'a [u8],
    },
}

impl<'a> GenerationRequest<'a> {
    /// Builds a request from a version number and an optional `(namespace, name)` pair, where
    /// the namespace is resolved by [`resolve_namespace`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the version is not supported, or if the pair is
    /// missing for versions 3 and 5 or present for versions 1 and 4, and
    /// [`Error::InvalidNamespace`] if the namespace cannot be resolved.
    pub fn from_args(version: u8, namespace_and_name: Option<(&str, &'a [u8])>) -> Result<Self> {
        let version = Version::try_from(version)?;
        match (version, namespace_and_name) {
            (Version::V1, None) => Ok(Self::V1),
            (Version::V4, None) => Ok(Self::V4),
            (Version::V3, Some((ns, name))) => Ok(Self::V3 {
                namespace: resolve_namespace(ns)?,
                name,
            }),
            (Version::V5, Some((ns, name))) => Ok(Self::V5 {
                namespace: resolve_namespace(ns)?,
                name,
            }),
            (v, Some(_)) => Err(Error::InvalidArgument(format!(
                "version {} takes no namespace or name",
                u8::from(v)
            ))),
            (v, None) => Err(Error::InvalidArgument(format!(
                "version {} requires a namespace and a name",
                u8::from(v)
            ))),
        }
    }

    /// Returns the version of the requested UUID.
    pub const fn version(&self) -> Version {
        match self {
            Self::V1 => Version::V1,
            Self::V3 { .. } => Version::V3,
            Self::V4 => Version::V4,
            Self::V5 { .. } => Version::V5,
        }
    }

    /// Generates the requested UUID, drawing version 1 state from `v1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeUnavailable`] if a version 1 UUID cannot obtain a node identifier.
    pub fn make_with<R: Rng, N: NodeSource>(&self, v1: &mut V1Generator<R, N>) -> Result<Uuid> {
        match self.make_stateless() {
            Some(value) => Ok(value),
            None => v1.generate(),
        }
    }

    /// Generates the requested UUID, using the process-wide generator for version 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeUnavailable`] if a version 1 UUID cannot obtain a node identifier.
    #[cfg(feature = "global_gen")]
    #[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
    pub fn make(&self) -> Result<Uuid> {
        match self.make_stateless() {
            Some(value) => Ok(value),
            None => crate::uuid1(),
        }
    }

    /// Generates versions 3, 4, and 5, or returns `None` for version 1.
    fn make_stateless(&self) -> Option<Uuid> {
        match self {
            Self::V1 => None,
            Self::V3 { namespace, name } => Some(uuid3(namespace, name)),
            Self::V4 => Some(uuid4()),
            Self::V5 { namespace, name } => Some(uuid5(namespace, name)),
        }
    }
}
