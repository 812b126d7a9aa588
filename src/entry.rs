//! Entry point functions that generate and render in one step

#![cfg(feature = "global_gen")]

use crate::{resolve_namespace, uuid3, uuid4, uuid5};
use crate::{Format, GenerationRequest, Representation, Result, Uuid};

/// Generates the UUID described by `request` and renders it in `format`.
///
/// Version 1 draws on the process-wide generator shared with [`uuid1()`](crate::uuid1).
///
/// # Errors
///
/// Returns [`NodeUnavailable`](crate::Error::NodeUnavailable) if a version 1 UUID cannot obtain a
/// node identifier.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{uuid, GenerationRequest, Representation};
///
/// let req = GenerationRequest::from_args(
///     5,
///     Some(("6ba7b810-9dad-11d1-80b4-00c04fd430c8", "www.example.com".as_bytes())),
/// )?;
/// assert_eq!(
///     uuid(&req, "str".parse()?)?,
///     Representation::Str("2ed6657d-e927-568b-95e1-2665a8aea6a2".to_owned())
/// );
/// # Ok::<(), rfc4122::Error>(())
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn uuid(request: &GenerationRequest<'_>, format: Format) -> Result<Representation> {
    Ok(request.make()?.export(format))
}

/// Generates a UUIDv1 and renders it in `format`.
///
/// # Errors
///
/// Returns [`NodeUnavailable`](crate::Error::NodeUnavailable) if no node identifier can be
/// obtained.
///
/// # Examples
///
/// ```rust
/// let e = rfc4122::uuid_v1(rfc4122::Format::Bin)?;
/// assert_eq!(e.as_bytes()[6] >> 4, 1);
/// # Ok::<(), rfc4122::Error>(())
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn uuid_v1(format: Format) -> Result<Representation> {
    Ok(crate::uuid1()?.export(format))
}

/// Generates a UUIDv3 from a namespace argument and a name and renders it in `format`.
///
/// # Errors
///
/// Returns [`InvalidNamespace`](crate::Error::InvalidNamespace) if `namespace` is neither a
/// well-known name nor a UUID string.
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn uuid_v3(
    namespace: &str,
    name: impl AsRef<[u8]>,
    format: Format,
) -> Result<Representation> {
    Ok(uuid3(&resolve_namespace(namespace)?, name).export(format))
}

/// Generates a UUIDv4 and renders it in `format`.
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn uuid_v4(format: Format) -> Representation {
    uuid4().export(format)
}

/// Generates a UUIDv5 from a namespace argument and a name and renders it in `format`.
///
/// # Errors
///
/// Returns [`InvalidNamespace`](crate::Error::InvalidNamespace) if `namespace` is neither a
/// well-known name nor a UUID string.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{uuid_v5, Format};
///
/// let e = uuid_v5("ns:DNS", "www.example.com", Format::Str)?;
/// assert_eq!(e.as_str(), Some("2ed6657d-e927-568b-95e1-2665a8aea6a2"));
/// # Ok::<(), rfc4122::Error>(())
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn uuid_v5(
    namespace: &str,
    name: impl AsRef<[u8]>,
    format: Format,
) -> Result<Representation> {
    Ok(uuid5(&resolve_namespace(namespace)?, name).export(format))
}

/// Restores a UUID from its binary or string representation.
///
/// # Errors
///
/// See [`Uuid::import`].
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn import(format: Format, data: impl AsRef<[u8]>) -> Result<Uuid> {
    Uuid::import(format, data.as_ref())
}

#[cfg(test)]
mod tests {
    use super::{import, uuid, uuid_v1, uuid_v3, uuid_v4, uuid_v5};
    use crate::{Error, Format, GenerationRequest, Representation, Uuid};

    /// Generates version 5 string from request arguments
    #[test]
    fn generates_version_5_string_from_request_arguments() {
        let req = GenerationRequest::from_args(
            5,
            Some((
                "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                "www.example.com".as_bytes(),
            )),
        )
        .unwrap();
        assert_eq!(
            uuid(&req, "str".parse().unwrap()),
            Ok(Representation::Str(
                "2ed6657d-e927-568b-95e1-2665a8aea6a2".to_owned()
            ))
        );
    }

    /// Renders every version in every format
    #[test]
    fn renders_every_version_in_every_format() {
        let name = "www.example.com".as_bytes();
        let requests = [
            GenerationRequest::V1,
            GenerationRequest::from_args(3, Some(("ns:DNS", name))).unwrap(),
            GenerationRequest::V4,
            GenerationRequest::from_args(5, Some(("ns:DNS", name))).unwrap(),
        ];
        for req in requests {
            for format in [Format::Bin, Format::Str, Format::Txt] {
                let e = uuid(&req, format).unwrap();
                assert_eq!(e.format(), format);
                match e {
                    Representation::Bin(bytes) => assert_eq!(bytes.len(), 16),
                    Representation::Str(text) => {
                        let version = u8::from(req.version());
                        assert_eq!(text.parse::<Uuid>().unwrap().version(), Some(version));
                    }
                    Representation::Txt(text) => assert!(text.starts_with("encode: STR:")),
                }
            }
        }
    }

    /// Matches request based generation in version shortcuts
    #[test]
    fn matches_request_based_generation_in_version_shortcuts() {
        assert_eq!(
            uuid_v3("ns:DNS", "www.example.com", Format::Str).unwrap().as_str(),
            Some("5df41881-3aed-3515-88a7-2f4a814cf09e")
        );
        assert_eq!(
            uuid_v5("ns:DNS", "www.example.com", Format::Bin),
            Ok(crate::uuid5(&Uuid::NAMESPACE_DNS, "www.example.com").export(Format::Bin))
        );
        assert_eq!(uuid_v4(Format::Str).format(), Format::Str);
        assert!(uuid_v1(Format::Txt).unwrap().as_str().unwrap().contains("time:"));
    }

    /// Returns error to invalid namespace
    #[test]
    fn returns_error_to_invalid_namespace() {
        assert_eq!(
            uuid_v3("ns:FOO", "a", Format::Str),
            Err(Error::InvalidNamespace("ns:FOO".to_owned()))
        );
        assert_eq!(
            uuid_v5("not-a-uuid", "a", Format::Str),
            Err(Error::InvalidNamespace("not-a-uuid".to_owned()))
        );
    }

    /// Returns error to unknown format tag
    #[test]
    fn returns_error_to_unknown_format_tag() {
        for e in ["", "BIN", "string", "text"] {
            assert!(matches!(e.parse::<Format>(), Err(Error::InvalidArgument(_))));
        }
    }

    /// Imports what it exports
    #[test]
    fn imports_what_it_exports() {
        for _ in 0..1_000 {
            let e = crate::uuid1().unwrap();
            for format in [Format::Bin, Format::Str] {
                assert_eq!(import(format, e.export(format)), Ok(e));
            }
        }
    }

    /// Returns error to malformed input
    #[test]
    fn returns_error_to_malformed_input() {
        let cases: [(Format, &[u8]); 6] = [
            (Format::Bin, &[0u8; 15]),
            (Format::Bin, &[0u8; 17]),
            (Format::Bin, b""),
            (Format::Str, b"not-a-uuid"),
            (Format::Str, b"6ba7b810-9dad-11d1-80b4-00c04fd430c"),
            (Format::Str, b"6ba7b810-9dad-11d1-80b4-00c04fd430c8\xff"),
        ];
        for (format, data) in cases {
            assert!(matches!(
                import(format, data),
                Err(Error::MalformedInput(_))
            ));
        }
        assert!(matches!(
            import(Format::Txt, "anything"),
            Err(Error::InvalidArgument(_))
        ));
    }

    /// Generates 10k distinct version 4 strings
    #[test]
    fn generates_10k_distinct_version_4_strings() {
        use std::collections::HashSet;
        let s: HashSet<Representation> = (0..10_000).map(|_| uuid_v4(Format::Str)).collect();
        assert_eq!(s.len(), 10_000);
    }

    /// Orders imported values by their binary form
    #[test]
    fn orders_imported_values_by_their_binary_form() {
        let a = import(Format::Str, "00000000-0000-1000-8000-000000000000").unwrap();
        let b = import(Format::Str, "00000000-0000-1000-8000-000000000001").unwrap();
        assert_eq!(a.compare(&b), -1);
        assert_eq!(b.compare(&a), 1);
        assert_eq!(a.compare(&a), 0);
        assert!(a < b);
    }
}
