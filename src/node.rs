//! Node identifier sources for UUIDv1.

/// A trait that supplies the hardware node identifier consulted by [`V1Generator`] the first
/// time it needs a node.
///
/// Returning `None` makes the generator fall back to a random node with the multicast bit set.
///
/// [`V1Generator`]: crate::V1Generator
pub trait NodeSource {
    /// Returns a stable 48-bit node identifier, if one is available.
    fn hardware_node(&mut self) -> Option<[u8; 6]>;
}

/// Looks up the MAC address of a network interface of the host.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct SystemNode;

impl NodeSource for SystemNode {
    fn hardware_node(&mut self) -> Option<[u8; 6]> {
        match mac_address::get_mac_address() {
            Ok(Some(addr)) => Some(addr.bytes()).filter(|bytes| bytes != &[0u8; 6]),
            Ok(None) => None,
            Err(err) => {
                tracing::debug!(%err, "could not read hardware address");
                None
            }
        }
    }
}

/// Never reports a hardware address, forcing the random node fallback.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct NoHardwareNode;

impl NodeSource for NoHardwareNode {
    fn hardware_node(&mut self) -> Option<[u8; 6]> {
        None
    }
}

/// Uses a fixed node identifier.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct FixedNode(/** The node identifier to report. */ pub [u8; 6]);

impl NodeSource for FixedNode {
    fn hardware_node(&mut self) -> Option<[u8; 6]> {
        Some(self.0)
    }
}

/// Describes the unicast/multicast and global/local bits of a node identifier, in the wording of
/// the text representation.
pub(crate) fn describe(node: &[u8; 6]) -> &'static str {
    match (node[0] & 0x01 != 0, node[0] & 0x02 != 0) {
        (false, false) => "global unicast",
        (false, true) => "local unicast",
        (true, false) => "global multicast",
        (true, true) => "local multicast",
    }
}
