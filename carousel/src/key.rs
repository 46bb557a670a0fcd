use core::fmt;

/// Identity of an item across list snapshots.
///
/// Keys only need equality: the reconciler compares the key at a slot and searches the new
/// list for the previously focused key.
pub trait CarouselKey: Clone + Eq + fmt::Debug {}
impl<K: Clone + Eq + fmt::Debug> CarouselKey for K {}

/// A render key: an item key plus the lap it is shown on.
///
/// The same item can appear twice in an infinite window (once on each side of the seam); the
/// lap keeps the two render keys distinct. `Display` renders as `"<key>:<lap>"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderKey<K> {
    pub key: K,
    pub lap: i64,
}

impl<K: fmt::Display> fmt::Display for RenderKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.lap)
    }
}
