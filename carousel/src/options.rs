use alloc::sync::Arc;

use crate::{ItemKey, WrapMode};

/// Maps an item to its identity key.
pub type GetItemKey<T, K> = Arc<dyn Fn(&T) -> K + Send + Sync>;

/// Called with the previously focused key when a list replacement removed it.
pub type OnContinuityLost<K> = Arc<dyn Fn(&K) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: hooks are stored in `Arc`s so adapters can tweak a field and call
/// `Carousel::set_options` between cycles.
pub struct CarouselOptions<T, K = ItemKey> {
    pub get_item_key: GetItemKey<T, K>,

    /// Number of slots rendered on each side of the focused item.
    ///
    /// The window materializes `2 * preload_radius + 1` slots, so this should stay small.
    pub preload_radius: usize,

    pub wrap_mode: WrapMode,

    /// Enables/disables the carousel. When disabled, cycles are no-ops and the window is empty.
    pub enabled: bool,

    /// Optional hook fired when the focused item disappears from a replacement list.
    ///
    /// The engine still re-anchors silently to whatever now occupies the focused slot.
    pub on_continuity_lost: Option<OnContinuityLost<K>>,
}

impl<T, K> Clone for CarouselOptions<T, K> {
    fn clone(&self) -> Self {
        Self {
            get_item_key: Arc::clone(&self.get_item_key),
            preload_radius: self.preload_radius,
            wrap_mode: self.wrap_mode,
            enabled: self.enabled,
            on_continuity_lost: self.on_continuity_lost.clone(),
        }
    }
}

impl<K: Clone + 'static> CarouselOptions<K, K> {
    /// Options for lists whose items are their own keys.
    pub fn identity() -> Self {
        Self::new(K::clone)
    }
}

impl<T, K> CarouselOptions<T, K> {
    /// Creates options with a key mapping.
    ///
    /// `get_item_key(item)` must return the same key whenever the host re-supplies the same
    /// logical item, even inside a brand-new list.
    pub fn new(get_item_key: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        Self {
            get_item_key: Arc::new(get_item_key),
            preload_radius: 1,
            wrap_mode: WrapMode::default(),
            enabled: true,
            on_continuity_lost: None,
        }
    }

    pub fn with_get_item_key(
        mut self,
        get_item_key: impl Fn(&T) -> K + Send + Sync + 'static,
    ) -> Self {
        self.get_item_key = Arc::new(get_item_key);
        self
    }

    pub fn with_preload_radius(mut self, preload_radius: usize) -> Self {
        self.preload_radius = preload_radius;
        self
    }

    pub fn with_wrap_mode(mut self, wrap_mode: WrapMode) -> Self {
        self.wrap_mode = wrap_mode;
        self
    }

    /// Shorthand for `with_wrap_mode(WrapMode::Finite)` / `WrapMode::Infinite`.
    pub fn with_finite(self, finite: bool) -> Self {
        self.with_wrap_mode(if finite {
            WrapMode::Finite
        } else {
            WrapMode::Infinite
        })
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_on_continuity_lost(
        mut self,
        on_continuity_lost: Option<impl Fn(&K) + Send + Sync + 'static>,
    ) -> Self {
        self.on_continuity_lost = on_continuity_lost.map(|f| Arc::new(f) as _);
        self
    }

    pub(crate) fn key_of(&self, item: &T) -> K {
        (self.get_item_key)(item)
    }
}

impl<T, K> core::fmt::Debug for CarouselOptions<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("preload_radius", &self.preload_radius)
            .field("wrap_mode", &self.wrap_mode)
            .field("enabled", &self.enabled)
            .field("on_continuity_lost", &self.on_continuity_lost.is_some())
            .finish_non_exhaustive()
    }
}
