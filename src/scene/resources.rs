//! Graphics resource accounting.
//!
//! Entities never own GPU objects directly. Each one holds opaque
//! [`ResourceHandle`]s allocated from the scene's [`ResourceRegistry`], and
//! disposal hands them back. The registry tracks the live set, so a leak
//! across reconciliation passes shows up as a growing
//! [`ResourceRegistry::live_count`].

use rustc_hash::FxHashSet;

/// Category of a graphics resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Vertex/index buffers for a mesh or line set.
    Geometry,
    /// Shading parameters bound to a draw.
    Material,
    /// Rasterised image, e.g. a value label.
    Texture,
}

/// Opaque handle to one allocated graphics resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceHandle {
    kind: ResourceKind,
    id: u64,
}

impl ResourceHandle {
    /// Which kind of resource this handle refers to.
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }
}

/// Cumulative allocation counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResourceStats {
    /// Handles handed out since creation.
    pub allocated: u64,
    /// Handles released since creation.
    pub released: u64,
}

/// Allocator and live-set tracker for graphics resource handles.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    next_id: u64,
    live: FxHashSet<ResourceHandle>,
    stats: ResourceStats,
}

impl ResourceRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh handle of the given kind.
    pub fn allocate(&mut self, kind: ResourceKind) -> ResourceHandle {
        let handle = ResourceHandle {
            kind,
            id: self.next_id,
        };
        self.next_id += 1;
        let _ = self.live.insert(handle);
        self.stats.allocated += 1;
        handle
    }

    /// Allocate one handle per entry of `layout`, in order.
    pub fn allocate_all(&mut self, layout: &[ResourceKind]) -> Vec<ResourceHandle> {
        layout.iter().map(|&kind| self.allocate(kind)).collect()
    }

    /// Release a handle. Releasing an already-released handle is a no-op and
    /// returns `false`.
    pub fn release(&mut self, handle: ResourceHandle) -> bool {
        let released = self.live.remove(&handle);
        if released {
            self.stats.released += 1;
        }
        released
    }

    /// Whether the handle is still allocated.
    #[must_use]
    pub fn is_live(&self, handle: ResourceHandle) -> bool {
        self.live.contains(&handle)
    }

    /// Number of live handles.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Number of live handles of one kind.
    #[must_use]
    pub fn live_count_of(&self, kind: ResourceKind) -> usize {
        self.live.iter().filter(|h| h.kind == kind).count()
    }

    /// Cumulative allocation counters.
    #[must_use]
    pub fn stats(&self) -> ResourceStats {
        self.stats
    }
}
