//! Depth-range accumulation for selection (picking) mode.

/// One selection hit: the depth range touched while it was open.
///
/// Depths are stored inverted (`u32::MAX - depth`) so that the smallest value
/// is the nearest primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectHit {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Default)]
pub struct SelectionBuffer {
    open: Option<SelectHit>,
    hits: Vec<SelectHit>,
}

impl SelectionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Widen the open hit (opening one if needed) by an inverted depth range.
    pub fn record(&mut self, z0: u32, z1: u32) {
        let (lo, hi) = (z0.min(z1), z0.max(z1));
        match &mut self.open {
            Some(hit) => {
                hit.min = hit.min.min(lo);
                hit.max = hit.max.max(hi);
            }
            None => self.open = Some(SelectHit { min: lo, max: hi }),
        }
    }

    /// Record the depth range covered by a primitive's device depths.
    pub fn record_depths(&mut self, depths: &[i32]) {
        let Some(min) = depths.iter().copied().min() else {
            return;
        };
        let max = depths.iter().copied().max().unwrap_or(min);
        self.record(invert_depth(min), invert_depth(max));
    }

    /// The hit currently accumulating, if any primitive was recorded since
    /// the last [`close_hit`](Self::close_hit).
    pub fn open_hit(&self) -> Option<SelectHit> {
        self.open
    }

    /// Close the open hit and return it.
    pub fn close_hit(&mut self) -> Option<SelectHit> {
        let hit = self.open.take()?;
        self.hits.push(hit);
        Some(hit)
    }

    pub fn hits(&self) -> &[SelectHit] {
        &self.hits
    }

    pub fn clear(&mut self) {
        self.open = None;
        self.hits.clear();
    }
}

/// Device depths grow towards the viewer; inverting makes nearer smaller.
#[inline]
pub fn invert_depth(z: i32) -> u32 {
    u32::MAX - z as u32
}
