use std::collections::VecDeque;

use crate::simulation::states::NVec;

/// Trail length used by the solar system viewer
pub const DEFAULT_TRAIL_LEN: usize = 600;

/// Fixed-capacity history of positions. Pushing onto a full trail drops the oldest point.
/// Storage grows on demand up to `capacity`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail<const D: usize> {
    points: VecDeque<NVec<D>>,
    capacity: usize,
}

impl<const D: usize> Trail<D> {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, p: NVec<D>) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(p);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Oldest point first
    pub fn iter(&self) -> impl Iterator<Item = &NVec<D>> + '_ {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
