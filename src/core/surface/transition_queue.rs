//=========================================================================
// Transition Queue
//=========================================================================
//
// Queue for surface stack transitions.
//
// Surfaces queue transitions here during updates (a card click queuing
// the modal push, the modal queuing its own removal). The surface
// manager processes the queue at the frame boundary, FIFO, so stack
// mutation never happens mid-update.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{SurfaceKey, SurfaceTransition};

//=== TransitionQueue =====================================================

/// FIFO queue of pending surface transitions.
pub struct TransitionQueue<K: SurfaceKey> {
    queue: Vec<SurfaceTransition<K>>,
}

impl<K: SurfaceKey> TransitionQueue<K> {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a transition for the next frame boundary.
    pub fn push(&mut self, transition: SurfaceTransition<K>) {
        self.queue.push(transition);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all pending transitions, leaving the queue empty.
    pub fn take(&mut self) -> Vec<SurfaceTransition<K>> {
        std::mem::take(&mut self.queue)
    }
}

impl<K: SurfaceKey> Default for TransitionQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}
