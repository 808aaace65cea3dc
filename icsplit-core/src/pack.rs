//! Size-bounded chunk packing.

use crate::event::Event;

/// A contiguous run of one year's events destined for a single output file.
#[derive(Debug, Clone)]
pub struct Chunk {
    events: Vec<Event>,
    size: usize,
}

impl Chunk {
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events in this chunk.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Projected serialized size of the output file, wrapper included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// True for a singleton chunk whose lone event does not fit the ceiling.
    pub fn exceeds(&self, ceiling: usize) -> bool {
        self.size > ceiling
    }
}

/// Greedily pack one year's events into size-bounded chunks.
///
/// Single pass, order-preserving, not an optimal bin-packing: the running
/// chunk closes as soon as the next event would push it past `ceiling`, and
/// that event opens the next chunk. An event landing exactly at the ceiling
/// stays put; only a strict overshoot splits. An event too large to fit even
/// alone still gets its own chunk; `Chunk::exceeds` flags it for reporting,
/// nothing is ever dropped or truncated.
///
/// `base_size` is the serialized size of a chunk with no events (wrapper,
/// calendar properties, timezone components), counted against the ceiling of
/// every chunk.
pub fn pack(events: Vec<Event>, ceiling: usize, base_size: usize) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut current: Vec<Event> = Vec::new();
    let mut current_size = base_size;

    for event in events {
        if !current.is_empty() && current_size + event.size > ceiling {
            chunks.push(Chunk {
                events: std::mem::take(&mut current),
                size: current_size,
            });
            current_size = base_size;
        }
        current_size += event.size;
        current.push(event);
    }

    if !current.is_empty() {
        chunks.push(Chunk {
            events: current,
            size: current_size,
        });
    }

    chunks
}
