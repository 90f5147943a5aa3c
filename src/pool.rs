//! Pool allocator (C1).
//!
//! The builder never frees individual objects; it bump-allocates 16-bit
//! opcode words out of a growing set of pages and releases everything at
//! once when the arena is dropped. This mirrors `nfai_alloc`/
//! `nfai_alloc_page` from the engine's C heritage, but follows this
//! crate's re-architecture guidance: pages are plain `Vec<u16>` buffers
//! addressed by index rather than raw pointers, so "freeing the pool" is
//! just letting the `WordArena` go out of scope.

use crate::error::BuildError;

/// Default page size, in words, requested from the growth policy when the
/// current page runs out of room. Matches `NFAI_DEFAULT_PAGE_SIZE`'s
/// intent (a few builder-sized fragments per page) scaled to words.
pub const DEFAULT_PAGE_WORDS: usize = 512;

enum Policy {
    /// Unbounded growth backed by the process heap.
    Heap,
    /// A hard upper bound on total words ever allocated, fixed at
    /// construction time. Equivalent to `nfa_builder_init_pool`'s
    /// fixed-buffer mode.
    Fixed { capacity: usize },
    /// A caller-supplied callback decides how large the arena may grow
    /// each time more room is needed, mirroring `NfaPageAllocFn`.
    Custom {
        grow: Box<dyn FnMut(usize) -> Option<usize>>,
        capacity: usize,
    },
}

/// A bump allocator over 16-bit opcode words.
pub struct WordArena {
    words: Vec<u16>,
    policy: Policy,
}

impl WordArena {
    /// An arena that grows on the heap as needed, without a fixed ceiling.
    pub fn new() -> Self {
        Self {
            words: Vec::with_capacity(DEFAULT_PAGE_WORDS),
            policy: Policy::Heap,
        }
    }

    /// An arena bounded to `capacity` words, matching a fixed-size pool
    /// buffer handed to the builder up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: Vec::with_capacity(capacity.min(DEFAULT_PAGE_WORDS)),
            policy: Policy::Fixed { capacity },
        }
    }

    /// An arena whose growth is governed by a caller-supplied page
    /// allocation callback: given the total number of words now needed,
    /// it returns the new total capacity to allow, or `None` to deny
    /// growth (surfaced as [`BuildError::OutOfMemory`]).
    ///
    /// Mirrors `nfai_alloc_page`'s validation: a callback that returns a
    /// capacity smaller than what was asked for is treated as a hard
    /// failure, not trusted at face value.
    pub fn with_page_alloc(grow: impl FnMut(usize) -> Option<usize> + 'static) -> Self {
        Self {
            words: Vec::new(),
            policy: Policy::Custom {
                grow: Box::new(grow),
                capacity: 0,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[u16] {
        &self.words
    }

    fn reserve(&mut self, additional: usize) -> Result<(), BuildError> {
        let needed = self.words.len() + additional;
        match &mut self.policy {
            Policy::Heap => Ok(()),
            Policy::Fixed { capacity } => {
                if needed > *capacity {
                    Err(BuildError::OutOfMemory)
                } else {
                    Ok(())
                }
            }
            Policy::Custom { grow, capacity } => {
                if needed <= *capacity {
                    return Ok(());
                }
                let requested = needed.max(DEFAULT_PAGE_WORDS);
                match grow(requested) {
                    Some(new_capacity) if new_capacity >= requested => {
                        *capacity = new_capacity;
                        Ok(())
                    }
                    _ => Err(BuildError::OutOfMemory),
                }
            }
        }
    }

    /// Appends `ops` to the arena and returns the starting word index.
    pub fn push(&mut self, ops: &[u16]) -> Result<u32, BuildError> {
        self.reserve(ops.len())?;
        let start = self.words.len() as u32;
        self.words.extend_from_slice(ops);
        Ok(start)
    }

    /// Appends a single word and returns its index.
    pub fn push_one(&mut self, word: u16) -> Result<u32, BuildError> {
        self.reserve(1)?;
        let start = self.words.len() as u32;
        self.words.push(word);
        Ok(start)
    }

    pub fn word_at(&self, index: u32) -> u16 {
        self.words[index as usize]
    }

    pub fn set_word_at(&mut self, index: u32, value: u16) {
        self.words[index as usize] = value;
    }
}

impl Default for WordArena {
    fn default() -> Self {
        Self::new()
    }
}
