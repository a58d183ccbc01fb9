//! Fixed-capacity trailing window over the most recent samples.

/// A bounded circular buffer of samples.
///
/// Backed by a single allocation of `capacity` slots. Once full, each push
/// overwrites the oldest sample.
#[derive(Clone, Debug)]
pub(crate) struct SlidingWindow {
    slots: Vec<f64>,
    capacity: usize,
    head: usize,
    len: usize,
}

impl SlidingWindow {
    /// Create a window holding at most `capacity` samples (minimum 1).
    pub(crate) fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: vec![0.0; capacity],
            capacity,
            head: 0,
            len: 0,
        }
    }

    /// Push a sample, overwriting the oldest one if the window is full.
    pub(crate) fn push(&mut self, sample: f64) {
        self.slots[self.head] = sample;
        self.head = (self.head + 1) % self.capacity;
        if self.len < self.capacity {
            self.len += 1;
        }
    }

    /// Iterate over samples oldest first.
    pub(crate) fn iter(&self) -> WindowIter<'_> {
        let start = if self.is_full() { self.head } else { 0 };
        WindowIter {
            slots: &self.slots,
            pos: start,
            remaining: self.len,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn is_full(&self) -> bool {
        self.len == self.capacity
    }
}

/// Iterator over a [`SlidingWindow`] in arrival order.
pub(crate) struct WindowIter<'a> {
    slots: &'a [f64],
    pos: usize,
    remaining: usize,
}

impl Iterator for WindowIter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let sample = self.slots[self.pos];
        self.pos = (self.pos + 1) % self.slots.len();
        self.remaining -= 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for WindowIter<'_> {}
