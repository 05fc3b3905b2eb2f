use std::ops::Index;

/// Ring buffer of fixed capacity `N`.
///
/// Pushing onto a full queue overwrites the oldest element. Indexing starts
/// at the oldest element.
#[derive(Clone, Debug)]
pub struct LimitedQueue<T, const N: usize> {
    queue: [T; N],
    /// Position at which the next element will be written.
    end: usize,
    len: usize,
}

impl<T: Copy + Default, const N: usize> Default for LimitedQueue<T, N> {
    fn default() -> Self {
        Self {
            queue: [T::default(); N],
            end: 0,
            len: 0,
        }
    }
}

impl<T: Copy + Default, const N: usize> LimitedQueue<T, N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, elem: T) {
        self.queue[self.end] = elem;
        self.end = (self.end + 1) % N;

        if self.len < N {
            self.len += 1;
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    const fn start(&self) -> usize {
        (self.end + N - self.len) % N
    }
}

impl<T: Copy + Default, const N: usize> Index<usize> for LimitedQueue<T, N> {
    type Output = T;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(idx < self.len, "index {idx} out of bounds for length {}", self.len);

        &self.queue[(self.start() + idx) % N]
    }
}
