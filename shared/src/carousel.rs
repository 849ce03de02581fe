/// Looping slide window over `len` items, `per_view` shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    per_view: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize, per_view: usize) -> Self {
        Self {
            len,
            per_view: per_view.clamp(1, len.max(1)),
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Indices of the slides currently in view, wrapping past the end.
    pub fn visible(&self) -> impl Iterator<Item = usize> + '_ {
        let count = if self.len == 0 { 0 } else { self.per_view };
        (0..count).map(move |offset| (self.index + offset) % self.len)
    }
}
