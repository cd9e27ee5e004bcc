/// Position within a wrap-around list of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    /// Indices past the end wrap around. An empty carousel always sits at 0.
    pub fn new(len: usize, current: usize) -> Self {
        let current = if len == 0 { 0 } else { current % len };
        Self { len, current }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&self) -> usize {
        match self.len {
            0 => 0,
            len if self.current == len - 1 => 0,
            _ => self.current + 1,
        }
    }

    pub fn prev(&self) -> usize {
        match self.len {
            0 => 0,
            len if self.current == 0 => len - 1,
            _ => self.current - 1,
        }
    }

    /// `window` consecutive indices starting at the current slide.
    pub fn visible(&self, window: usize) -> Vec<usize> {
        if self.len == 0 {
            return Vec::new();
        }
        (0..window).map(|i| (self.current + i) % self.len).collect()
    }
}
