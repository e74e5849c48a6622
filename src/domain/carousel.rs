/// Seconds between automatic advances of the testimonial carousel.
pub const CAROUSEL_INTERVAL_SECS: u32 = 6;

/// Position within a fixed-length carousel. Indices always wrap.
///
/// A carousel starts out auto-advancing; once a visitor navigates by hand it
/// is `paused` and stays that way for the slides it links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    autoplay: bool,
}

impl Carousel {
    pub fn new(len: usize, index: usize) -> Self {
        let index = if len == 0 { 0 } else { index % len };
        Self {
            len,
            index,
            autoplay: true,
        }
    }

    /// Unparsable or missing indices start at the first slide.
    pub fn from_query(len: usize, raw: Option<&str>) -> Self {
        let index = raw
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        Self::new(len, index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn paused(self) -> Self {
        Self {
            autoplay: false,
            ..self
        }
    }

    /// `auto=false` in a query pauses; anything else leaves autoplay alone.
    pub fn with_auto_query(self, raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("false") | Some("0") => self.paused(),
            _ => self,
        }
    }

    /// A single slide has nothing to advance to.
    pub fn autoplay(&self) -> bool {
        self.autoplay && self.len > 1
    }

    pub fn next(&self) -> Self {
        Self {
            index: if self.len == 0 { 0 } else { (self.index + 1) % self.len },
            ..*self
        }
    }

    pub fn prev(&self) -> Self {
        if self.len == 0 {
            return *self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..*self
        }
    }
}
