pub const REBUILD_WIDTH_DELTA: f64 = 150.0;

/// Decides whether a settled resize warrants rebuilding the gallery.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeTracker {
    breakpoint: f64,
    is_mobile: bool,
    last_width: f64,
}

impl ResizeTracker {
    pub fn new(breakpoint: f64, width: f64) -> Self {
        Self {
            breakpoint,
            is_mobile: width <= breakpoint,
            last_width: width,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn last_width(&self) -> f64 {
        self.last_width
    }

    /// Mode is refreshed on every call; the reference width only moves when
    /// a rebuild is reported.
    pub fn observe(&mut self, width: f64) -> bool {
        let was_mobile = self.is_mobile;
        self.is_mobile = width <= self.breakpoint;
        let crossed = was_mobile != self.is_mobile;
        if crossed || (self.last_width - width).abs() > REBUILD_WIDTH_DELTA {
            self.last_width = width;
            return true;
        }
        false
    }
}
