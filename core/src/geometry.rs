#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn square(origin: Point, side: f64) -> Self {
        Self::new(origin.x, origin.y, origin.x + side, origin.y + side)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn inflate(&self, amount: f64) -> Self {
        Self::new(
            self.left - amount,
            self.top - amount,
            self.right + amount,
            self.bottom + amount,
        )
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    /// Strict intersection: rectangles that only share an edge do not overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}

/// Area in which a square's top-left corner may land.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutArea {
    pub width: f64,
    pub height: f64,
}

impl LayoutArea {
    /// Shrinks the container by one square so placed squares stay inside it.
    pub fn for_container(container_width: f64, container_height: f64, square_size: f64) -> Self {
        Self {
            width: (container_width - square_size).max(0.0),
            height: (container_height - square_size).max(0.0),
        }
    }

    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            point.x.min(self.width).max(0.0),
            point.y.min(self.height).max(0.0),
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}
