//! Display sizing: fit a raster inside a bounding box without distorting it.

/// Largest area a shell renders the current raster into.
///
/// Both sides are at least 1 pixel, so a fitted size always has room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayBox {
    max_width: usize,
    max_height: usize,
}

impl DisplayBox {
    /// Box of `max_width` x `max_height`; a zero side is raised to 1.
    pub fn new(max_width: usize, max_height: usize) -> Self {
        Self {
            max_width: max_width.max(1),
            max_height: max_height.max(1),
        }
    }

    pub fn max_width(&self) -> usize {
        self.max_width
    }

    pub fn max_height(&self) -> usize {
        self.max_height
    }

    pub fn contains(&self, width: usize, height: usize) -> bool {
        width <= self.max_width && height <= self.max_height
    }
}

impl Default for DisplayBox {
    fn default() -> Self {
        Self::new(600, 400)
    }
}

/// Compute the display size of a `width` x `height` raster inside `bounds`.
///
/// Never upscales: a raster that already fits keeps its natural size.
/// Otherwise landscape rasters (aspect > 1) get their width capped and
/// portrait or square ones their height; the other side is derived from the
/// aspect ratio and rounded down. If the derived side would still overflow the
/// box, the other side is capped instead. Derived sides are at least 1 pixel.
pub fn fit(width: usize, height: usize, bounds: DisplayBox) -> (usize, usize) {
    if width == 0 || height == 0 || bounds.contains(width, height) {
        return (width, height);
    }

    let cap_width = |w: usize, h: usize| {
        let derived = (h * bounds.max_width / w).max(1);
        (bounds.max_width, derived)
    };
    let cap_height = |w: usize, h: usize| {
        let derived = (w * bounds.max_height / h).max(1);
        (derived, bounds.max_height)
    };

    if width > height {
        let (w, h) = cap_width(width, height);
        if h <= bounds.max_height {
            return (w, h);
        }
        cap_height(width, height)
    } else {
        let (w, h) = cap_height(width, height);
        if w <= bounds.max_width {
            return (w, h);
        }
        cap_width(width, height)
    }
}

/// [`fit`] against the default 600x400 box.
pub fn fit_default(width: usize, height: usize) -> (usize, usize) {
    fit(width, height, DisplayBox::default())
}
