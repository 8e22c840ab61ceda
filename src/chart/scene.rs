/// A position on the drawing surface, in pixels. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfacePoint {
    pub x: f32,
    pub y: f32,
}

impl SurfacePoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_sq(self, other: SurfacePoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Horizontal anchoring of a text element relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Vertical anchoring of a text element relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    /// Position is the top of the glyphs.
    Hanging,
    Middle,
    /// Position is the baseline.
    Alphabetic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub position: SurfacePoint,
    pub text: String,
    /// Font size in pixels.
    pub size: f32,
    pub anchor: TextAnchor,
    pub baseline: TextBaseline,
    /// Clockwise rotation in degrees around `position`.
    pub rotation_deg: f32,
}

/// One data point drawn as a filled circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub center: SurfacePoint,
    pub radius: f32,
    pub fill: [u8; 3],
    /// Index of the source row in the dataset.
    pub row: usize,
}

impl Marker {
    pub fn contains(&self, point: SurfacePoint) -> bool {
        self.center.distance_sq(point) <= self.radius * self.radius
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Line { from: SurfacePoint, to: SurfacePoint },
    Text(TextElement),
    Marker(Marker),
}

// ---------------------------------------------------------------------------
// Scene – retained display list for one render
// ---------------------------------------------------------------------------

/// Fixed-size drawing surface holding everything the last render produced.
#[derive(Debug, Clone)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    elements: Vec<Element>,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn line(&mut self, from: SurfacePoint, to: SurfacePoint) {
        self.push(Element::Line { from, to });
    }

    pub fn text(&mut self, text: TextElement) {
        self.push(Element::Text(text));
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.elements.iter().filter_map(|e| match e {
            Element::Marker(m) => Some(m),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextElement> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text(t) => Some(t),
            _ => None,
        })
    }

    /// Top-most marker under `point`; later markers paint over earlier ones.
    pub fn marker_at(&self, point: SurfacePoint) -> Option<(usize, &Marker)> {
        self.markers()
            .enumerate()
            .filter(|(_, m)| m.contains(point))
            .last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(x: f32, y: f32, radius: f32, row: usize) -> Element {
        Element::Marker(Marker {
            center: SurfacePoint::new(x, y),
            radius,
            fill: [0, 0, 0],
            row,
        })
    }

    #[test]
    fn test_marker_at_prefers_topmost() {
        let mut scene = Scene::new(500.0, 500.0);
        scene.line(SurfacePoint::new(0.0, 0.0), SurfacePoint::new(10.0, 0.0));
        scene.push(marker(100.0, 100.0, 10.0, 7));
        scene.push(marker(105.0, 100.0, 10.0, 3));

        let (idx, hit) = scene.marker_at(SurfacePoint::new(102.0, 100.0)).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(hit.row, 3);

        let (_, hit) = scene.marker_at(SurfacePoint::new(92.0, 100.0)).unwrap();
        assert_eq!(hit.row, 7);

        assert!(scene.marker_at(SurfacePoint::new(300.0, 300.0)).is_none());
    }

    #[test]
    fn test_clear_empties_scene() {
        let mut scene = Scene::new(500.0, 500.0);
        scene.push(marker(1.0, 1.0, 1.0, 0));
        assert!(!scene.is_empty());
        scene.clear();
        assert!(scene.is_empty());
        assert_eq!(scene.markers().count(), 0);
    }
}
