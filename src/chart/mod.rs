/// Chart layer: limits, scales, and the host-independent scene.
///
/// One render runs, on a cleared [`scene::Scene`]:
/// ```text
///   active rows ──► limits::find_min_max ──► scale::draw_axes ──► ScaleMapping
///                                                                    │
///                         points::PointRenderer::render ◄────────────┘
///                         labels::draw_labels
/// ```

pub mod format;
pub mod labels;
pub mod limits;
pub mod points;
pub mod scale;
pub mod scene;
