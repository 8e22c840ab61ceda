use super::limits::AxisLimits;
use super::scene::{Scene, SurfacePoint, TextAnchor, TextBaseline, TextElement};
use crate::config::ChartConfig;
use crate::data::model::Row;

/// Length of tick marks, outward from the axis line.
const TICK_SIZE: f32 = 6.0;
/// Gap between a tick mark and its label.
const TICK_PADDING: f32 = 3.0;
const TICK_FONT_SIZE: f32 = 10.0;

// ---------------------------------------------------------------------------
// LinearScale
// ---------------------------------------------------------------------------

/// Affine map from a data domain onto a pixel range.
///
/// The domain may be given in either order; `[hi, lo]` inverts the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value into the range. A zero-width domain maps everything
    /// to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }

    /// Round tick values covering the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        if !(lo.is_finite() && hi.is_finite()) || count == 0 {
            return Vec::new();
        }
        if lo == hi {
            return vec![lo];
        }

        let (factor, power) = tick_increment(lo, hi, count);
        let step = factor * 10f64.powi(power);
        let start = (lo / step).ceil() as i64;
        let end = (hi / step).floor() as i64;

        (start..=end)
            .map(|i| {
                if power < 0 {
                    // Divide by the reciprocal to keep 0.1-style steps exact.
                    i as f64 / (10f64.powi(-power) / factor)
                } else {
                    i as f64 * step
                }
            })
            .collect()
    }

    /// Tick label text with the precision implied by the tick step.
    pub fn tick_label(&self, value: f64, count: usize) -> String {
        let (lo, hi) = (self.domain.0.min(self.domain.1), self.domain.0.max(self.domain.1));
        let decimals = if lo == hi {
            0
        } else {
            let (factor, power) = tick_increment(lo, hi, count);
            let step = factor * 10f64.powi(power);
            (-step.log10().floor()).max(0.0) as usize
        };
        format!("{value:.decimals$}")
    }
}

/// Step as `factor × 10^power`, with factor in {1, 2, 5, 10}.
fn tick_increment(lo: f64, hi: f64, count: usize) -> (f64, i32) {
    let raw = (hi - lo) / count as f64;
    let power = raw.log10().floor() as i32;
    let error = raw / 10f64.powi(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    (factor, power)
}

// ---------------------------------------------------------------------------
// ScaleMapping
// ---------------------------------------------------------------------------

/// The pair of scales for one render: fertility rate on x, life expectancy
/// on y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMapping {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl ScaleMapping {
    /// Pad the limits and build both scales.
    pub fn from_limits(limits: &AxisLimits, config: &ChartConfig) -> Self {
        let range = (config.pixel_range[0], config.pixel_range[1]);
        let x = LinearScale::new(
            (limits.x_min - config.x_padding, limits.x_max + config.x_padding),
            range,
        );
        let y = LinearScale::new(
            (limits.y_max + config.y_padding, limits.y_min - config.y_padding),
            range,
        );
        Self { x, y }
    }

    pub fn x_of(&self, row: &Row) -> f32 {
        self.x.map(row.fertility_rate) as f32
    }

    pub fn y_of(&self, row: &Row) -> f32 {
        self.y.map(row.life_expectancy) as f32
    }

    pub fn position(&self, row: &Row) -> SurfacePoint {
        SurfacePoint::new(self.x_of(row), self.y_of(row))
    }
}

// ---------------------------------------------------------------------------
// Axis rendering
// ---------------------------------------------------------------------------

/// Build the scales for `limits` and draw both axes into `scene`: the x axis
/// along the bottom of the pixel range, the y axis along its left edge.
pub fn draw_axes(limits: &AxisLimits, config: &ChartConfig, scene: &mut Scene) -> ScaleMapping {
    let mapping = ScaleMapping::from_limits(limits, config);
    let [r0, r1] = config.pixel_range.map(|v| v as f32);

    // x axis
    let axis_y = r1;
    scene.line(SurfacePoint::new(r0, axis_y + TICK_SIZE), SurfacePoint::new(r0, axis_y));
    scene.line(SurfacePoint::new(r0, axis_y), SurfacePoint::new(r1, axis_y));
    scene.line(SurfacePoint::new(r1, axis_y), SurfacePoint::new(r1, axis_y + TICK_SIZE));
    for tick in mapping.x.ticks(config.tick_count) {
        let px = mapping.x.map(tick) as f32;
        scene.line(SurfacePoint::new(px, axis_y), SurfacePoint::new(px, axis_y + TICK_SIZE));
        scene.text(TextElement {
            position: SurfacePoint::new(px, axis_y + TICK_SIZE + TICK_PADDING),
            text: mapping.x.tick_label(tick, config.tick_count),
            size: TICK_FONT_SIZE,
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Hanging,
            rotation_deg: 0.0,
        });
    }

    // y axis
    let axis_x = r0;
    scene.line(SurfacePoint::new(axis_x - TICK_SIZE, r0), SurfacePoint::new(axis_x, r0));
    scene.line(SurfacePoint::new(axis_x, r0), SurfacePoint::new(axis_x, r1));
    scene.line(SurfacePoint::new(axis_x, r1), SurfacePoint::new(axis_x - TICK_SIZE, r1));
    for tick in mapping.y.ticks(config.tick_count) {
        let py = mapping.y.map(tick) as f32;
        scene.line(SurfacePoint::new(axis_x - TICK_SIZE, py), SurfacePoint::new(axis_x, py));
        scene.text(TextElement {
            position: SurfacePoint::new(axis_x - TICK_SIZE - TICK_PADDING, py),
            text: mapping.y.tick_label(tick, config.tick_count),
            size: TICK_FONT_SIZE,
            anchor: TextAnchor::End,
            baseline: TextBaseline::Middle,
            rotation_deg: 0.0,
        });
    }

    mapping
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::scene::Element;

    fn limits() -> AxisLimits {
        AxisLimits {
            x_min: 1.5,
            x_max: 7.5,
            y_min: 30.0,
            y_max: 75.0,
        }
    }

    #[test]
    fn test_mapping_pads_and_inverts() {
        let mapping = ScaleMapping::from_limits(&limits(), &ChartConfig::default());
        assert_eq!(mapping.x.domain, (1.0, 8.0));
        assert_eq!(mapping.y.domain, (80.0, 25.0));

        assert_eq!(mapping.x.map(1.0), 50.0);
        assert_eq!(mapping.x.map(8.0), 450.0);
        // Largest life expectancy sits at the top of the surface.
        assert_eq!(mapping.y.map(80.0), 50.0);
        assert_eq!(mapping.y.map(25.0), 450.0);
    }

    #[test]
    fn test_x_monotone_non_decreasing_y_non_increasing() {
        let mapping = ScaleMapping::from_limits(&limits(), &ChartConfig::default());
        let values: Vec<f64> = (0..200).map(|i| -10.0 + i as f64 * 0.5).collect();
        for pair in values.windows(2) {
            assert!(mapping.x.map(pair[0]) <= mapping.x.map(pair[1]));
            assert!(mapping.y.map(pair[0]) >= mapping.y.map(pair[1]));
        }
    }

    #[test]
    fn test_degenerate_domain_maps_to_midpoint() {
        let scale = LinearScale::new((5.0, 5.0), (3.0, 20.0));
        assert_eq!(scale.map(5.0), 11.5);
        assert_eq!(scale.map(100.0), 11.5);
    }

    #[test]
    fn test_ticks_use_nice_steps() {
        let scale = LinearScale::new((1.0, 8.0), (50.0, 450.0));
        assert_eq!(
            scale.ticks(10),
            vec![1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0, 5.5, 6.0, 6.5, 7.0, 7.5, 8.0]
        );
        assert_eq!(scale.tick_label(2.0, 10), "2.0");

        let inverted = LinearScale::new((80.0, 25.0), (50.0, 450.0));
        assert_eq!(
            inverted.ticks(10),
            vec![25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0, 80.0]
        );
        assert_eq!(inverted.tick_label(45.0, 10), "45");
    }

    #[test]
    fn test_ticks_stay_inside_domain() {
        let scale = LinearScale::new((0.93, 2.17), (0.0, 1.0));
        let ticks = scale.ticks(10);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|t| (0.93..=2.17).contains(t)));
        assert_eq!(ticks[0], 1.0);
    }

    #[test]
    fn test_draw_axes_places_axes_on_edges() {
        let config = ChartConfig::default();
        let mut scene = Scene::new(config.width, config.height);
        let mapping = draw_axes(&limits(), &config, &mut scene);

        let lines: Vec<(SurfacePoint, SurfacePoint)> = scene
            .elements()
            .iter()
            .filter_map(|e| match e {
                Element::Line { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert!(lines.contains(&(SurfacePoint::new(50.0, 450.0), SurfacePoint::new(450.0, 450.0))));
        assert!(lines.contains(&(SurfacePoint::new(50.0, 50.0), SurfacePoint::new(50.0, 450.0))));

        let x_ticks = mapping.x.ticks(config.tick_count).len();
        let y_ticks = mapping.y.ticks(config.tick_count).len();
        assert_eq!(scene.texts().count(), x_ticks + y_ticks);
        assert_eq!(scene.markers().count(), 0);
    }
}
