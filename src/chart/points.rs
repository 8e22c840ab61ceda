use super::format::format_thousands;
use super::scale::{LinearScale, ScaleMapping};
use super::scene::{Element, Marker, Scene, SurfacePoint};
use crate::color::parse_hex_rgb;
use crate::config::ChartConfig;
use crate::data::model::{Dataset, Row};

/// Offset of the detail panel from the pointer.
const DETAIL_OFFSET: SurfacePoint = SurfacePoint::new(0.0, -28.0);

/// Floating detail panel for the hovered country.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    pub row: usize,
    /// Top-left corner, in surface coordinates.
    pub position: SurfacePoint,
    pub lines: Vec<String>,
}

impl DetailPanel {
    fn for_row(index: usize, row: &Row, pointer: SurfacePoint) -> Self {
        Self {
            row: index,
            position: SurfacePoint::new(pointer.x + DETAIL_OFFSET.x, pointer.y + DETAIL_OFFSET.y),
            lines: vec![
                format!("Country: {}", row.location),
                format!("Year: {}", row.time),
                format!("Population: {}", format_thousands(row.population())),
                format!("Life Expectancy: {}", row.life_expectancy),
                format!("Fertility Rate: {}", row.fertility_rate),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// PointRenderer
// ---------------------------------------------------------------------------

/// Draws one marker per row and owns the hover detail panel.
///
/// The radius scale spans the population extent of the whole dataset, so a
/// country keeps a comparable size across years.
#[derive(Debug, Clone)]
pub struct PointRenderer {
    radius: LinearScale,
    fill: [u8; 3],
    detail: Option<DetailPanel>,
}

impl PointRenderer {
    pub fn new(dataset: &Dataset, config: &ChartConfig) -> Self {
        let extent = dataset.population_extent().unwrap_or((0.0, 0.0));
        let fill = parse_hex_rgb(&config.marker_color).unwrap_or_else(|| {
            log::warn!(
                "Invalid marker colour '{}'; using default",
                config.marker_color
            );
            parse_hex_rgb(&ChartConfig::default().marker_color).unwrap_or([66, 134, 244])
        });
        Self {
            radius: LinearScale::new(extent, (config.radius_range[0], config.radius_range[1])),
            fill,
            detail: None,
        }
    }

    pub fn radius_for(&self, row: &Row) -> f32 {
        self.radius.map(row.pop_mlns) as f32
    }

    /// Emit a marker for each `(dataset index, row)` pair.
    pub fn render<'a>(
        &self,
        mapping: &ScaleMapping,
        rows: impl IntoIterator<Item = (usize, &'a Row)>,
        scene: &mut Scene,
    ) {
        for (index, row) in rows {
            scene.push(Element::Marker(Marker {
                center: mapping.position(row),
                radius: self.radius_for(row),
                fill: self.fill,
                row: index,
            }));
        }
    }

    /// Pointer moved onto the marker for `row`.
    pub fn on_pointer_enter(&mut self, index: usize, row: &Row, pointer: SurfacePoint) {
        self.detail = Some(DetailPanel::for_row(index, row, pointer));
    }

    /// Pointer left the hovered marker.
    pub fn on_pointer_leave(&mut self) {
        self.detail = None;
    }

    pub fn detail(&self) -> Option<&DetailPanel> {
        self.detail.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::limits::AxisLimits;
    use crate::data::model::RawRecord;

    fn dataset(pops: &[(&str, &str, &str)]) -> Dataset {
        Dataset::from_records(pops.iter().map(|(loc, time, pop)| RawRecord {
            location: loc.to_string(),
            time: time.to_string(),
            fertility_rate: "2.5".into(),
            life_expectancy: "70".into(),
            pop_mlns: pop.to_string(),
        }))
    }

    #[test]
    fn test_radius_spans_whole_dataset_population() {
        let ds = dataset(&[("A", "1960", "1"), ("B", "1961", "1000"), ("C", "1961", "500.5")]);
        let renderer = PointRenderer::new(&ds, &ChartConfig::default());

        assert_eq!(renderer.radius_for(&ds.rows[0]), 3.0);
        assert_eq!(renderer.radius_for(&ds.rows[1]), 20.0);
        assert_eq!(renderer.radius_for(&ds.rows[2]), 11.5);
    }

    #[test]
    fn test_render_emits_one_marker_per_row() {
        let ds = dataset(&[("A", "1960", "1"), ("B", "1960", "2")]);
        let renderer = PointRenderer::new(&ds, &ChartConfig::default());
        let limits = AxisLimits {
            x_min: 2.5,
            x_max: 2.5,
            y_min: 70.0,
            y_max: 70.0,
        };
        let mapping = ScaleMapping::from_limits(&limits, &ChartConfig::default());
        let mut scene = Scene::new(500.0, 500.0);

        renderer.render(&mapping, ds.rows.iter().enumerate(), &mut scene);

        let markers: Vec<&Marker> = scene.markers().collect();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].center, SurfacePoint::new(250.0, 250.0));
        assert_eq!(markers[1].row, 1);
        assert_eq!(markers[0].fill, [0x42, 0x86, 0xf4]);
    }

    #[test]
    fn test_pointer_enter_and_leave() {
        let ds = dataset(&[("Brazil", "1960", "1.234567")]);
        let mut renderer = PointRenderer::new(&ds, &ChartConfig::default());
        assert!(renderer.detail().is_none());

        renderer.on_pointer_enter(0, &ds.rows[0], SurfacePoint::new(120.0, 200.0));
        let detail = renderer.detail().unwrap();
        assert_eq!(detail.position, SurfacePoint::new(120.0, 172.0));
        assert_eq!(
            detail.lines,
            vec![
                "Country: Brazil",
                "Year: 1960",
                "Population: 1,234,567",
                "Life Expectancy: 70",
                "Fertility Rate: 2.5",
            ]
        );

        renderer.on_pointer_leave();
        assert!(renderer.detail().is_none());
    }
}
