use crate::chart::labels::draw_labels;
use crate::chart::limits::find_min_max;
use crate::chart::points::{DetailPanel, PointRenderer};
use crate::chart::scale::{draw_axes, ScaleMapping};
use crate::chart::scene::{Scene, SurfacePoint};
use crate::config::ChartConfig;
use crate::data::filter::rows_for_year;
use crate::data::model::{Dataset, YearSet};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full chart state, independent of the UI toolkit.
pub struct AppState {
    pub config: ChartConfig,

    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<Dataset>,

    /// Distinct years backing the selector.
    pub years: YearSet,

    pub selected_year: Option<i32>,

    /// Everything drawn by the last render.
    pub scene: Scene,

    /// Scales of the last render; None when the active subset was empty.
    pub mapping: Option<ScaleMapping>,

    /// Marker pipeline and hover panel; present while a dataset is loaded.
    pub points: Option<PointRenderer>,

    /// Index into `scene.markers()` of the hovered marker.
    pub hovered_marker: Option<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl AppState {
    pub fn new(config: ChartConfig) -> Self {
        let scene = Scene::new(config.width, config.height);
        Self {
            config,
            dataset: None,
            years: YearSet::default(),
            selected_year: None,
            scene,
            mapping: None,
            points: None,
            hovered_marker: None,
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset and render its initial year.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.years = YearSet::from_rows(&dataset.rows);
        self.points = Some(PointRenderer::new(&dataset, &self.config));

        let initial = self
            .config
            .initial_year
            .filter(|y| self.years.contains(*y))
            .or_else(|| self.years.first());

        self.status_message = (dataset.skipped_rows > 0)
            .then(|| format!("{} rows skipped (non-numeric values)", dataset.skipped_rows));
        self.dataset = Some(dataset);

        match initial {
            Some(year) => self.select_year(year),
            None => {
                log::warn!("Dataset has no rows to plot");
                self.selected_year = None;
                self.render();
            }
        }
    }

    /// Drop the dataset and clear the surface.
    pub fn close_dataset(&mut self) {
        self.dataset = None;
        self.years = YearSet::default();
        self.selected_year = None;
        self.mapping = None;
        self.points = None;
        self.hovered_marker = None;
        self.scene.clear();
    }

    /// Switch the active year and redraw everything.
    pub fn select_year(&mut self, year: i32) {
        if self.selected_year != Some(year) {
            log::info!("Selected year {year}");
        }
        self.selected_year = Some(year);
        self.render();
    }

    /// Clear the scene and run the full pipeline for the selected year.
    fn render(&mut self) {
        self.scene.clear();
        self.mapping = None;
        self.hovered_marker = None;
        if let Some(points) = &mut self.points {
            points.on_pointer_leave();
        }

        if let (Some(dataset), Some(year), Some(points)) =
            (&self.dataset, self.selected_year, &self.points)
        {
            let active = rows_for_year(dataset, year);
            let x: Vec<f64> = active.iter().map(|(_, r)| r.fertility_rate).collect();
            let y: Vec<f64> = active.iter().map(|(_, r)| r.life_expectancy).collect();

            match find_min_max(&x, &y) {
                Ok(limits) => {
                    let mapping = draw_axes(&limits, &self.config, &mut self.scene);
                    points.render(&mapping, active.iter().copied(), &mut self.scene);
                    self.mapping = Some(mapping);
                    log::debug!("Rendered {} points for {year}", active.len());
                }
                Err(e) => log::warn!("No rows for year {year}: {e}"),
            }
        }

        draw_labels(&self.config, &mut self.scene);
    }

    /// Dispatch hover transitions for a pointer position on the surface.
    /// `None` means the pointer is off the surface.
    pub fn update_hover(&mut self, pointer: Option<SurfacePoint>) {
        let hit = pointer.and_then(|p| {
            self.scene
                .marker_at(p)
                .map(|(idx, marker)| (idx, marker.row, p))
        });

        match hit {
            Some((idx, row, p)) if self.hovered_marker != Some(idx) => {
                self.on_pointer_leave();
                self.on_pointer_enter(idx, row, p);
            }
            Some(_) => {}
            None => self.on_pointer_leave(),
        }
    }

    fn on_pointer_enter(&mut self, marker: usize, row: usize, pointer: SurfacePoint) {
        let (Some(dataset), Some(points)) = (&self.dataset, &mut self.points) else {
            return;
        };
        if let Some(r) = dataset.rows.get(row) {
            points.on_pointer_enter(row, r, pointer);
            self.hovered_marker = Some(marker);
        }
    }

    fn on_pointer_leave(&mut self) {
        if self.hovered_marker.take().is_some() {
            if let Some(points) = &mut self.points {
                points.on_pointer_leave();
            }
        }
    }

    pub fn detail(&self) -> Option<&DetailPanel> {
        self.points.as_ref().and_then(|p| p.detail())
    }

    /// Number of markers currently drawn.
    pub fn point_count(&self) -> usize {
        self.scene.markers().count()
    }
}
