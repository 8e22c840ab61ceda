use super::scene::{Scene, SurfacePoint, TextAnchor, TextBaseline, TextElement};
use crate::config::ChartConfig;

const PT_TO_PX: f32 = 4.0 / 3.0;

/// Draw the chart title and both axis captions.
pub fn draw_labels(config: &ChartConfig, scene: &mut Scene) {
    scene.text(caption(&config.title, SurfacePoint::new(100.0, 40.0), 14.0, 0.0));
    scene.text(caption(&config.x_caption, SurfacePoint::new(130.0, 490.0), 10.0, 0.0));
    scene.text(caption(&config.y_caption, SurfacePoint::new(15.0, 300.0), 10.0, -90.0));
}

fn caption(text: &str, position: SurfacePoint, size_pt: f32, rotation_deg: f32) -> TextElement {
    TextElement {
        position,
        text: text.to_string(),
        size: size_pt * PT_TO_PX,
        anchor: TextAnchor::Start,
        baseline: TextBaseline::Alphabetic,
        rotation_deg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_fixed() {
        let config = ChartConfig::default();
        let mut scene = Scene::new(500.0, 500.0);
        draw_labels(&config, &mut scene);

        let texts: Vec<&TextElement> = scene.texts().collect();
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[0].text, "Countries by Life Expectancy and Fertility Rate");
        assert_eq!(texts[0].position, SurfacePoint::new(100.0, 40.0));
        assert_eq!(texts[1].position, SurfacePoint::new(130.0, 490.0));
        assert_eq!(texts[2].rotation_deg, -90.0);
        assert!(texts[0].size > texts[1].size);
    }
}
