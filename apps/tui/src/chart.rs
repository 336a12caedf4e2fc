//! Grouped bar chart for the performance panel, drawn through an abstract
//! surface so the same geometry can target a terminal canvas or a test
//! recorder.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const SERIES_COLORS: [Rgb; 4] = [
    Rgb::new(0x8B, 0x5C, 0xF6),
    Rgb::new(0x3B, 0x82, 0xF6),
    Rgb::new(0x10, 0xB9, 0x81),
    Rgb::new(0xF5, 0x9E, 0x0B),
];

pub const LABEL_COLOR: Rgb = Rgb::new(0x66, 0x66, 0x66);

pub const WEEK_LABELS: [&str; 4] = ["Week 1", "Week 2", "Week 3", "Week 4"];

/// Four weeks of sample values, four series per week.
pub const WEEKLY_SERIES: [[u32; 4]; 4] = [
    [20, 35, 15, 25],
    [25, 40, 20, 30],
    [30, 45, 25, 35],
    [35, 50, 30, 40],
];

const PADDING: f64 = 40.0;
const MAX_VALUE: f64 = 60.0;
const GROUP_GAP: f64 = 20.0;
const BAR_INSET: f64 = 2.0;
const LEGEND_STEP: f64 = 80.0;
const LEGEND_SWATCH: f64 = 12.0;
const LEGEND_Y: f64 = 20.0;

/// Minimal drawing surface in top-left-origin coordinates.
pub trait DrawSurface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Rgb);
}

/// Bar height for a value, scaled linearly against the fixed axis maximum.
pub fn scaled_bar_height(value: u32, chart_height: f64) -> f64 {
    f64::from(value) / MAX_VALUE * chart_height
}

/// Draws the full chart: grouped bars, week labels and the series legend.
/// Surfaces too small to hold the plot area are left untouched.
pub fn draw_performance_chart(surface: &mut dyn DrawSurface, width: f64, height: f64) {
    let chart_width = width - PADDING * 2.0;
    let chart_height = height - PADDING * 2.0;
    if chart_width <= 0.0 || chart_height <= 0.0 {
        return;
    }

    surface.clear(width, height);

    let weeks = WEEKLY_SERIES.len();
    let series = SERIES_COLORS.len();
    #[allow(clippy::cast_precision_loss)]
    let bar_width = chart_width / (weeks * series + weeks) as f64;
    let group_width = bar_width * 4.0 + GROUP_GAP;

    for (week_index, week_values) in WEEKLY_SERIES.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let group_x = PADDING + week_index as f64 * group_width;

        for (series_index, value) in week_values.iter().enumerate() {
            let bar_height = scaled_bar_height(*value, chart_height);
            #[allow(clippy::cast_precision_loss)]
            let x = group_x + series_index as f64 * bar_width;
            let y = height - PADDING - bar_height;
            surface.fill_rect(
                x,
                y,
                bar_width - BAR_INSET,
                bar_height,
                SERIES_COLORS[series_index],
            );
        }

        let label_x = group_x + bar_width * 2.0;
        surface.fill_text(
            WEEK_LABELS[week_index],
            label_x - 15.0,
            height - 10.0,
            LABEL_COLOR,
        );
    }

    for (series_index, color) in SERIES_COLORS.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let legend_x = PADDING + series_index as f64 * LEGEND_STEP;
        surface.fill_rect(legend_x, LEGEND_Y, LEGEND_SWATCH, LEGEND_SWATCH, *color);
        surface.fill_text(
            &format!("Series {}", series_index + 1),
            legend_x + 16.0,
            LEGEND_Y + 9.0,
            LABEL_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    struct RecordedRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgb,
    }

    #[derive(Default)]
    struct RecordingSurface {
        clears: Vec<(f64, f64)>,
        rects: Vec<RecordedRect>,
        texts: Vec<(String, f64, f64)>,
    }

    impl DrawSurface for RecordingSurface {
        fn clear(&mut self, width: f64, height: f64) {
            self.clears.push((width, height));
        }

        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb) {
            self.rects.push(RecordedRect {
                x,
                y,
                width,
                height,
                color,
            });
        }

        fn fill_text(&mut self, text: &str, x: f64, y: f64, _color: Rgb) {
            self.texts.push((text.to_string(), x, y));
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    fn drawn_at_400x300() -> RecordingSurface {
        let mut surface = RecordingSurface::default();
        draw_performance_chart(&mut surface, 400.0, 300.0);
        surface
    }

    #[test]
    fn chart_emits_sixteen_bars_and_four_swatches() {
        let surface = drawn_at_400x300();
        assert_eq!(surface.clears, vec![(400.0, 300.0)]);
        assert_eq!(surface.rects.len(), 20);

        let swatches = surface
            .rects
            .iter()
            .filter(|r| r.width == LEGEND_SWATCH && r.height == LEGEND_SWATCH)
            .count();
        assert_eq!(swatches, 4);
    }

    #[test]
    fn bars_sit_on_the_baseline_and_fit_the_plot_area() {
        let surface = drawn_at_400x300();
        let chart_height = 300.0 - PADDING * 2.0;
        let baseline = 300.0 - PADDING;

        let bars: Vec<_> = surface
            .rects
            .iter()
            .filter(|r| !(r.width == LEGEND_SWATCH && r.height == LEGEND_SWATCH))
            .collect();
        assert_eq!(bars.len(), 16);

        for bar in bars {
            assert!(bar.height <= chart_height + 1e-9);
            assert_close(bar.y + bar.height, baseline);
        }
    }

    #[test]
    fn bar_colors_follow_the_series_order() {
        let surface = drawn_at_400x300();
        for (index, bar) in surface.rects.iter().take(4).enumerate() {
            assert_eq!(bar.color, SERIES_COLORS[index]);
        }
    }

    #[test]
    fn bar_geometry_matches_the_reference_layout() {
        let surface = drawn_at_400x300();
        // 400 wide: plot area 320, twenty slots of 16, bars inset by 2.
        let first = surface.rects[0];
        assert_close(first.x, PADDING);
        assert_close(first.width, 14.0);
        assert_close(first.height, scaled_bar_height(20, 220.0));

        // Second group starts one group width (4 bars + gap) further right.
        let fifth = surface.rects[4];
        assert_close(fifth.x, PADDING + 16.0 * 4.0 + GROUP_GAP);
    }

    #[test]
    fn axis_maximum_maps_to_full_height() {
        assert_close(scaled_bar_height(60, 220.0), 220.0);
        assert_close(scaled_bar_height(0, 220.0), 0.0);
        assert_close(scaled_bar_height(30, 220.0), 110.0);
    }

    #[test]
    fn week_labels_and_legend_entries_are_both_drawn() {
        let surface = drawn_at_400x300();
        assert_eq!(surface.texts.len(), 8);

        let week_labels = surface
            .texts
            .iter()
            .filter(|(text, _, y)| text.starts_with("Week") && *y == 290.0)
            .count();
        assert_eq!(week_labels, 4);

        let legend_labels = surface
            .texts
            .iter()
            .filter(|(text, _, y)| text.starts_with("Series") && *y == 29.0)
            .count();
        assert_eq!(legend_labels, 4);
    }

    #[test]
    fn undersized_surfaces_are_left_untouched() {
        let mut surface = RecordingSurface::default();
        draw_performance_chart(&mut surface, 60.0, 50.0);

        assert!(surface.clears.is_empty());
        assert!(surface.rects.is_empty());
        assert!(surface.texts.is_empty());
    }
}
