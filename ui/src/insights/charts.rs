//! Shape adaptation from insight collections to bar charts, plus the layout
//! math the SVG renderer needs.

use crate::core::format;

use super::payload::EmissionInsights;

/// Visual theme shared by every insights chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartTheme {
    pub bar_fill: &'static str,
    pub bar_border: &'static str,
    pub border_width: f64,
    pub tick_color: &'static str,
    pub grid_color: &'static str,
    pub axis_title_color: &'static str,
    pub tooltip_background: &'static str,
    pub tooltip_text: &'static str,
    /// Rotation applied to category labels, in degrees.
    pub label_rotation: f64,
}

pub const THEME: ChartTheme = ChartTheme {
    bar_fill: "#FF3B30",
    bar_border: "#D32F2F",
    border_width: 1.0,
    tick_color: "#6E6E73",
    grid_color: "rgba(0, 0, 0, 0.05)",
    axis_title_color: "#1D1D1F",
    tooltip_background: "#FF3B30",
    tooltip_text: "#FFFFFF",
    label_rotation: 45.0,
};

pub const Y_AXIS_TITLE: &str = "g/km";

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Spread drawn as a whisker, when the source provides one.
    pub range: Option<(f64, f64)>,
}

impl Bar {
    /// Hover text: dataset label, value and, when present, the spread.
    pub fn tooltip(&self, dataset_label: &str) -> String {
        let value = format::format_fixed(self.value, 1);
        match self.range {
            Some((lo, hi)) => format!(
                "{dataset_label}: {value} (min {}, max {})",
                format::format_fixed(lo, 1),
                format::format_fixed(hi, 1)
            ),
            None => format!("{dataset_label}: {value}"),
        }
    }

    fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            range: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartSpec {
    /// Element id of the chart mount.
    pub mount_id: &'static str,
    pub title: &'static str,
    pub dataset_label: &'static str,
    pub bars: Vec<Bar>,
    pub theme: ChartTheme,
}

impl EmissionInsights {
    /// The four charts in page order.
    pub fn charts(&self) -> [BarChartSpec; 4] {
        let fuel = self
            .fuel_emissions
            .iter()
            .map(|item| Bar::new(item.fuel_type.as_str(), item.avg_co2))
            .collect();

        let transmission = self
            .transmission_emissions
            .iter()
            .map(|item| Bar::new(item.transmission.as_str(), item.avg_co2))
            .collect();

        let engine = self
            .engine_emissions
            .iter()
            .map(|item| Bar {
                label: format::format_plain(item.engine_size),
                value: item.mean_co2,
                range: item.min_co2.zip(item.max_co2),
            })
            .collect();

        let combinations = self
            .top_5_combinations
            .iter()
            .map(|item| {
                Bar::new(
                    format!(
                        "{}L, {} cyl, {}, {}",
                        format::format_plain(item.engine_size),
                        item.cylinders,
                        item.transmission,
                        item.fuel_type
                    ),
                    item.co2_emissions,
                )
            })
            .collect();

        [
            chart("fuelEmissionsChart", "CO₂ by fuel type", "Avg CO₂ Emissions", fuel),
            chart(
                "transmissionEmissionsChart",
                "CO₂ by transmission",
                "Avg CO₂ Emissions",
                transmission,
            ),
            chart(
                "engineEmissionsChart",
                "CO₂ by engine size (L)",
                "Mean CO₂ Emissions",
                engine,
            ),
            chart(
                "topCombinationsChart",
                "Lowest-emitting combinations",
                "CO₂ Emissions",
                combinations,
            ),
        ]
    }
}

fn chart(
    mount_id: &'static str,
    title: &'static str,
    dataset_label: &'static str,
    bars: Vec<Bar>,
) -> BarChartSpec {
    BarChartSpec {
        mount_id,
        title,
        dataset_label,
        bars,
        theme: THEME,
    }
}

/// Plot area padding inside the SVG viewport.
pub const PAD_LEFT: f64 = 48.0;
pub const PAD_RIGHT: f64 = 12.0;
pub const PAD_TOP: f64 = 12.0;
pub const PAD_BOTTOM: f64 = 96.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Whisker end points in viewport y, top first.
    pub whisker: Option<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    /// Upper bound of the y axis. The axis always begins at zero.
    pub y_max: f64,
    /// Tick values from zero to `y_max`.
    pub ticks: Vec<f64>,
    pub bars: Vec<BarRect>,
}

impl ChartLayout {
    pub fn compute(spec: &BarChartSpec, width: f64, height: f64) -> Self {
        let plot_w = (width - PAD_LEFT - PAD_RIGHT).max(1.0);
        let plot_h = (height - PAD_TOP - PAD_BOTTOM).max(1.0);

        let data_max = spec
            .bars
            .iter()
            .flat_map(|bar| std::iter::once(bar.value).chain(bar.range.map(|(_, hi)| hi)))
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        let (y_max, step) = nice_axis(data_max);
        let ticks = (0..)
            .map(|i| i as f64 * step)
            .take_while(|t| *t <= y_max + step * 1e-9)
            .collect();

        let baseline = PAD_TOP + plot_h;
        let to_y = |v: f64| baseline - (v.max(0.0) / y_max) * plot_h;

        let slot = plot_w / spec.bars.len().max(1) as f64;
        let bar_w = slot * 0.7;
        let bars = spec
            .bars
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                let top = to_y(if bar.value.is_finite() { bar.value } else { 0.0 });
                BarRect {
                    x: PAD_LEFT + slot * i as f64 + (slot - bar_w) / 2.0,
                    y: top,
                    width: bar_w,
                    height: baseline - top,
                    whisker: bar.range.map(|(lo, hi)| (to_y(hi), to_y(lo))),
                }
            })
            .collect();

        Self {
            width,
            height,
            y_max,
            ticks,
            bars,
        }
    }

    pub fn baseline(&self) -> f64 {
        self.height - PAD_BOTTOM
    }

    pub fn tick_y(&self, tick: f64) -> f64 {
        let plot_h = (self.height - PAD_TOP - PAD_BOTTOM).max(1.0);
        self.baseline() - (tick / self.y_max) * plot_h
    }
}

pub const TOOLTIP_HEIGHT: f64 = 22.0;
const TOOLTIP_CHAR_WIDTH: f64 = 6.2;
const TOOLTIP_PADDING: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartLayout {
    /// Box for `text` above bar `index` (and its whisker), kept inside the viewport.
    pub fn tooltip_box(&self, index: usize, text: &str) -> Option<TooltipBox> {
        let rect = self.bars.get(index)?;
        let width = text.chars().count() as f64 * TOOLTIP_CHAR_WIDTH + TOOLTIP_PADDING;
        let center = rect.x + rect.width / 2.0;
        let x = (center - width / 2.0).clamp(0.0, (self.width - width).max(0.0));
        let top = rect.whisker.map_or(rect.y, |(whisker_top, _)| whisker_top.min(rect.y));
        let y = (top - TOOLTIP_HEIGHT - 4.0).max(0.0);
        Some(TooltipBox {
            x,
            y,
            width,
            height: TOOLTIP_HEIGHT,
        })
    }
}

/// Round `max` up to a 1/2/5 × 10ⁿ step with about five ticks.
fn nice_axis(max: f64) -> (f64, f64) {
    if max <= 0.0 {
        return (1.0, 0.2);
    }
    let raw_step = max / 5.0;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw_step)
        .unwrap_or(10.0 * magnitude);
    ((max / step).ceil() * step, step)
}
