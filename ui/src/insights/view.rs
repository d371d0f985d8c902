use dioxus::prelude::*;

use crate::core::{format, platform};
use crate::predict::HttpBackend;

use super::charts::{BarChartSpec, ChartLayout, PAD_LEFT, PAD_RIGHT, PAD_TOP, Y_AXIS_TITLE};

const CHART_WIDTH: f64 = 480.0;
const CHART_HEIGHT: f64 = 320.0;

/// Loads insights once on mount and renders whatever charts arrive.
#[component]
pub fn EmissionInsightsView() -> Element {
    let mut charts = use_signal(Vec::<BarChartSpec>::new);

    use_future(move || async move {
        let backend = HttpBackend::from_config();
        match super::load_insights(&backend).await {
            Ok(specs) => charts.set(specs),
            Err(err) => {
                tracing::error!(%err, "Error loading emission insights");
                platform::alert(&err.alert_message("load emission insights charts"));
            }
        }
    });

    rsx! {
        div { class: "insights",
            h2 { "Emission insights" }
            p { class: "insights__lede",
                "How fuel type, transmission and engine size shape CO₂ output across the fleet."
            }
            div { class: "insights__grid",
                for spec in charts() {
                    BarChart { key: "{spec.mount_id}", spec: spec.clone() }
                }
            }
        }
    }
}

/// Vertical bar chart with a zero-based y axis and rotated category labels.
#[component]
pub fn BarChart(spec: BarChartSpec) -> Element {
    let layout = ChartLayout::compute(&spec, CHART_WIDTH, CHART_HEIGHT);
    let theme = spec.theme;
    let baseline = layout.baseline();
    let right = layout.width - PAD_RIGHT;
    let axis_mid = (PAD_TOP + baseline) / 2.0;
    let view_box = format!("0 0 {} {}", layout.width, layout.height);

    let ticks = layout.ticks.iter().map(|tick| {
        let y = layout.tick_y(*tick);
        let label = format::format_plain(*tick);
        let tick_label_x = PAD_LEFT - 6.0;
        let tick_label_y = y + 4.0;
        rsx! {
            g { key: "{tick}",
                line {
                    x1: "{PAD_LEFT}",
                    x2: "{right}",
                    y1: "{y}",
                    y2: "{y}",
                    stroke: theme.grid_color,
                }
                text {
                    x: "{tick_label_x}",
                    y: "{tick_label_y}",
                    fill: theme.tick_color,
                    font_size: "11",
                    text_anchor: "end",
                    "{label}"
                }
            }
        }
    });

    let bars = spec.bars.iter().zip(layout.bars.iter()).enumerate().map(|(i, (bar, rect))| {
        let label_x = rect.x + rect.width / 2.0;
        let label_y = baseline + 12.0;
        let border_width = theme.border_width;
        let rotate = format!("rotate({} {label_x} {label_y})", theme.label_rotation);
        let tooltip = bar.tooltip(spec.dataset_label);
        let tip = layout.tooltip_box(i, &tooltip);
        let tip_text = tip.map(|tip| (tip.x + tip.width / 2.0, tip.y + 15.0));
        rsx! {
            g { key: "{i}", class: "insights-chart__bar",
                rect {
                    x: "{rect.x}",
                    y: "{rect.y}",
                    width: "{rect.width}",
                    height: "{rect.height}",
                    fill: theme.bar_fill,
                    stroke: theme.bar_border,
                    stroke_width: "{border_width}",
                }
                if let Some((top, bottom)) = rect.whisker {
                    line {
                        class: "insights-chart__whisker",
                        x1: "{label_x}",
                        x2: "{label_x}",
                        y1: "{top}",
                        y2: "{bottom}",
                        stroke: theme.bar_border,
                    }
                }
                if let (Some(tip), Some((text_x, text_y))) = (tip, tip_text) {
                    g { class: "insights-chart__tooltip",
                        rect {
                            x: "{tip.x}",
                            y: "{tip.y}",
                            width: "{tip.width}",
                            height: "{tip.height}",
                            rx: "4",
                            fill: theme.tooltip_background,
                        }
                        text {
                            x: "{text_x}",
                            y: "{text_y}",
                            fill: theme.tooltip_text,
                            font_size: "11",
                            text_anchor: "middle",
                            "{tooltip}"
                        }
                    }
                }
                text {
                    x: "{label_x}",
                    y: "{label_y}",
                    transform: "{rotate}",
                    fill: theme.tick_color,
                    font_size: "11",
                    text_anchor: "start",
                    "{bar.label}"
                }
            }
        }
    });

    rsx! {
        figure { id: "{spec.mount_id}", class: "insights-chart",
            figcaption { class: "insights-chart__title", "{spec.title}" }
            svg {
                class: "insights-chart__plot",
                view_box: "{view_box}",
                role: "img",
                "aria-label": "{spec.dataset_label}",
                {ticks}
                line {
                    x1: "{PAD_LEFT}",
                    x2: "{right}",
                    y1: "{baseline}",
                    y2: "{baseline}",
                    stroke: theme.tick_color,
                }
                {bars}
                text {
                    transform: "translate(14 {axis_mid}) rotate(-90)",
                    fill: theme.axis_title_color,
                    font_size: "12",
                    text_anchor: "middle",
                    "{Y_AXIS_TITLE}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::charts::{Bar, THEME};

    #[test]
    fn bars_render_with_styled_tooltips() {
        let spec = BarChartSpec {
            mount_id: "fuelEmissionsChart",
            title: "CO₂ by fuel type",
            dataset_label: "Avg CO₂ Emissions",
            bars: vec![Bar {
                label: "X".into(),
                value: 230.5,
                range: None,
            }],
            theme: THEME,
        };

        let html = dioxus_ssr::render_element(rsx! { BarChart { spec } });

        assert!(html.contains("id=\"fuelEmissionsChart\""));
        assert!(html.contains("insights-chart__tooltip"));
        assert!(html.contains(&format!("fill=\"{}\"", THEME.tooltip_background)));
        assert!(html.contains(&format!("fill=\"{}\"", THEME.tooltip_text)));
        assert!(html.contains("Avg CO₂ Emissions: 230.5"));
    }
}
