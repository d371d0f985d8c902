use dioxus::prelude::*;

use crate::core::error::{MAX_MODEL_YEAR, MIN_MODEL_YEAR};
use crate::core::timing::DisplayClock;
use crate::core::{config, platform};
use crate::gauges::{
    AnimatedReadout, RenderPipeline, RingGauge, SlotBoard, SlotRegistry, TextReadout,
};

use super::backend::HttpBackend;
use super::catalog::{self, FUEL_TYPES, MAKES, TRANSMISSIONS};
use super::controller::{reset_prediction, submit_prediction, SubmitOutcome};
use super::form::VehicleForm;
use super::result::MetricResult;

#[component]
pub fn PredictorView() -> Element {
    let pipeline = use_hook(|| {
        RenderPipeline::new(SlotRegistry::standard(), config::get().animation_ms)
    });
    let backend = use_hook(HttpBackend::from_config);

    let mut form = use_signal(VehicleForm::default);
    let mut year_error = use_signal(|| Option::<String>::None);
    let loading = use_signal(|| false);
    let board = use_signal(|| {
        let mut board = SlotBoard::mount(pipeline.registry());
        pipeline.seed(&MetricResult::defaults(), &mut board);
        board
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        year_error.set(None);
        let snapshot = form();
        let backend = backend.clone();
        spawn(async move {
            match submit_prediction(&snapshot, &backend, loading).await {
                SubmitOutcome::Rejected(err) => year_error.set(Some(err.to_string())),
                SubmitOutcome::Failed(err) => {
                    platform::alert(&err.alert_message("update predictions"));
                }
                SubmitOutcome::Received(result) => render_cycle(pipeline, board, &result),
            }
        });
    };

    let on_reset = move |_| {
        let defaults = form.with_mut(reset_prediction);
        render_cycle(pipeline, board, &defaults);
    };

    let snapshot = form();
    let first_year = catalog::model_years().next().unwrap_or_default();
    let last_year = catalog::model_years().next_back().unwrap_or_default();
    let loading_style = if loading() {
        "display: block"
    } else {
        "display: none"
    };

    rsx! {
        article { class: "predictor",
            // Year bounds are checked in `submit_prediction` so the inline message can show.
            form {
                id: "predict-form",
                class: "predictor__form",
                novalidate: true,
                onsubmit: on_submit,
                div { class: "predictor__field",
                    label { r#for: "vehicle_year", "Model year" }
                    input {
                        id: "vehicle_year",
                        name: "vehicle_year",
                        r#type: "number",
                        min: "{MIN_MODEL_YEAR}",
                        max: "{MAX_MODEL_YEAR}",
                        value: "{snapshot.vehicle_year}",
                        oninput: move |evt| form.with_mut(|f| f.vehicle_year = evt.value()),
                    }
                    span { id: "vehicle-year-error", class: "error-message",
                        {year_error().unwrap_or_default()}
                    }
                }
                div { class: "predictor__field",
                    label { r#for: "make", "Manufacturer" }
                    select {
                        id: "make",
                        name: "make",
                        value: "{snapshot.make}",
                        oninput: move |evt| form.with_mut(|f| f.make = evt.value()),
                        for make in MAKES.iter() {
                            option { key: "{make}", value: "{make}", selected: *make == snapshot.make, "{make}" }
                        }
                    }
                }
                div { class: "predictor__field",
                    label { r#for: "transmission", "Transmission" }
                    select {
                        id: "transmission",
                        name: "transmission",
                        value: "{snapshot.transmission}",
                        oninput: move |evt| form.with_mut(|f| f.transmission = evt.value()),
                        for transmission in TRANSMISSIONS.iter() {
                            option {
                                key: "{transmission}",
                                value: "{transmission}",
                                selected: *transmission == snapshot.transmission,
                                "{transmission}"
                            }
                        }
                    }
                }
                div { class: "predictor__field",
                    label { r#for: "fuel_type", "Fuel type" }
                    select {
                        id: "fuel_type",
                        name: "fuel_type",
                        value: "{snapshot.fuel_type}",
                        oninput: move |evt| form.with_mut(|f| f.fuel_type = evt.value()),
                        for (code, label) in FUEL_TYPES.iter() {
                            option {
                                key: "{code}",
                                value: "{code}",
                                selected: *code == snapshot.fuel_type,
                                "{code} · {label}"
                            }
                        }
                    }
                }
                p { class: "predictor__hint", "Models cover {first_year}–{last_year}." }
                div { class: "predictor__actions",
                    button { r#type: "submit", class: "button button--primary", "Predict" }
                    button {
                        id: "reset-form",
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: on_reset,
                        "Reset"
                    }
                }
                div { id: "loading-indicator", class: "loading-indicator", style: "{loading_style}",
                    span { class: "loading-indicator__spinner" }
                    "Crunching numbers…"
                }
            }

            section { class: "predictor__panel predictor__panel--fuel",
                h3 { "Fuel consumption" }
                div { class: "gauge-grid",
                    div { class: "gauge",
                        RingGauge { board, slot: "combined-ring",
                            AnimatedReadout { board, slot: "combined-fuel" }
                        }
                        span { class: "gauge__label", "Combined · L/100 km" }
                    }
                    div { class: "gauge",
                        RingGauge { board, slot: "city-ring",
                            AnimatedReadout { board, slot: "city-fuel" }
                        }
                        span { class: "gauge__label", "City · L/100 km" }
                    }
                    div { class: "gauge",
                        RingGauge { board, slot: "highway-ring",
                            AnimatedReadout { board, slot: "highway-fuel" }
                        }
                        span { class: "gauge__label", "Highway · L/100 km" }
                    }
                    div { class: "gauge",
                        RingGauge { board, slot: "mpg-ring",
                            AnimatedReadout { board, slot: "combined-mpg" }
                        }
                        span { class: "gauge__label", "Combined · MPG" }
                    }
                }
                p { class: "predictor__cost",
                    "Estimated annual fuel cost: $"
                    AnimatedReadout { board, slot: "annual-fuel-cost" }
                }
            }

            section { class: "predictor__panel predictor__panel--emissions",
                h3 { "Emissions" }
                div { class: "gauge-grid",
                    div { class: "gauge",
                        RingGauge { board, slot: "co2-bar", class: "gauge-ring gauge-ring--alert",
                            TextReadout { board, slot: "co2-value" }
                        }
                        span { class: "gauge__label", "CO₂ emissions" }
                    }
                    div { class: "gauge",
                        RingGauge { board, slot: "co2-rating-bar",
                            TextReadout { board, slot: "co2-rating-value" }
                        }
                        span { class: "gauge__label", "CO₂ rating" }
                    }
                    div { class: "gauge",
                        RingGauge { board, slot: "smog-bar",
                            TextReadout { board, slot: "smog-value" }
                        }
                        span { class: "gauge__label", "Smog rating" }
                    }
                    div { class: "gauge",
                        RingGauge { board, slot: "eco-score-bar",
                            TextReadout { board, slot: "eco-score-value" }
                        }
                        span { class: "gauge__label", "Eco score" }
                    }
                }
            }

            section { class: "predictor__panel predictor__panel--derived",
                h3 { "Cost of ownership" }
                dl { class: "derived-figures",
                    dt { "Annual CO₂ tax ($)" }
                    dd { TextReadout { board, slot: "co2-tax" } }
                    dt { "Fuel efficiency score" }
                    dd { TextReadout { board, slot: "fuel-efficiency-score" } }
                    dt { "Cost per passenger-km (¢)" }
                    dd { TextReadout { board, slot: "cost-per-passenger-km" } }
                }
            }
        }
    }
}

/// Run one render cycle on the board and start its animations independently.
fn render_cycle(pipeline: RenderPipeline, mut board: Signal<SlotBoard>, result: &MetricResult) {
    let cycle = board.with_mut(|b| pipeline.render(result, b));
    if !cycle.skipped.is_empty() {
        tracing::warn!(skipped = ?cycle.skipped_keys(), "render cycle skipped slots");
    }
    for run in cycle.runs {
        platform::spawn_future(async move {
            run.drive(board, DisplayClock).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_page() -> String {
        dioxus_ssr::render_element(rsx! { PredictorView {} })
    }

    fn opening_tag<'a>(html: &'a str, id: &str) -> &'a str {
        let marker = format!("id=\"{id}\"");
        let at = html.find(&marker).unwrap();
        let start = html[..at].rfind('<').unwrap();
        let end = at + html[at..].find('>').unwrap();
        &html[start..=end]
    }

    #[test]
    fn out_of_range_years_reach_the_submit_handler() {
        let html = render_page();
        let form = opening_tag(&html, "predict-form");
        assert!(form.starts_with("<form"));
        assert!(form.contains("novalidate"), "{form}");
        assert!(html.contains("id=\"vehicle-year-error\""));
    }

    #[test]
    fn page_renders_seeded_defaults() {
        let html = render_page();
        assert!(html.contains("id=\"combined-fuel\""));
        assert!(html.contains(">9.0<"), "combined fuel seeded");
        assert!(html.contains("display: none"), "loading indicator hidden");
    }
}
