use dioxus::prelude::*;

use super::board::SlotBoard;
use super::ring::CIRCUMFERENCE;

/// Circular progress bound to a ring slot.
///
/// The fill circle is keyed by the slot's replay epoch: every write remounts it
/// and the `ring-fill` keyframes run from the empty ring to the new offset.
#[component]
pub fn RingGauge(
    board: Signal<SlotBoard>,
    slot: &'static str,
    #[props(default = "gauge-ring")] class: &'static str,
    children: Element,
) -> Element {
    let Some(ring) = board.read().ring(slot) else {
        return rsx! {};
    };
    let replay = ring.replay.to_string();

    rsx! {
        div { class: "{class}",
            svg { class: "gauge-ring__svg", view_box: "0 0 120 120",
                circle { class: "gauge-ring__track", cx: "60", cy: "60", r: "50" }
                circle {
                    key: "{replay}",
                    id: "{slot}",
                    class: "gauge-ring__fill",
                    cx: "60",
                    cy: "60",
                    r: "50",
                    stroke_dasharray: "{CIRCUMFERENCE}",
                    stroke_dashoffset: "{ring.offset}",
                    style: "--ring-empty: {CIRCUMFERENCE}",
                }
            }
            div { class: "gauge-ring__center", {children} }
        }
    }
}

/// Numeric readout written frame by frame by an animation run.
#[component]
pub fn AnimatedReadout(board: Signal<SlotBoard>, slot: &'static str) -> Element {
    let text = board.read().text(slot).map(str::to_string);
    match text {
        Some(text) => rsx! {
            span { id: "{slot}", class: "gauge-readout", "{text}" }
        },
        None => rsx! {},
    }
}

/// Plain text readout. Replaying slots fade in again after every write.
#[component]
pub fn TextReadout(board: Signal<SlotBoard>, slot: &'static str) -> Element {
    let (text, replay) = {
        let snapshot = board.read();
        (
            snapshot.text(slot).map(str::to_string),
            snapshot.text_replay(slot),
        )
    };
    let Some(text) = text else {
        return rsx! {};
    };

    match replay {
        Some(epoch) if epoch.value() > 0 => rsx! {
            span {
                key: "{epoch}",
                id: "{slot}",
                class: "slot-text slot-text--replay",
                "{text}"
            }
        },
        _ => rsx! {
            span { id: "{slot}", class: "slot-text", "{text}" }
        },
    }
}
