use circle_planner_shared::ids::UuidIds;
use circle_planner_shared::report::Submission;
use circle_planner_shared::{CircleLayout, MarkerId, Material, MoveOutcome, PlacementConfig, Point};
use dioxus::prelude::*;

use crate::components::canvas::{Canvas, DragState, CANVAS_ID};
use crate::components::confetti_modal::ConfettiModal;
use crate::components::controls::Controls;
use crate::components::material_selector::MaterialSelector;
use crate::coords;

#[component]
pub fn Picker() -> Element {
    // Circle positions are container pixels, top-left origin
    let mut layout = use_signal(|| CircleLayout::new(PlacementConfig::default()));
    let material = use_signal(Material::default);
    let dragged = use_signal(|| None::<DragState>);
    let mut show_confetti = use_signal(|| false);

    let on_add = move |position: Option<Point>| {
        // The canvas is re-measured on every request so resizes are honoured
        let Some(rect) = coords::measure(CANVAS_ID) else {
            tracing::warn!("canvas not measured yet, ignoring add");
            return;
        };
        let mut rng = rand::thread_rng();
        match layout.write().request_add(rect.container, position, &mut UuidIds, &mut rng) {
            Ok(placed) if placed.source.is_degraded() => {
                tracing::warn!(id = %placed.marker.id(), "no free spot, circle placed on center");
            }
            Ok(_) => {}
            Err(refusal) => tracing::info!("circle not added: {refusal}"),
        }
    };

    let on_move = move |(id, to): (MarkerId, Point)| {
        let Some(rect) = coords::measure(CANVAS_ID) else { return };
        if layout.write().request_move(rect.container, &id, to) == MoveOutcome::UnknownMarker {
            tracing::debug!(%id, "move for unknown circle");
        }
    };

    let on_delete = move |id: MarkerId| {
        layout.write().request_delete(&id);
    };

    let on_submit = move |_: Event<MouseData>| {
        let Some(rect) = coords::measure(CANVAS_ID) else {
            tracing::warn!("canvas not measured yet, skipping submit");
            return;
        };
        let submission = Submission::new(*material.read(), &layout.read(), rect.container);
        tracing::info!("{}", submission.report());
        match serde_json::to_string(&submission) {
            Ok(json) => tracing::debug!(payload = %json, "submission payload"),
            Err(e) => tracing::error!("failed to serialize submission: {e}"),
        }
        show_confetti.set(true);
    };

    rsx! {
        div { class: "app",
            Canvas {
                material: material,
                layout: layout,
                dragged: dragged,
            }

            div { class: "sidebar",
                Controls {
                    layout: layout,
                    dragged: dragged,
                    on_add: on_add,
                    on_move: on_move,
                    on_delete: on_delete,
                }

                MaterialSelector { selected: material }

                button {
                    class: "submit",
                    onclick: on_submit,
                    "Submit"
                }

                ConfettiModal { show: show_confetti }
            }
        }
    }
}
