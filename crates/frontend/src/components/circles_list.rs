use circle_planner_shared::transform::flip_y;
use circle_planner_shared::{CircleLayout, MarkerId, Point};
use dioxus::prelude::*;

use crate::components::canvas::{DragState, CANVAS_ID};
use crate::coords;

/// One editable row: (number, id, position, x shown, y shown from the bottom).
fn rows(layout: &CircleLayout, height: Option<f64>) -> Vec<(usize, MarkerId, Point, f64, f64)> {
    layout
        .markers()
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let shown_y = height.map(|h| flip_y(m.y, h).round()).unwrap_or(0.0);
            (i + 1, m.id().clone(), m.position(), m.x.round(), shown_y)
        })
        .collect()
}

#[component]
pub fn CirclesList(
    layout: Signal<CircleLayout>,
    dragged: Signal<Option<DragState>>,
    on_move: EventHandler<(MarkerId, Point)>,
    on_delete: EventHandler<MarkerId>,
) -> Element {
    let padding = layout.read().config().padding;
    let rect = coords::measure(CANVAS_ID);
    let container = rect.map(|r| r.container);
    let width = container.map(|c| c.width());
    let height = container.map(|c| c.height());
    let max_x = width.unwrap_or(0.0) - padding;
    let max_y = height.unwrap_or(0.0) - padding;
    let active = dragged.read().as_ref().map(|d| d.id.clone());
    let entries = rows(&layout.read(), height);

    rsx! {
        div { class: "circles-list",
            div { class: "section-title",
                span { "Circles." }
                span { class: "subtle", "You can easily update all of your circles here." }
            }
            if entries.is_empty() {
                div { class: "caption", "No circles added." }
            }
            for (number, id, pos, shown_x, shown_y) in entries {
                div {
                    key: "{id}",
                    class: if active.as_ref() == Some(&id) { "circle-row active" } else { "circle-row" },
                    span { class: "circle-badge", "Circle {number}" }
                    label { class: "caption",
                        "X:"
                        input {
                            r#type: "number",
                            min: "{padding}",
                            max: "{max_x}",
                            value: "{shown_x}",
                            oninput: {
                                let id = id.clone();
                                move |evt: Event<FormData>| {
                                    let (Some(v), Some(w)) = (coords::parse_px(&evt.value()), width) else {
                                        return;
                                    };
                                    let x = coords::clamp_input(v, w, padding);
                                    on_move.call((id.clone(), Point::new(x, pos.y)));
                                }
                            },
                        }
                    }
                    label { class: "caption",
                        "Y:"
                        input {
                            r#type: "number",
                            min: "{padding}",
                            max: "{max_y}",
                            value: "{shown_y}",
                            oninput: {
                                let id = id.clone();
                                move |evt: Event<FormData>| {
                                    let (Some(v), Some(c)) = (coords::parse_px(&evt.value()), container) else {
                                        return;
                                    };
                                    on_move.call((id.clone(), coords::typed_y_position(pos, v, c, padding)));
                                }
                            },
                        }
                    }
                    button {
                        class: "delete",
                        "aria-label": "Delete circle",
                        onclick: {
                            let id = id.clone();
                            move |_| on_delete.call(id.clone())
                        },
                        "\u{2715}"
                    }
                }
            }
        }
    }
}
