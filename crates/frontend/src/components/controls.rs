use circle_planner_shared::{CircleLayout, MarkerId, Point};
use dioxus::prelude::*;

use crate::components::canvas::{DragState, CANVAS_ID};
use crate::components::circles_list::CirclesList;
use crate::coords;

#[component]
pub fn Controls(
    layout: Signal<CircleLayout>,
    dragged: Signal<Option<DragState>>,
    on_add: EventHandler<Option<Point>>,
    on_move: EventHandler<(MarkerId, Point)>,
    on_delete: EventHandler<MarkerId>,
) -> Element {
    let mut x_input = use_signal(String::new);
    let mut y_input = use_signal(String::new);

    // Clear the form whenever the number of circles changes
    let circle_count = use_memo(move || layout.read().len());
    use_effect(move || {
        let _count = *circle_count.read();
        x_input.set(String::new());
        y_input.set(String::new());
    });

    let count = *circle_count.read();
    let full = layout.read().is_full();
    let max = layout.read().config().max_markers;
    let padding = layout.read().config().padding;
    let rect = coords::measure(CANVAS_ID);
    let max_x = rect.map(|r| r.container.width() - padding).unwrap_or(0.0);
    let max_y = rect.map(|r| r.container.height() - padding).unwrap_or(0.0);

    rsx! {
        div { class: "controls",
            if count == 0 {
                div { class: "section-title",
                    span { "Circles." }
                    span { class: "subtle", "How many circles do you need to have on your wall?" }
                }
                div { class: "xy-inputs",
                    label {
                        span { class: "caption", "X (px)" }
                        input {
                            r#type: "number",
                            min: "{padding}",
                            max: "{max_x}",
                            value: "{x_input}",
                            oninput: move |evt: Event<FormData>| {
                                x_input.set(coords::digits_only(&evt.value()));
                            },
                        }
                    }
                    label {
                        span { class: "caption", "Y (px)" }
                        input {
                            r#type: "number",
                            min: "{padding}",
                            max: "{max_y}",
                            value: "{y_input}",
                            oninput: move |evt: Event<FormData>| {
                                y_input.set(coords::digits_only(&evt.value()));
                            },
                        }
                    }
                }
                button {
                    class: "primary",
                    onclick: move |_| {
                        let Some(rect) = coords::measure(CANVAS_ID) else { return };
                        let at = coords::typed_position(
                            &x_input.read(),
                            &y_input.read(),
                            rect.container,
                            padding,
                        );
                        on_add.call(Some(at));
                    },
                    "Add Circle"
                }
            } else {
                CirclesList {
                    layout: layout,
                    dragged: dragged,
                    on_move: on_move,
                    on_delete: on_delete,
                }
                button {
                    class: "primary",
                    disabled: full,
                    onclick: move |_| on_add.call(None),
                    "Add New Circle"
                }
                if full {
                    div { class: "limit-note", "Maximum of {max} circles allowed." }
                }
            }
        }
    }
}
