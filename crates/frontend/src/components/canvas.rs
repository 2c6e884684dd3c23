use circle_planner_shared::{CircleLayout, Container, MarkerId, Material, Point};
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;

use crate::coords::{self, Swipe};

pub const CANVAS_ID: &str = "circle-canvas";

/// Circle being dragged and where the pointer grabbed it.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub id: MarkerId,
    pub offset: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Rect {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

// ---------------------------------------------------------------------------
// Drag overlay (pure functions, easily testable)
// ---------------------------------------------------------------------------

/// The four strips outside `[padding, dim - padding]`: top, bottom, left, right.
fn forbidden_regions(c: Container, padding: f64) -> [Rect; 4] {
    let (w, h) = (c.width(), c.height());
    let inner_h = (h - 2.0 * padding).max(0.0);
    [
        Rect { x: 0.0, y: 0.0, w, h: padding },
        Rect { x: 0.0, y: h - padding, w, h: padding },
        Rect { x: 0.0, y: padding, w: padding, h: inner_h },
        Rect { x: w - padding, y: padding, w: padding, h: inner_h },
    ]
}

fn build_forbidden_areas(svg: &mut String, c: Container, padding: f64) {
    for r in forbidden_regions(c, padding) {
        svg.push_str(&format!(
            r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#fff" fill-opacity="0.32"/>"##,
            r.x, r.y, r.w, r.h
        ));
    }
}

/// Arrows from the dragged circle to the left and bottom edges, labelled with
/// the distances the circle list shows.
fn build_dimension_arrows(svg: &mut String, c: Container, at: Point) {
    let h = c.height();
    let (x, y) = (at.x, at.y);
    svg.push_str(
        r##"<defs><marker id="arrowhead" markerWidth="8" markerHeight="8" refX="6" refY="4" orient="auto" markerUnits="strokeWidth"><path d="M0,0 L8,4 L0,8" fill="none" stroke="#fff" stroke-width="2.5"/></marker></defs>"##,
    );
    svg.push_str(&format!(
        r##"<line x1="{x}" y1="{y}" x2="0" y2="{y}" stroke="#fff" stroke-width="2.5" marker-end="url(#arrowhead)"/>"##
    ));
    svg.push_str(&format!(
        r##"<line x1="{x}" y1="{y}" x2="{x}" y2="{h}" stroke="#fff" stroke-width="2.5" marker-end="url(#arrowhead)"/>"##
    ));
    let left_label = x.round();
    let bottom_label = (h - y).round();
    svg.push_str(&format!(
        r##"<text x="{}" y="{}" fill="#fff" font-size="15" font-weight="bold" text-anchor="middle">{left_label} px</text>"##,
        x / 2.0,
        y - 12.0
    ));
    svg.push_str(&format!(
        r##"<text x="{}" y="{}" fill="#fff" font-size="15" font-weight="bold" text-anchor="start" dominant-baseline="middle">{bottom_label} px</text>"##,
        x + 12.0,
        y + (h - y) / 2.0
    ));
}

/// Overlay shown while a circle is dragged. Empty when nothing is dragged.
fn build_drag_overlay(c: Container, padding: f64, dragged: Option<Point>) -> String {
    let Some(at) = dragged else {
        return String::new();
    };
    let mut svg = String::with_capacity(2048);
    build_forbidden_areas(&mut svg, c, padding);
    build_dimension_arrows(&mut svg, c, at);
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" style="position:absolute;top:0;left:0;pointer-events:none;z-index:99;">{svg}</svg>"#,
        w = c.width(),
        h = c.height(),
    )
}

/// Inline style placing a circle of radius `r` centered on `p`.
fn circle_style(p: Point, r: f64, dragging: bool) -> String {
    let cursor = if dragging { "grabbing" } else { "grab" };
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;cursor:{cursor};",
        p.x - r,
        p.y - r,
        r * 2.0,
        r * 2.0
    )
}

/// Start dragging `id`, remembering where on the circle the pointer landed.
fn begin_drag(
    mut dragged: Signal<Option<DragState>>,
    id: MarkerId,
    center: Point,
    client_x: f64,
    client_y: f64,
) {
    let Some(rect) = coords::measure(CANVAS_ID) else { return };
    let pointer = coords::client_to_container(client_x, client_y, rect.left, rect.top);
    dragged.set(Some(DragState {
        id,
        offset: coords::drag_offset(pointer, center),
    }));
}

/// Move the dragged circle after the pointer. Returns false when no drag is active.
fn follow_drag(
    mut layout: Signal<CircleLayout>,
    dragged: Signal<Option<DragState>>,
    client_x: f64,
    client_y: f64,
) -> bool {
    let Some(d) = dragged.read().clone() else { return false };
    let Some(rect) = coords::measure(CANVAS_ID) else { return true };
    let pointer = coords::client_to_container(client_x, client_y, rect.left, rect.top);
    let to = coords::apply_drag_offset(pointer, d.offset);
    layout.write().request_move(rect.container, &d.id, to);
    true
}

#[component]
pub fn Canvas(
    material: Signal<Material>,
    layout: Signal<CircleLayout>,
    dragged: Signal<Option<DragState>>,
) -> Element {
    // Horizontal touch start and latest position on the material strip
    let mut swipe_start = use_signal(|| None::<f64>);
    let mut swipe_last = use_signal(|| 0.0_f64);

    let current = *material.read();
    let cfg = *layout.read().config();
    let drag = dragged.read().clone();
    // (label, id, center, being dragged)
    let circles: Vec<(usize, MarkerId, Point, bool)> = layout
        .read()
        .markers()
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let active = drag.as_ref().is_some_and(|d| &d.id == m.id());
            (i + 1, m.id().clone(), m.position(), active)
        })
        .collect();
    let slides: Vec<(String, String)> = Material::ALL
        .iter()
        .map(|m| (m.to_string(), m.image_path()))
        .collect();

    let dragged_pos = drag
        .as_ref()
        .and_then(|d| layout.read().get(&d.id).map(|m| m.position()));
    let overlay = coords::measure(CANVAS_ID)
        .map(|rect| build_drag_overlay(rect.container, cfg.padding, dragged_pos))
        .unwrap_or_default();

    let strip_style = format!("transform: translateX(-{}%);", current.index() * 100);
    let canvas_class = if drag.is_some() { "canvas dragging" } else { "canvas" };

    rsx! {
        div { class: "canvas-frame",
            div {
                id: CANVAS_ID,
                class: "{canvas_class}",

                onmousemove: move |evt: Event<MouseData>| {
                    let client = evt.client_coordinates();
                    follow_drag(layout, dragged, client.x, client.y);
                },

                onmouseup: move |_| dragged.set(None),
                onmouseleave: move |_| dragged.set(None),

                // --- Touch drag ---

                ontouchmove: move |evt: Event<TouchData>| {
                    let touches = evt.data().touches();
                    let Some(t) = touches.first() else { return };
                    let client = t.client_coordinates();
                    if follow_drag(layout, dragged, client.x, client.y) {
                        // Keep the page from scrolling under the circle
                        evt.prevent_default();
                    }
                },

                ontouchend: move |_evt: Event<TouchData>| dragged.set(None),
                ontouchcancel: move |_evt: Event<TouchData>| dragged.set(None),

                // Material carousel (background), swipeable
                div {
                    class: "material-strip",
                    style: "{strip_style}",

                    ontouchstart: move |evt: Event<TouchData>| {
                        let touches = evt.data().touches();
                        if touches.len() == 1 {
                            let x = touches[0].client_coordinates().x;
                            swipe_start.set(Some(x));
                            swipe_last.set(x);
                        } else {
                            swipe_start.set(None);
                        }
                    },

                    ontouchmove: move |evt: Event<TouchData>| {
                        if let Some(t) = evt.data().touches().first() {
                            swipe_last.set(t.client_coordinates().x);
                        }
                    },

                    ontouchend: move |_evt: Event<TouchData>| {
                        let Some(start) = *swipe_start.read() else { return };
                        swipe_start.set(None);
                        let next = match coords::swipe_direction(start, *swipe_last.read()) {
                            Some(Swipe::Next) => material.read().next(),
                            Some(Swipe::Previous) => material.read().previous(),
                            None => return,
                        };
                        material.set(next);
                    },

                    ontouchcancel: move |_evt: Event<TouchData>| swipe_start.set(None),

                    for (name, path) in slides {
                        img {
                            key: "{name}",
                            src: "{path}",
                            alt: "{name}",
                            draggable: "false",
                        }
                    }
                }

                button {
                    class: "carousel-prev",
                    "aria-label": "Previous material",
                    onclick: move |_| {
                        let prev = material.read().previous();
                        material.set(prev);
                    },
                    "\u{2039}"
                }
                button {
                    class: "carousel-next",
                    "aria-label": "Next material",
                    onclick: move |_| {
                        let next = material.read().next();
                        material.set(next);
                    },
                    "\u{203a}"
                }

                div {
                    dangerous_inner_html: "{overlay}",
                    style: "position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;",
                }

                for (label, id, center, active) in circles {
                    div {
                        key: "{id}",
                        class: "circle",
                        style: circle_style(center, cfg.radius, active),
                        onmousedown: {
                            let id = id.clone();
                            move |evt: Event<MouseData>| {
                                if evt.trigger_button() != Some(MouseButton::Primary) {
                                    return;
                                }
                                evt.stop_propagation();
                                let client = evt.client_coordinates();
                                begin_drag(dragged, id.clone(), center, client.x, client.y);
                            }
                        },
                        ontouchstart: {
                            let id = id.clone();
                            move |evt: Event<TouchData>| {
                                let touches = evt.data().touches();
                                if touches.len() != 1 {
                                    return;
                                }
                                evt.stop_propagation();
                                let client = touches[0].client_coordinates();
                                begin_drag(dragged, id.clone(), center, client.x, client.y);
                            }
                        },
                        "{label}"
                    }
                }
            }
            div { class: "swipe-note", "Swipe or use the arrows to change material" }
        }
    }
}
