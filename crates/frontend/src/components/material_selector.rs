use circle_planner_shared::Material;
use dioxus::prelude::*;

#[component]
pub fn MaterialSelector(selected: Signal<Material>) -> Element {
    let current = *selected.read();
    let options: Vec<(Material, String, String)> = Material::ALL
        .iter()
        .map(|m| (*m, m.to_string(), m.image_path()))
        .collect();

    rsx! {
        div { class: "materials",
            div { class: "section-title",
                span { "Material." }
                span { class: "subtle", "Which material do you think would look best?" }
            }
            div { class: "material-options",
                for (material, name, image) in options {
                    button {
                        key: "{name}",
                        class: if material == current { "material-option selected" } else { "material-option" },
                        onclick: move |_| selected.set(material),
                        div { class: "material-thumb",
                            img { src: "{image}", alt: "{name}" }
                        }
                        span { class: "material-name", "{name}" }
                        if material == current {
                            span { class: "check", "\u{2713}" }
                        }
                    }
                }
            }
            div { class: "caption", "Current: " strong { "{current}" } }
        }
    }
}
