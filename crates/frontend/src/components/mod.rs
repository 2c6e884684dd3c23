pub mod canvas;
pub mod circles_list;
pub mod confetti_modal;
pub mod controls;
pub mod material_selector;
