// src/gui/components/mod.rs

pub mod facet_bar;
pub mod results_area;
pub mod tabs;
