pub mod app;
pub mod atom_canvas;
pub mod element_detail;
pub mod element_tile;
pub mod periodic_table;
pub mod property_charts;
pub mod search_bar;
pub mod zoom_controls;
