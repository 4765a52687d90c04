// Presentation layer - Grid controller integration and render model
pub mod grid_controller;
pub mod view;
