// src/lib.rs
//! Galaxy viewer library.
//!
//! Renders a procedural particle galaxy (disk body plus two polar jet
//! streams) with a scripted loading overlay, pointer-driven sway, and a
//! scroll-scrubbed camera flight over the page sections.

pub mod app;
pub mod camera;
pub mod galaxy;
pub mod loader;
pub mod pointer;
pub mod renderer;
pub mod reveal;
pub mod scene;
pub mod scroll;
pub mod timeline;
pub mod ui;
