//! Core, DOM-free primitives shared by the widgets.
pub mod breakpoints;
pub mod classes;
pub mod theme;
