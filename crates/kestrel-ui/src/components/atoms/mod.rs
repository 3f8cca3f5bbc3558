//! Small building blocks shared by the widgets.
pub(crate) mod icons;
pub(crate) mod label;
