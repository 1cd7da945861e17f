//! Edit-layout packing and the settings-view reducer for content-type
//! configurations.
//!
//! The edit view shows fields on a 12-column grid. [`layout::pack`] turns
//! stored rows into padded grid rows, [`layout::unpack`] turns them back, and
//! [`editor::LayoutReducer`] applies the edits a settings view makes.

pub mod config;
pub mod editor;
pub mod error;
pub mod ir;
pub mod layout;
pub mod logging;
pub mod render;
