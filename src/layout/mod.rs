pub mod layout_file;
pub mod packer;
pub mod size_index;
pub mod sizes;
pub mod types;

pub use packer::{pack, pack_raw, row_size, unpack};
pub use size_index::{get_field_size, set_field_size};
pub use sizes::FieldSizes;
