mod group_box;

pub use group_box::*;
