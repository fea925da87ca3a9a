pub mod icon_gen;
pub mod icon_set;
