pub mod definitions;
pub mod families;
pub mod types;
