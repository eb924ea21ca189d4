pub mod classifier;
pub mod slots_model;
