pub mod airports;
pub mod duration_inference;
pub mod gap_classifier;
pub mod gap_filling;
pub mod preference_inference;
pub mod providers;
pub mod redundancy_repair;
pub mod sequencer;
