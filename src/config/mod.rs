//! Configuration for outlay

pub mod settings;

pub use settings::Settings;
