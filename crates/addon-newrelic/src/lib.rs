pub mod addon;
pub mod config;
pub mod values;

pub use addon::NewRelicAddOn;
pub use config::{NewRelicAddOnOptions, NewRelicAddOnProps};
