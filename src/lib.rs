pub mod app_config;
pub mod domain;
pub mod extensions;
pub mod merge;
pub mod resolver;
pub mod thinq;

pub use extensions::temperature_ext::{TemperatureConversions, celsius_to_fahrenheit, fahrenheit_to_celsius};
pub use merge::{MergeDeep, MergeError, merge_deep, merge_into};
pub use resolver::{Resolve, Resolver, ThinQ1Resolver, category, plan_registrations};
