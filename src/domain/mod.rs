mod category;
pub mod device;
mod handler;
mod registration;

pub use category::Category;
pub use device::{Device, DeviceType, OvenSnapshot, PlatformType};
pub use handler::{Handler, LegacyHandler};
pub use registration::Registration;
