mod category;
mod legacy;
mod plan;
mod resolver;

pub use category::category;
pub use legacy::ThinQ1Resolver;
pub use plan::plan_registrations;
pub use resolver::{Resolve, Resolver};
