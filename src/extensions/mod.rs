pub(crate) mod path_ext;
pub mod temperature_ext;
