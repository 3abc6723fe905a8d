use crate::domain::{Category, Handler};
use serde::Serialize;

/// An accessory the bridge should register for a discovered device.
#[derive(PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub device_id: String,
    pub name: String,
    pub handler: Handler,
    pub category: Category,
}
