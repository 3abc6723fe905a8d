use crate::domain::{Device, Registration};
use crate::resolver::{Resolve, category};
use tracing::{info, instrument};

/// Resolves every device, leaving out the ones no handler supports.
#[instrument(skip_all)]
pub fn plan_registrations(resolver: &dyn Resolve, devices: &[Device]) -> Vec<Registration> {
    let registrations: Vec<Registration> = devices
        .iter()
        .filter_map(|device| {
            resolver.resolve(device).map(|handler| Registration {
                device_id: device.id.clone(),
                name: device.name.clone(),
                handler,
                category: category(device),
            })
        })
        .collect();

    info!(
        "📋 Planned {} registration(s), skipped {} device(s)",
        registrations.len(),
        devices.len() - registrations.len()
    );
    registrations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, DeviceType, Handler, OvenSnapshot, PlatformType};
    use crate::resolver::Resolver;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn device(id: &str, tag: &str, oven_snapshot: Option<OvenSnapshot>) -> Device {
        Device {
            id: id.to_string(),
            name: format!("{} device", id),
            model_name: "model".to_string(),
            platform: PlatformType::ThinQ2,
            device_type: DeviceType::from_tag(tag),
            device_code: None,
            oven_snapshot,
        }
    }

    #[test]
    fn plan_registrations_skips_unsupported_devices() {
        let devices = vec![
            device("a", "AC", None),
            device("b", "FOO_BAR", None),
            device("c", "OVEN", Some(OvenSnapshot::MicrowaveStyle)),
        ];

        let registrations = plan_registrations(&Resolver::new(), &devices);

        assert_eq!(
            registrations,
            vec![
                Registration {
                    device_id: "a".to_string(),
                    name: "a device".to_string(),
                    handler: Handler::AirConditioner,
                    category: Category::AirConditioner,
                },
                Registration {
                    device_id: "c".to_string(),
                    name: "c device".to_string(),
                    handler: Handler::Microwave,
                    category: Category::Thermostat,
                },
            ]
        );
    }

    #[test]
    fn registration_serializes_to_camel_case_json() -> Result<(), serde_json::Error> {
        let registrations = plan_registrations(&Resolver::new(), &[device("a", "DISHWASHER", None)]);

        assert_eq!(
            serde_json::to_value(&registrations)?,
            json!([{ "deviceId": "a", "name": "a device", "handler": "Dishwasher", "category": 1 }])
        );
        Ok(())
    }
}
