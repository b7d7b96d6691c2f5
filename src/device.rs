use log::{debug, info};

use crate::config::MonitorConfig;
use crate::usb::UsbDevice;

/// Keep only the devices that are supported monitors, in enumeration order.
pub fn find_supported_devices<D, I>(devices: I, config: &MonitorConfig) -> Vec<D>
where
    D: UsbDevice,
    I: IntoIterator<Item = D>,
{
    devices
        .into_iter()
        .filter(|device| match device.ids() {
            Ok((vendor_id, product_id)) => match config.model(product_id) {
                Some(model) if vendor_id == config.vendor_id => {
                    info!(
                        "found {} ({:04x}:{:04x})",
                        model.name, vendor_id, product_id
                    );
                    true
                }
                _ => false,
            },
            Err(e) => {
                debug!("skipping device without readable descriptor: {}", e);
                false
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockDevice;

    #[test]
    fn keeps_only_allow_listed_products() {
        let config = MonitorConfig::default();
        let devices = vec![
            MockDevice::new(0x43e, 0x9a63),
            MockDevice::new(0x43e, 0xffff),
        ];

        let found = find_supported_devices(devices, &config);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].ids().unwrap(), (0x43e, 0x9a63));
    }

    #[test]
    fn ignores_other_vendors() {
        let config = MonitorConfig::default();
        let devices = vec![MockDevice::new(0x5ac, 0x9a63), MockDevice::new(0x1d6b, 0x0002)];
        assert!(find_supported_devices(devices, &config).is_empty());
    }

    #[test]
    fn preserves_enumeration_order() {
        let config = MonitorConfig::default();
        let devices = vec![
            MockDevice::new(0x43e, 0x9a40),
            MockDevice::new(0x1d6b, 0x0003),
            MockDevice::new(0x43e, 0x9a70),
            MockDevice::new(0x43e, 0x9a63),
        ];

        let ids: Vec<_> = find_supported_devices(devices, &config)
            .iter()
            .map(|d| d.ids().unwrap().1)
            .collect();
        assert_eq!(ids, vec![0x9a40, 0x9a70, 0x9a63]);
    }

    #[test]
    fn skips_unreadable_descriptors() {
        let config = MonitorConfig::default();
        let devices = vec![
            MockDevice::unreadable(),
            MockDevice::new(0x43e, 0x9a70),
        ];
        assert_eq!(find_supported_devices(devices, &config).len(), 1);
    }

    #[test]
    fn extra_models_extend_the_allow_list() {
        let mut config = MonitorConfig::default();
        config.models.push(crate::config::Model {
            product_id: 0xffff,
            name: "test panel",
        });
        let devices = vec![MockDevice::new(0x43e, 0xffff)];
        assert_eq!(find_supported_devices(devices, &config).len(), 1);
    }
}
