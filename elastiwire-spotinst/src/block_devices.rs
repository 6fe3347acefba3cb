//! Block device mappings: building them from instance types and images, and
//! converting them to the Elastigroup wire format

use elastiwire_core::resource::{BlockDeviceMapping, BlockDeviceMappings, Image, RootVolumeOpts};
use elastiwire_core::{ImageResolver, MachineTypeCatalog};

use crate::error::{TranslateError, TranslateResult};
use crate::volume::volume_iops;
use crate::wire::elastigroup;

/// Instance store devices implied by an instance type, keyed by device name
///
/// Fails without consulting the catalog when no instance type is given.
/// Catalog errors are returned unchanged.
pub fn build_ephemeral_devices<C>(
    catalog: &C,
    instance_type: Option<&str>,
) -> TranslateResult<BlockDeviceMappings>
where
    C: MachineTypeCatalog + ?Sized,
{
    let instance_type =
        instance_type.ok_or_else(|| TranslateError::required_field("InstanceType"))?;

    let info = catalog.machine_type_info(instance_type)?;

    let mut mappings = BlockDeviceMappings::new();
    for device in info.ephemeral_devices() {
        let previous = mappings.insert(
            device.device_name.clone(),
            BlockDeviceMapping::ephemeral(device.virtual_name.clone()),
        );
        if previous.is_some() {
            log::trace!(
                "{}: duplicate ephemeral device {}, keeping {}",
                instance_type,
                device.device_name,
                device.virtual_name
            );
        }
    }

    Ok(mappings)
}

/// Resolve an image, turning "no such image" into an error
pub fn resolve_image<R>(resolver: &R, name: &str) -> TranslateResult<Image>
where
    R: ImageResolver + ?Sized,
{
    match resolver.resolve_image(name) {
        Ok(Some(image)) => Ok(image),
        Ok(None) => Err(TranslateError::image_not_found(name)),
        Err(source) => Err(TranslateError::ImageResolution {
            image: name.to_string(),
            source,
        }),
    }
}

/// Root volume mapping, keyed by the image's root device name
pub fn build_root_device<R>(
    resolver: &R,
    image_id: &str,
    opts: &RootVolumeOpts,
) -> TranslateResult<BlockDeviceMappings>
where
    R: ImageResolver + ?Sized,
{
    let image = resolve_image(resolver, image_id)?;

    let root = BlockDeviceMapping {
        virtual_name: None,
        ebs_delete_on_termination: Some(true),
        ebs_volume_size: Some(i64::from(opts.size)),
        ebs_volume_type: Some(opts.volume_type.clone()),
        ebs_volume_iops: volume_iops(opts.iops.map(i64::from), Some(opts.volume_type.as_str())),
    };

    let mut mappings = BlockDeviceMappings::new();
    mappings.insert(image.root_device_name, root);
    Ok(mappings)
}

/// Convert an internal mapping to the Elastigroup wire format
///
/// The EBS record is attached only if delete-on-termination, size or type is
/// set on the input.
pub fn build_block_device_mapping(
    device_name: &str,
    mapping: &BlockDeviceMapping,
) -> elastigroup::BlockDeviceMapping {
    let ebs = mapping.has_ebs().then(|| elastigroup::Ebs {
        delete_on_termination: mapping.ebs_delete_on_termination,
        volume_size: mapping.ebs_volume_size,
        volume_type: mapping.ebs_volume_type.clone(),
        iops: volume_iops(mapping.ebs_volume_iops, mapping.ebs_volume_type.as_deref()),
    });

    elastigroup::BlockDeviceMapping {
        device_name: device_name.to_string(),
        virtual_name: mapping.virtual_name.clone(),
        ebs,
    }
}
