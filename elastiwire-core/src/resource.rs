//! Resource - Internal model of instance group resources
//!
//! These types describe what an instance group wants (tags, volumes, subnets)
//! without committing to any particular control plane's wire format.

use std::collections::HashMap;

use serde::Deserialize;

use crate::collaborator::{CollaboratorError, CollaboratorResult};
use crate::config::TranslateConfig;

/// Block device mapping as modeled internally
///
/// The device name is not a field: mappings live in a [`BlockDeviceMappings`]
/// map keyed by device name, which keeps device names unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockDeviceMapping {
    /// Instance store name (e.g., "ephemeral0")
    pub virtual_name: Option<String>,
    pub ebs_delete_on_termination: Option<bool>,
    pub ebs_volume_size: Option<i64>,
    pub ebs_volume_type: Option<String>,
    pub ebs_volume_iops: Option<i64>,
}

impl BlockDeviceMapping {
    /// Mapping for an instance store device: virtual name only, no EBS fields
    pub fn ephemeral(virtual_name: impl Into<String>) -> Self {
        Self {
            virtual_name: Some(virtual_name.into()),
            ..Default::default()
        }
    }

    /// Returns true if any field that warrants an EBS sub-record is set
    ///
    /// IOPS alone does not count: without a volume it has nothing to apply to.
    pub fn has_ebs(&self) -> bool {
        self.ebs_delete_on_termination.is_some()
            || self.ebs_volume_size.is_some()
            || self.ebs_volume_type.is_some()
    }
}

/// Block device mappings keyed by device name (e.g., "/dev/xvda")
pub type BlockDeviceMappings = HashMap<String, BlockDeviceMapping>;

/// Fully resolved root volume options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootVolumeOpts {
    /// Volume size in GiB
    pub size: i32,
    /// Volume type (e.g., "gp2", "gp3", "io1")
    pub volume_type: String,
    pub iops: Option<i32>,
}

/// Root volume options as written in an instance group document
///
/// Every field is optional; missing values come from [`TranslateConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootVolumeSpec {
    pub size: Option<i32>,
    #[serde(rename = "type")]
    pub volume_type: Option<String>,
    pub iops: Option<i32>,
}

impl RootVolumeSpec {
    /// Fill in missing values from the configured defaults
    pub fn resolve(&self, config: &TranslateConfig) -> RootVolumeOpts {
        RootVolumeOpts {
            size: self.size.unwrap_or(config.default_root_volume_size),
            volume_type: self
                .volume_type
                .clone()
                .unwrap_or_else(|| config.default_root_volume_type.clone()),
            iops: self.iops,
        }
    }
}

/// Reference to a subnet; only the identifier takes part in comparisons
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Subnet {
    /// Cloud identifier (e.g., subnet-0abc), unset until the subnet is resolved
    pub id: Option<String>,
    /// Human readable name, used only in diagnostics
    pub name: Option<String>,
}

impl Subnet {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: None,
        }
    }

    /// A subnet known by name only
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}

/// Machine image descriptor returned by an image resolver
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Image identifier (e.g., ami-0abc)
    pub id: String,
    pub name: Option<String>,
    /// Device the image boots from (e.g., "/dev/xvda")
    pub root_device_name: String,
}

/// Instance store device implied by a machine type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EphemeralDevice {
    pub device_name: String,
    pub virtual_name: String,
}

/// Machine type metadata
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineTypeInfo {
    pub name: String,
    #[serde(default)]
    pub ephemeral_devices: Vec<EphemeralDevice>,
}

impl MachineTypeInfo {
    /// Instance store devices fit in /dev/sdc..=/dev/sdz
    pub const MAX_INSTANCE_STORAGE_DEVICES: u8 = 24;

    /// Machine type with `count` instance store volumes, named the way EC2
    /// exposes them: /dev/sdc → ephemeral0, /dev/sdd → ephemeral1, ...
    ///
    /// Fails if `count` exceeds [`Self::MAX_INSTANCE_STORAGE_DEVICES`].
    pub fn with_instance_storage(name: impl Into<String>, count: u8) -> CollaboratorResult<Self> {
        let name = name.into();
        if count > Self::MAX_INSTANCE_STORAGE_DEVICES {
            return Err(CollaboratorError::new(format!(
                "{} instance store devices requested, at most {} are supported",
                count,
                Self::MAX_INSTANCE_STORAGE_DEVICES
            ))
            .for_subject(name));
        }

        let ephemeral_devices = (0..count)
            .map(|i| EphemeralDevice {
                device_name: format!("/dev/sd{}", char::from(b'c' + i)),
                virtual_name: format!("ephemeral{}", i),
            })
            .collect();

        Ok(Self {
            name,
            ephemeral_devices,
        })
    }

    pub fn ephemeral_devices(&self) -> &[EphemeralDevice] {
        &self.ephemeral_devices
    }
}

/// Instance group as described in an input document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceGroupSpec {
    pub name: String,
    pub instance_type: Option<String>,
    pub image_id: String,
    pub root_volume: Option<RootVolumeSpec>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    /// Taints in `key=value:effect` form
    #[serde(default)]
    pub taints: Vec<String>,
    #[serde(default)]
    pub subnets: Vec<Subnet>,
    /// Placement strategy: "cost", "availability", "equal-distribution" or "balanced"
    pub orientation: Option<String>,
}

impl InstanceGroupSpec {
    /// Root volume options with configured defaults applied
    pub fn root_volume_opts(&self, config: &TranslateConfig) -> RootVolumeOpts {
        self.root_volume
            .clone()
            .unwrap_or_default()
            .resolve(config)
    }
}
