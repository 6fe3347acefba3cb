//! Payload assembly
//!
//! Embeds the translated fragments (tags, labels, taints, block devices,
//! orientation) into Elastigroup and Ocean request bodies. Records that the
//! mappers return in unspecified order are sorted here so that payloads are
//! stable from one run to the next.

use elastiwire_core::resource::{InstanceGroupSpec, Subnet};
use elastiwire_core::{ImageResolver, MachineTypeCatalog, TranslateConfig};

use crate::block_devices::{
    build_block_device_mapping, build_ephemeral_devices, build_root_device,
};
use crate::error::{TranslateError, TranslateResult};
use crate::orientation::normalize_orientation;
use crate::subnets::subnets_equal_ignore_order;
use crate::tags::{
    build_auto_scale_labels, build_elastigroup_tags, build_ocean_labels, build_ocean_tags,
};
use crate::taints::{TaintReport, parse_taints};
use crate::wire::{elastigroup, ocean};

/// Translates instance groups using a set of lookup collaborators
pub struct Translator<'a> {
    catalog: &'a dyn MachineTypeCatalog,
    images: &'a dyn ImageResolver,
    config: TranslateConfig,
}

impl<'a> Translator<'a> {
    pub fn new(catalog: &'a dyn MachineTypeCatalog, images: &'a dyn ImageResolver) -> Self {
        Self {
            catalog,
            images,
            config: TranslateConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TranslateConfig) -> Self {
        self.config = config;
        self
    }

    /// Root and instance store devices of a group, in Elastigroup format
    ///
    /// When the root device shares a name with an instance store device, the
    /// root device wins.
    pub fn build_block_device_mappings(
        &self,
        group: &InstanceGroupSpec,
    ) -> TranslateResult<Vec<elastigroup::BlockDeviceMapping>> {
        let mut mappings = build_ephemeral_devices(self.catalog, group.instance_type.as_deref())?;

        let opts = group.root_volume_opts(&self.config);
        let root = build_root_device(self.images, &group.image_id, &opts)?;
        for (device_name, mapping) in root {
            if mappings.insert(device_name.clone(), mapping).is_some() {
                log::debug!(
                    "{}: root device {} replaces an instance store device",
                    group.name,
                    device_name
                );
            }
        }

        let mut out: Vec<elastigroup::BlockDeviceMapping> = mappings
            .iter()
            .map(|(device_name, mapping)| build_block_device_mapping(device_name, mapping))
            .collect();
        out.sort_by(|a, b| a.device_name.cmp(&b.device_name));
        Ok(out)
    }

    /// Elastigroup request body for an instance group
    pub fn elastigroup(
        &self,
        group: &InstanceGroupSpec,
    ) -> TranslateResult<elastigroup::Elastigroup> {
        let block_device_mappings = self.build_block_device_mappings(group)?;

        let mut tags = build_elastigroup_tags(&group.tags);
        tags.sort_by(|a, b| a.key.cmp(&b.key));

        let mut labels = build_auto_scale_labels(&group.labels);
        labels.sort_by(|a, b| a.key.cmp(&b.key));

        Ok(elastigroup::Elastigroup {
            name: group.name.clone(),
            strategy: elastigroup::Strategy {
                availability_vs_cost: normalize_orientation(group.orientation.as_deref()),
            },
            compute: elastigroup::Compute {
                instance_type: group.instance_type.clone(),
                subnet_ids: subnet_ids(group)?,
                launch_specification: elastigroup::LaunchSpecification {
                    image_id: group.image_id.clone(),
                    tags,
                    block_device_mappings,
                },
            },
            integration: elastigroup::Integration {
                kubernetes: elastigroup::KubernetesIntegration {
                    auto_scale: elastigroup::AutoScale { labels },
                },
            },
        })
    }

    /// Ocean launch spec request body for an instance group
    ///
    /// Taints that do not parse are left out and logged at warn level.
    pub fn ocean_launch_spec(
        &self,
        group: &InstanceGroupSpec,
    ) -> TranslateResult<ocean::LaunchSpec> {
        let (spec, report) = self.ocean_launch_spec_with_report(group)?;
        for rejected in &report.rejected {
            log::warn!(
                "{}: ignoring taint {:?}: {}",
                group.name,
                rejected.input,
                rejected.outcome
            );
        }
        Ok(spec)
    }

    /// Ocean launch spec together with the taint report its taints came from
    ///
    /// The spec holds exactly the report's accepted taints.
    pub fn ocean_launch_spec_with_report(
        &self,
        group: &InstanceGroupSpec,
    ) -> TranslateResult<(ocean::LaunchSpec, TaintReport)> {
        let report = parse_taints(&group.taints);

        let mut tags = build_ocean_tags(&group.tags);
        tags.sort_by(|a, b| a.key.cmp(&b.key));

        let mut labels = build_ocean_labels(&group.labels);
        labels.sort_by(|a, b| a.key.cmp(&b.key));

        let spec = ocean::LaunchSpec {
            name: group.name.clone(),
            image_id: group.image_id.clone(),
            subnet_ids: subnet_ids(group)?,
            tags,
            labels,
            taints: report.accepted.clone(),
        };
        Ok((spec, report))
    }
}

/// Subnet identifiers of a group; every subnet must be resolved
fn subnet_ids(group: &InstanceGroupSpec) -> TranslateResult<Vec<String>> {
    group
        .subnets
        .iter()
        .map(|subnet| {
            subnet.id.clone().ok_or_else(|| {
                TranslateError::required_field(format!(
                    "subnets[{}].id",
                    subnet.name.as_deref().unwrap_or("?")
                ))
            })
        })
        .collect()
}

/// Returns true if a payload's subnets must be updated to match `desired`
pub fn subnets_changed(current: &[Subnet], desired: &[Subnet]) -> bool {
    !subnets_equal_ignore_order(current, desired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use elastiwire_core::catalog::{StaticImageResolver, StaticMachineTypeCatalog};
    use elastiwire_core::resource::{Image, MachineTypeInfo, RootVolumeSpec};

    use crate::orientation::Orientation;

    fn catalog() -> StaticMachineTypeCatalog {
        StaticMachineTypeCatalog::new([
            MachineTypeInfo::with_instance_storage("m5.large", 0).unwrap(),
            MachineTypeInfo::with_instance_storage("m5d.2xlarge", 2).unwrap(),
        ])
    }

    fn images() -> StaticImageResolver {
        StaticImageResolver::new(vec![Image {
            id: "ami-123".to_string(),
            name: Some("debian-12".to_string()),
            root_device_name: "/dev/xvda".to_string(),
        }])
    }

    fn group() -> InstanceGroupSpec {
        InstanceGroupSpec {
            name: "nodes".to_string(),
            instance_type: Some("m5d.2xlarge".to_string()),
            image_id: "ami-123".to_string(),
            root_volume: Some(RootVolumeSpec {
                size: Some(64),
                volume_type: Some("gp2".to_string()),
                iops: Some(3000),
            }),
            tags: HashMap::from([
                ("team".to_string(), "infra".to_string()),
                ("env".to_string(), "prod".to_string()),
            ]),
            labels: HashMap::from([("pool".to_string(), "general".to_string())]),
            taints: vec!["dedicated=true:NoSchedule".to_string(), "malformed".to_string()],
            subnets: vec![Subnet::new("subnet-a"), Subnet::new("subnet-b")],
            orientation: Some("cost".to_string()),
        }
    }

    #[test]
    fn elastigroup_payload() {
        let catalog = catalog();
        let images = images();
        let translator = Translator::new(&catalog, &images);

        let payload = translator.elastigroup(&group()).unwrap();
        assert_eq!(payload.name, "nodes");
        assert_eq!(payload.strategy.availability_vs_cost, Orientation::Cost);
        assert_eq!(payload.compute.subnet_ids, vec!["subnet-a", "subnet-b"]);

        let spec = &payload.compute.launch_specification;
        let keys: Vec<&str> = spec.tags.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec!["env", "team"]);

        let devices: Vec<&str> = spec
            .block_device_mappings
            .iter()
            .map(|m| m.device_name.as_str())
            .collect();
        assert_eq!(devices, vec!["/dev/sdc", "/dev/sdd", "/dev/xvda"]);

        let root = spec.block_device_mappings[2].ebs.as_ref().unwrap();
        assert_eq!(root.delete_on_termination, Some(true));
        assert_eq!(root.volume_size, Some(64));
        assert_eq!(root.iops, None);
        assert!(spec.block_device_mappings[0].ebs.is_none());

        assert_eq!(payload.integration.kubernetes.auto_scale.labels.len(), 1);
    }

    #[test]
    fn elastigroup_requires_instance_type() {
        let catalog = catalog();
        let images = images();
        let translator = Translator::new(&catalog, &images);

        let mut group = group();
        group.instance_type = None;
        let err = translator.elastigroup(&group).unwrap_err();
        assert!(matches!(err, TranslateError::RequiredFieldMissing { .. }));
    }

    #[test]
    fn root_device_uses_configured_defaults() {
        let catalog = catalog();
        let images = images();
        let translator = Translator::new(&catalog, &images).with_config(TranslateConfig {
            default_root_volume_type: "io1".to_string(),
            default_root_volume_size: 20,
        });

        let mut group = group();
        group.instance_type = Some("m5.large".to_string());
        group.root_volume = Some(RootVolumeSpec {
            iops: Some(1000),
            ..Default::default()
        });

        let mappings = translator.build_block_device_mappings(&group).unwrap();
        assert_eq!(mappings.len(), 1);
        let ebs = mappings[0].ebs.as_ref().unwrap();
        assert_eq!(ebs.volume_type.as_deref(), Some("io1"));
        assert_eq!(ebs.volume_size, Some(20));
        assert_eq!(ebs.iops, Some(1000));
    }

    #[test]
    fn root_device_replaces_clashing_instance_store_device() {
        let catalog = catalog();
        let images = StaticImageResolver::new(vec![Image {
            id: "ami-sdc".to_string(),
            name: None,
            root_device_name: "/dev/sdc".to_string(),
        }]);
        let translator = Translator::new(&catalog, &images);

        let mut group = group();
        group.image_id = "ami-sdc".to_string();
        let mappings = translator.build_block_device_mappings(&group).unwrap();
        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings[0].device_name, "/dev/sdc");
        assert!(mappings[0].ebs.is_some());
        assert_eq!(mappings[0].virtual_name, None);
    }

    #[test]
    fn ocean_launch_spec_payload() {
        let catalog = catalog();
        let images = images();
        let translator = Translator::new(&catalog, &images);

        let spec = translator.ocean_launch_spec(&group()).unwrap();
        assert_eq!(spec.name, "nodes");
        assert_eq!(spec.image_id, "ami-123");
        assert_eq!(spec.tags.len(), 2);
        assert_eq!(spec.labels[0].key, "pool");
        assert_eq!(spec.taints.len(), 1);
        assert_eq!(spec.taints[0].effect, "NoSchedule");
    }

    #[test]
    fn ocean_launch_spec_taints_come_from_one_report() {
        let catalog = catalog();
        let images = images();
        let translator = Translator::new(&catalog, &images);

        let (spec, report) = translator.ocean_launch_spec_with_report(&group()).unwrap();
        assert_eq!(spec.taints, report.accepted);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].input, "malformed");
        assert_eq!(translator.ocean_launch_spec(&group()).unwrap(), spec);
    }

    #[test]
    fn unresolved_subnet_is_required_field() {
        let catalog = catalog();
        let images = images();
        let translator = Translator::new(&catalog, &images);

        let mut group = group();
        group.subnets.push(Subnet::unresolved("private-c"));
        let err = translator.ocean_launch_spec(&group).unwrap_err();
        assert_eq!(
            err.to_string(),
            "required field is missing: subnets[private-c].id"
        );
    }

    #[test]
    fn test_subnets_changed() {
        let current = [Subnet::new("a"), Subnet::new("b")];
        assert!(!subnets_changed(&current, &[Subnet::new("b"), Subnet::new("a")]));
        assert!(subnets_changed(&current, &[Subnet::new("a")]));
        assert!(subnets_changed(&current, &[Subnet::unresolved("b")]));
    }
}
