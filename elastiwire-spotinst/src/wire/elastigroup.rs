//! Elastigroup API request shapes

use serde::Serialize;

use crate::orientation::Orientation;

/// Instance tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Tag {
    #[serde(rename = "tagKey")]
    pub key: String,
    #[serde(rename = "tagValue")]
    pub value: String,
}

/// Node label applied by the Kubernetes auto-scaler
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AutoScaleLabel {
    pub key: String,
    pub value: String,
}

/// EBS settings of a block device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ebs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDeviceMapping {
    pub device_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs: Option<Ebs>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchSpecification {
    pub image_id: String,
    pub tags: Vec<Tag>,
    pub block_device_mappings: Vec<BlockDeviceMapping>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Compute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    pub subnet_ids: Vec<String>,
    pub launch_specification: LaunchSpecification,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub availability_vs_cost: Orientation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoScale {
    pub labels: Vec<AutoScaleLabel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesIntegration {
    pub auto_scale: AutoScale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Integration {
    pub kubernetes: KubernetesIntegration,
}

/// Elastigroup create/update request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Elastigroup {
    pub name: String,
    pub strategy: Strategy,
    pub compute: Compute,
    pub integration: Integration,
}
