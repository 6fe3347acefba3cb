//! Ocean API request shapes

use serde::Serialize;

/// Instance tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Tag {
    #[serde(rename = "tagKey")]
    pub key: String,
    #[serde(rename = "tagValue")]
    pub value: String,
}

/// Kubernetes node label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Label {
    pub key: String,
    pub value: String,
}

/// Kubernetes node taint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Taint {
    pub key: String,
    pub value: String,
    pub effect: String,
}

/// Ocean launch spec (virtual node group) request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchSpec {
    pub name: String,
    pub image_id: String,
    pub subnet_ids: Vec<String>,
    pub tags: Vec<Tag>,
    pub labels: Vec<Label>,
    pub taints: Vec<Taint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn launch_spec_serializes_camel_case() {
        let spec = LaunchSpec {
            name: "gpu".to_string(),
            image_id: "ami-123".to_string(),
            subnet_ids: vec!["subnet-a".to_string()],
            tags: vec![],
            labels: vec![Label {
                key: "pool".to_string(),
                value: "gpu".to_string(),
            }],
            taints: vec![Taint {
                key: "nvidia.com/gpu".to_string(),
                value: "present".to_string(),
                effect: "NoSchedule".to_string(),
            }],
        };
        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({
                "name": "gpu",
                "imageId": "ami-123",
                "subnetIds": ["subnet-a"],
                "tags": [],
                "labels": [{ "key": "pool", "value": "gpu" }],
                "taints": [{ "key": "nvidia.com/gpu", "value": "present", "effect": "NoSchedule" }]
            })
        );
    }
}
