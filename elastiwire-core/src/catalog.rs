//! Static catalogs backing the lookup collaborators
//!
//! Both catalogs are plain in-memory tables, loadable from JSON files.
//!
//! Images:
//!
//! ```json
//! [{ "id": "ami-0abc", "name": "debian-12", "rootDeviceName": "/dev/xvda" }]
//! ```
//!
//! Machine types:
//!
//! ```json
//! [{
//!     "name": "m5d.large",
//!     "ephemeralDevices": [{ "deviceName": "/dev/sdc", "virtualName": "ephemeral0" }]
//! }]
//! ```

use std::collections::HashMap;
use std::path::Path;

use crate::collaborator::{CollaboratorError, CollaboratorResult, ImageResolver, MachineTypeCatalog};
use crate::json_file::{LoadError, read_json};
use crate::resource::{Image, MachineTypeInfo};

/// Image resolver over a fixed list of images
///
/// An image matches when either its identifier or its name equals the
/// requested name.
#[derive(Debug, Clone, Default)]
pub struct StaticImageResolver {
    images: Vec<Image>,
}

impl StaticImageResolver {
    pub fn new(images: Vec<Image>) -> Self {
        Self { images }
    }

    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let images: Vec<Image> = read_json(path)?;
        log::debug!("Loaded {} images from {}", images.len(), path.display());
        Ok(Self::new(images))
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageResolver for StaticImageResolver {
    fn resolve_image(&self, name: &str) -> CollaboratorResult<Option<Image>> {
        Ok(self
            .images
            .iter()
            .find(|image| image.id == name || image.name.as_deref() == Some(name))
            .cloned())
    }
}

/// Machine type catalog over a fixed table
#[derive(Debug, Clone, Default)]
pub struct StaticMachineTypeCatalog {
    machine_types: HashMap<String, MachineTypeInfo>,
}

impl StaticMachineTypeCatalog {
    pub fn new(machine_types: impl IntoIterator<Item = MachineTypeInfo>) -> Self {
        Self {
            machine_types: machine_types
                .into_iter()
                .map(|info| (info.name.clone(), info))
                .collect(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let machine_types: Vec<MachineTypeInfo> = read_json(path)?;
        log::debug!(
            "Loaded {} machine types from {}",
            machine_types.len(),
            path.display()
        );
        Ok(Self::new(machine_types))
    }

    pub fn len(&self) -> usize {
        self.machine_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machine_types.is_empty()
    }
}

impl MachineTypeCatalog for StaticMachineTypeCatalog {
    fn machine_type_info(&self, name: &str) -> CollaboratorResult<MachineTypeInfo> {
        self.machine_types
            .get(name)
            .cloned()
            .ok_or_else(|| CollaboratorError::new("unknown machine type").for_subject(name))
    }
}
