use std::collections::BTreeMap;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, OwnerReference};

use crate::{kvp::LabelMap, owner::ControllerOwner};

/// A builder to build [`ObjectMeta`] objects for generated resources.
///
/// Note: This builder only supports a single `OwnerReference`, generated
/// resources always have exactly one controlling owner.
#[derive(Clone, Debug, Default)]
pub struct ObjectMetaBuilder {
    name: Option<String>,
    namespace: Option<String>,
    owner_reference: Option<OwnerReference>,
    labels: Option<LabelMap>,
    annotations: Option<BTreeMap<String, String>>,
}

impl ObjectMetaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn namespace(&mut self, namespace: impl Into<String>) -> &mut Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn owner_reference(&mut self, owner_reference: OwnerReference) -> &mut Self {
        self.owner_reference = Some(owner_reference);
        self
    }

    /// Sets the owner reference to the controlling reference of `owner`.
    pub fn controller_owner<O: ControllerOwner + ?Sized>(&mut self, owner: &O) -> &mut Self {
        self.owner_reference(owner.controller_owner_reference())
    }

    /// This adds multiple labels to the existing labels.
    /// Any existing label with a key that is contained in `labels` will be overwritten.
    pub fn with_labels(&mut self, labels: LabelMap) -> &mut Self {
        self.labels.get_or_insert_with(LabelMap::new).extend(labels);
        self
    }

    /// This will replace all existing annotations.
    ///
    /// An empty map leaves the annotations unset.
    pub fn annotations(&mut self, annotations: BTreeMap<String, String>) -> &mut Self {
        self.annotations = (!annotations.is_empty()).then_some(annotations);
        self
    }

    pub fn build(&self) -> ObjectMeta {
        ObjectMeta {
            name: self.name.clone(),
            namespace: self.namespace.clone(),
            owner_references: self
                .owner_reference
                .as_ref()
                .map(|owner_reference| vec![owner_reference.clone()]),
            labels: self.labels.clone(),
            annotations: self.annotations.clone(),
            ..ObjectMeta::default()
        }
    }
}
