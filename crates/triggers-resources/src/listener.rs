//! The metadata shared by all resources generated for an `EventListener`.
use std::collections::BTreeMap;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, OwnerReference};
use kube::{Resource, ResourceExt};
use snafu::{OptionExt, ResultExt, Snafu};
use tracing::trace;

use crate::{
    builder::meta::ObjectMetaBuilder,
    kvp::{self, LabelMap},
    owner::{ControllerOwner, ObjectIdentity, ObjectIdentityError},
};

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum ParentResourceError {
    #[snafu(display("parent resource {name:?} is not namespaced"))]
    MissingNamespace { name: String },

    #[snafu(display("failed to read identity of parent resource"))]
    ReadIdentity { source: ObjectIdentityError },
}

/// A snapshot of the parent resource (usually the `EventListener`) that the
/// generated resources belong to.
///
/// All fields are owned copies; later changes to the object the snapshot was
/// taken from are not visible here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParentResource {
    pub namespace: String,

    /// The name of the parent resource itself, used as the value of the
    /// `eventlistener` label.
    pub name: String,

    /// The name given to every generated resource. It is assigned by the
    /// reconciler beforehand and usually recorded in the parent's status.
    pub generated_resource_name: String,

    pub annotations: BTreeMap<String, String>,

    pub identity: ObjectIdentity,
}

impl ParentResource {
    /// Takes a snapshot of `resource`, which must be a namespaced object that
    /// was read from the API server.
    pub fn from_resource<T: Resource<DynamicType = ()>>(
        resource: &T,
        generated_resource_name: impl Into<String>,
    ) -> Result<Self, ParentResourceError> {
        let name = resource.name_any();
        let namespace = resource
            .namespace()
            .context(MissingNamespaceSnafu { name: &name })?;
        let identity = ObjectIdentity::from_resource(resource).context(ReadIdentitySnafu)?;

        Ok(Self {
            namespace,
            name,
            generated_resource_name: generated_resource_name.into(),
            annotations: resource.annotations().clone(),
            identity,
        })
    }
}

impl ControllerOwner for ParentResource {
    fn controller_owner_reference(&self) -> OwnerReference {
        self.identity.controller_owner_reference()
    }
}

/// Generates the object meta that should be used by all resources generated
/// by the EventListener reconciler.
///
/// `filtered_labels` are the caller's labels, already run through
/// [`kvp::filter_labels`]. They are merged with the labels from
/// [`kvp::generate_labels`], which win on key collision. Annotations are
/// copied from `parent` without filtering.
pub fn object_meta(
    parent: &ParentResource,
    filtered_labels: LabelMap,
    static_labels: &LabelMap,
) -> ObjectMeta {
    let labels = kvp::union_labels(
        filtered_labels,
        kvp::generate_labels(&parent.name, static_labels),
    );

    trace!(
        parent = %parent.name,
        namespace = %parent.namespace,
        name = %parent.generated_resource_name,
        "synthesized metadata for generated resource"
    );

    ObjectMetaBuilder::new()
        .namespace(&parent.namespace)
        .name(&parent.generated_resource_name)
        .controller_owner(parent)
        .with_labels(labels)
        .annotations(parent.annotations.clone())
        .build()
}
