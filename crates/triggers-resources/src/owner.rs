//! Ownership linkage between a parent resource and the resources generated
//! for it.
//!
//! The controlling [`OwnerReference`] is what lets Kubernetes garbage collect
//! the generated resources once the parent is deleted. Building it only needs
//! the parent's `apiVersion`, `kind`, `name` and `uid`, captured here as an
//! [`ObjectIdentity`] so that callers are not forced to hand over a concrete
//! Kubernetes type.
use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kube::{Resource, ResourceExt};
use snafu::{OptionExt, Snafu};

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum ObjectIdentityError {
    #[snafu(display("object {kind}/{name} has no uid, it probably wasn't persisted yet"))]
    MissingUid { kind: String, name: String },
}

/// The identity of a Kubernetes object, as required to reference it as an
/// owner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectIdentity {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub uid: String,
}

impl ObjectIdentity {
    /// Reads the identity of `resource`.
    ///
    /// Fails if the resource has no `metadata.uid`, which is only the case for
    /// objects which were never read from (or written to) the API server.
    pub fn from_resource<T: Resource<DynamicType = ()>>(
        resource: &T,
    ) -> Result<Self, ObjectIdentityError> {
        let kind = T::kind(&()).into_owned();
        let name = resource.name_any();
        let uid = resource.uid().context(MissingUidSnafu {
            kind: &kind,
            name: &name,
        })?;

        Ok(Self {
            api_version: T::api_version(&()).into_owned(),
            kind,
            name,
            uid,
        })
    }
}

/// Anything which can act as the controlling owner of generated resources.
pub trait ControllerOwner {
    /// Builds an [`OwnerReference`] with `controller` and
    /// `blockOwnerDeletion` set, so that the referenced object is the
    /// managing controller of the owned one.
    fn controller_owner_reference(&self) -> OwnerReference;
}

impl ControllerOwner for ObjectIdentity {
    fn controller_owner_reference(&self) -> OwnerReference {
        OwnerReference {
            api_version: self.api_version.clone(),
            block_owner_deletion: Some(true),
            controller: Some(true),
            kind: self.kind.clone(),
            name: self.name.clone(),
            uid: self.uid.clone(),
        }
    }
}
