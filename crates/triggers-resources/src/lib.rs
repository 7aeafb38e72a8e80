//! Identity metadata for resources generated on behalf of an `EventListener`.
//!
//! Every child object the EventListener reconciler creates (Deployments,
//! Services, ...) carries the same metadata block: the parent's namespace,
//! the generated resource name, a controlling owner reference back to the
//! parent, the merged label set and the parent's annotations. This crate
//! computes that block and applies the label exclusion policy configured
//! through the `labels-exclusion-pattern` feature flag.
//!
//! ```
//! # use std::collections::BTreeMap;
//! # use triggers_resources::{kvp::{self, LabelMap}, owner::ObjectIdentity, listener::{self, ParentResource}};
//! let parent = ParentResource {
//!     namespace: "ns".to_owned(),
//!     name: "el1".to_owned(),
//!     generated_resource_name: "el1-abc".to_owned(),
//!     annotations: BTreeMap::from([("k".to_owned(), "v".to_owned())]),
//!     identity: ObjectIdentity {
//!         api_version: "triggers.tekton.dev/v1beta1".to_owned(),
//!         kind: "EventListener".to_owned(),
//!         name: "el1".to_owned(),
//!         uid: "2f8c6b1e".to_owned(),
//!     },
//! };
//!
//! let labels = LabelMap::from([
//!     ("x".to_owned(), "1".to_owned()),
//!     ("secret-y".to_owned(), "2".to_owned()),
//! ]);
//! let filtered = kvp::filter_labels(labels, "^secret-").unwrap();
//! let static_labels = LabelMap::from([("managed-by".to_owned(), "triggers".to_owned())]);
//!
//! let meta = listener::object_meta(&parent, filtered, &static_labels);
//! assert_eq!(meta.name.as_deref(), Some("el1-abc"));
//! assert_eq!(meta.labels.unwrap().len(), 3);
//! ```

pub mod builder;
pub mod config;
pub mod kvp;
pub mod listener;
pub mod owner;

// External re-exports
pub use k8s_openapi;
pub use kube;
