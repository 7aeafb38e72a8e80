//! Label maps attached to generated resources and the helpers that combine
//! them.
//!
//! Three flavours of labels flow through here: the labels the caller copied
//! from the `EventListener` (which are run through [`filter_labels`] first),
//! static labels the reconciler puts on every generated resource, and the
//! single [`EVENT_LISTENER_LABEL_KEY`] label pointing back at the listener.
use std::collections::BTreeMap;

pub mod filter;

pub use filter::{FilterError, LabelExclusion, filter_labels};

#[cfg(doc)]
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

/// The label key which carries the name of the owning `EventListener`.
pub const EVENT_LISTENER_LABEL_KEY: &str = "eventlistener";

/// An unvalidated set of Kubernetes labels, in the shape used by
/// [`ObjectMeta::labels`].
pub type LabelMap = BTreeMap<String, String>;

/// Generates the labels to be used on all generated resources.
///
/// The result is an independent copy of `static_labels` with the
/// [`EVENT_LISTENER_LABEL_KEY`] label set to `listener_name`, overwriting any
/// value `static_labels` had for that key.
///
/// `listener_name` is not validated. Passing an empty name produces an empty
/// label value, so callers have to make sure the listener is named.
pub fn generate_labels(listener_name: &str, static_labels: &LabelMap) -> LabelMap {
    let mut labels = static_labels.clone();
    labels.insert(
        EVENT_LISTENER_LABEL_KEY.to_owned(),
        listener_name.to_owned(),
    );
    labels
}

/// Merges `overrides` over `base`. On key collision the value from
/// `overrides` wins.
pub fn union_labels(base: LabelMap, overrides: LabelMap) -> LabelMap {
    let mut merged = base;
    merged.extend(overrides);
    merged
}
