//! Builders for the Kubernetes objects which are attached to generated
//! resources.
pub mod meta;
