//! Canonical request envelope: endpoint descriptors, pagination policy and the builder.

mod builder;
pub use self::builder::{build_envelope, PaginationBlock, RequestEnvelope};

mod endpoint;
pub use self::endpoint::{BodyKind, Channel, Endpoint, EndpointDescriptor, PaginationPolicy};
