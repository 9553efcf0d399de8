//! Typed request/response pairs for the server's resource endpoints.
//!
//! Image operations are identity-scoped (the path carries the caller's
//! identifier); tag and index operations are not.

pub mod images;
pub mod indexes;
pub mod tags;

pub use images::{ListImagesRequest, UploadImageRequest};
pub use indexes::{AllIndexesRequest, CreateIndexRequest, GetIndexRequest, Index};
pub use tags::{AddTagRequest, ListTagsRequest, RemoveTagRequest};
