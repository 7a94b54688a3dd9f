pub mod impl_fake;
pub mod impl_tract_onnx;
pub mod impl_unavailable;
pub mod interface;
pub mod models;
pub mod tract;
