//! Request handlers.
//!
//! Handlers are thin: they extract the request, hand plain-text identifiers
//! to the engine or repositories, and wrap the result in [`DataResponse`].
//! All identifier parsing happens in `draftroom_core::identifier`.
//!
//! [`DataResponse`]: crate::response::DataResponse

pub mod draft;
pub mod franchise;
pub mod picks;
pub mod prospects;
pub mod trade;
