//! The queryable EXIF store and the ways to build one.
//!
//! - [`ExifData`]: immutable map from (directory, tag) to [`Entry`](crate::Entry)
//! - [`Gps`]: signed coordinates derived from the GPS directory
//! - [`ExifLoader`]: chunked loading from JPEG, EXIF block or TIFF streams

mod gps;
mod loader;
mod store;

pub use gps::{Gps, Location};
pub use loader::{ExifLoader, FeedStatus, LoaderState, DEFAULT_CHUNK_SIZE};
pub use store::{ExifData, IfdTag};
