//! Host-side pixel I/O: image decoding, preview mapping and crop export.

pub mod crop;
pub mod io;
pub mod preview;

pub use self::crop::{crop_and_save, output_file_name, SavedCrop};
pub use self::preview::{fit_preview, SourceMapper, SourceRect};
