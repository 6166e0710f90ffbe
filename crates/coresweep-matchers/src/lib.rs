pub mod layout;
pub mod scan;

pub use layout::{
    LayoutDescriptor, NameSource, extract_artifacts, nx_core_layouts, xr_dir_layouts,
};
pub use scan::{ArtifactScanner, MarkerScanner, OutputScanner, ScanReport};
