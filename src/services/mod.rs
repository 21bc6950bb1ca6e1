mod inspector;

pub use inspector::{GrayscalePreview, InspectService};
