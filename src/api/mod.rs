pub mod gender;
pub mod pages;

pub use gender::{handle_gender, handle_gender_form, __path_handle_gender};
pub use pages::{handle_base, handle_faceapp, handle_index};
