pub mod checkbox;
pub mod field_error;
pub mod image_upload;
pub mod input;
pub mod select;

pub use checkbox::Checkbox;
pub use field_error::{field_error_signal, FieldError};
pub use image_upload::ImageUpload;
pub use input::Input;
pub use select::Select;
