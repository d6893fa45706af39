pub mod a001_billboard;
pub mod a002_category;
pub mod a003_size;
pub mod a004_color;
pub mod a005_product;
pub mod a006_order;
pub mod common;
