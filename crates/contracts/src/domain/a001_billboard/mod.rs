pub mod aggregate;
pub mod columns;
