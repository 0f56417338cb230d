pub mod suppliers;
pub mod system;
