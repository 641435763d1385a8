pub mod neighbors;

pub use neighbors::Neighbors;
