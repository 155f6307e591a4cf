mod fish;
mod station;

pub use fish::*;
pub use station::*;
