pub mod calculate;
pub mod info;
pub mod interactive;
