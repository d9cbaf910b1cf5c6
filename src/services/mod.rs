pub mod hash;
pub mod wish_selector;
pub mod wishes;
