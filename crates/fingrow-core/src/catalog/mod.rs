pub mod product;

#[cfg(feature = "finlife")]
pub mod finlife;

#[cfg(feature = "search")]
pub mod search;
