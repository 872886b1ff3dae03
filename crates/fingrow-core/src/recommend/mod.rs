pub mod allocation;
pub mod builder;
pub mod engine;
pub mod request;
pub mod selector;
