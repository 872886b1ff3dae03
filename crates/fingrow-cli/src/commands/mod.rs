pub mod catalog;
pub mod maturity;
pub mod recommend;
pub mod risk;
