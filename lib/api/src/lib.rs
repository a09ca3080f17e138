pub mod rest;

pub use rest::{ApiConfig, RestApi};
