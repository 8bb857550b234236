#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod error;
mod exercise;
mod name;
mod periodization;
mod profile;
mod progression;
mod service;
mod training;
mod weight;
mod workout;

pub use catalog::{build_catalog, catalog, resolve_alternatives};
pub use error::*;
pub use exercise::*;
pub use name::*;
pub use periodization::*;
pub use profile::*;
pub use progression::*;
pub use service::*;
pub use training::*;
pub use weight::*;
pub use workout::*;
