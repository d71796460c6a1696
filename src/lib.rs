pub mod client;
pub mod console;
pub mod controller;
pub mod error;
pub mod form;
pub mod model;
pub mod render;
pub mod request;
pub mod util;

#[macro_use]
extern crate log;

pub use client::{Created, PromotionClient, PromotionClientConfig, PromotionClientConfigBuilder};
pub use controller::{Action, FormController, Outcome};
pub use error::{AdminResult, Error};
pub use form::{Field, PromotionForm};
pub use model::promotion::{Promotion, PromotionBody};
