#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unnecessary_literal_bound,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod app;
pub mod chat;
pub mod cli;
pub mod config;
pub mod contracts;
pub mod error;
pub mod llm;
pub mod orchestration;
pub mod ui;

pub use app::{AppView, BrandApp};
pub use chat::ChatSession;
pub use config::Config;
pub use error::BrandError;
pub use orchestration::BrandService;
