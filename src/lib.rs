#![doc = include_str!("../README.md")]

mod api;
mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod report;

pub use self::{
    api::{Api, Value},
    client::{Client, ACCOUNT_ID_HEADER},
    error::Error,
};

/// Contains the client, data models, and traits necessary for queries
pub mod prelude {
    pub use crate::{
        api::{Api, Value},
        client::Client,
        config::{Config, ConfigBuilder, Secret},
        error::{BuilderError, Error, RuntimeError},
        models::*,
        report::{list_projects, write_projects},
    };
}
