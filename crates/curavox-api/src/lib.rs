#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

mod client;
mod error;
mod http;
mod models;

pub use client::{DefaultSearchClient, SearchClient};
pub use http::{HttpBackend, ReqwestBackend};
pub use models::ApiConfig;
