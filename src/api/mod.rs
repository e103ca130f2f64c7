pub mod client;
pub mod results;
pub mod wcif;

pub use client::{ApiError, WcaClient};
pub use results::Podium;
