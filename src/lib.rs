//! ns-api-rs: async client for the Nederlandse Spoorwegen webservices.
//!
//! Wraps the five NS endpoints (fares, live departure times, disruptions and
//! engineering work, the station list, and the trip planner) behind typed
//! calls. Every call performs one authenticated GET and returns the response
//! body as an owned XML [`Document`] for the caller to navigate.
//!
//! ```rust,no_run
//! use ns_api_rs::NsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NsClient::new("username", "password")?;
//!
//!     let departures = client.departures("Zwolle").await?;
//!     println!("{} child nodes", departures.children.len());
//!
//!     let advice = client.travel_advice("Kampen", "Zwolle").fetch().await?;
//!     println!("root element: {}", advice.name);
//!     Ok(())
//! }
//! ```
//!
//! The station list endpoint returns a large body; look it up once and keep
//! the result around rather than calling [`NsClient::stations`] per request.

pub mod advice;
pub mod core;
pub mod departures;
pub mod disruptions;
pub mod prices;
pub mod stations;

pub use advice::TravelAdviceBuilder;
pub use core::{Document, NsClient, NsClientBuilder, NsError};
pub use disruptions::DisruptionsBuilder;
pub use prices::PricesBuilder;
