//! TikHub API client
//!
//! `GET {baseUrl}/tools` lists tools, `POST {baseUrl}/tools/call` invokes one.
//! Both carry `Authorization: Bearer <token>` and a JSON content type.

mod error;
mod traits;
mod http;
mod mock;

pub use error::{TikHubError, TikHubResult};
pub use traits::TikHubApi;
pub use http::HttpClient;
pub use mock::{MockApi, MockCallMode};
