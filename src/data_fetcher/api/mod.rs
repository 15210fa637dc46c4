pub mod client;
mod endpoints;
pub mod fetch_utils;
pub mod http_client;
mod pagination;
pub mod urls;

pub use client::FrcClient;
pub use fetch_utils::{fetch_local, fetch_network, request_headers, text_format_for};
pub use http_client::{HttpTransport, Transport, TransportResponse};
pub use pagination::page_total;
pub use urls::{base_url, build_query, build_url};
