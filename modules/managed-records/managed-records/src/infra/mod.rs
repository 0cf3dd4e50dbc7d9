pub mod http_transport;
pub mod url_builder;

pub use http_transport::HttpRecordsTransport;
