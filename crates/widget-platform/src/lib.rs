//! Browser adapters for the widget-core ports: session-scoped storage via
//! web-sys and the remote answer client via gloo-net.

pub mod http;
pub mod storage;
