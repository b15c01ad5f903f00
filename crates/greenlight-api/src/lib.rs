pub mod http;
pub mod metrics;
pub mod server;
pub mod validate;

pub use server::ApiServer;
