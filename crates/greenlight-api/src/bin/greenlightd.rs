use std::io;

use greenlight_api::ApiServer;

fn main() -> io::Result<()> {
    let addr =
        std::env::var("GREENLIGHT_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8799".to_string());
    let server = ApiServer::from_env()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    server.serve_http(&addr)
}
