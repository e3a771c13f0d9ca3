use clap::Parser;
use nearby_store::mongo::MongoConfig;

/// Server options, fixed at startup.
#[derive(Parser, Debug)]
#[command(name = "nearby-api")]
#[command(about = "HTTP service over a geospatially indexed record store", long_about = None)]
#[command(version)]
pub struct ServerOptions {
    /// Run on the given port
    #[arg(long, default_value_t = 8888)]
    pub port: u16,

    /// Connect to the MongoDB instance on the given host
    #[arg(long, default_value = "mongo-db")]
    pub store_host: String,

    /// Connect to the MongoDB instance on the given port
    #[arg(long, default_value_t = 27017)]
    pub store_port: u16,
}

impl ServerOptions {
    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn store_config(&self) -> MongoConfig {
        MongoConfig::new(&self.store_host, self.store_port)
    }
}
