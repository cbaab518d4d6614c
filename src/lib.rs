pub mod cli;
pub mod greeting;

pub mod comms {
    tonic::include_proto!("helloworld");
}

use tracing_subscriber::{prelude::*, EnvFilter};

pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
