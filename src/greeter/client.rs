extern crate greeter_lib;
use greeter_lib::cli::{self, GreetArgs, Invocation};
use greeter_lib::comms::greeter_client::GreeterClient;
use greeter_lib::greeting::greet;

use std::env;
use std::process;

use tokio::time::Duration;
use tonic::transport::Endpoint;

fn main() -> anyhow::Result<()> {
    let args = match cli::parse(env::args().skip(1)) {
        Invocation::Help => {
            eprint!("{}", cli::usage());
            process::exit(1);
        }
        Invocation::Run(args) => args,
    };

    greeter_lib::init_logging();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let outcome = rt.block_on(run(args));

    // stop taking new work, then give anything in flight up to 5s to drain
    rt.shutdown_timeout(Duration::from_secs(5));
    outcome
}

async fn run(args: GreetArgs) -> anyhow::Result<()> {
    let endpoint = Endpoint::from_shared(args.endpoint())?;

    // plaintext on purpose: this example carries no TLS configuration.
    // connect_lazy means a dead server surfaces as a failed first call,
    // not as a connect error here.
    let channel = endpoint.connect_lazy();
    let mut client = GreeterClient::new(channel);

    greet(&mut client, &args.first_name, &args.last_name, &args.cin).await;
    Ok(())
}
