use tonic::transport::Channel;
use tracing::{info, warn};

use crate::comms::greeter_client::GreeterClient;
use crate::comms::HelloRequest;

pub async fn greet(client: &mut GreeterClient<Channel>, first_name: &str, last_name: &str, cin: &str) {
    info!("will try to greet {} {} (CIN: {}) ...", first_name, last_name, cin);

    let request = HelloRequest {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        cin: cin.to_string(),
    };

    let reply = match client.say_hello(tonic::Request::new(request.clone())).await {
        Ok(res) => res.into_inner(),
        Err(status) => {
            warn!("RPC failed: {}", status);
            return;
        }
    };
    info!("greeting: {}", reply.message);

    // second round trip reuses the same payload
    match client.say_hello_again(tonic::Request::new(request)).await {
        Ok(res) => info!("greeting: {}", res.into_inner().message),
        Err(status) => warn!("RPC failed: {}", status),
    };
}
