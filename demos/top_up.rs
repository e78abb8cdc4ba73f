use std::io;

use smsgh_vas::{CreditTopUp, LineType, TopUpRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("SMSGH_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSGH_API_KEY environment variable is required",
        )
    })?;
    let phone = std::env::var("SMSGH_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSGH_PHONE environment variable is required",
        )
    })?;
    let network = std::env::var("SMSGH_NETWORK").unwrap_or_else(|_| "mtn".to_owned());
    let method = std::env::var("SMSGH_METHOD").unwrap_or_else(|_| "GET".to_owned());

    let client = CreditTopUp::new(api_key)?;
    let request = TopUpRequest::new(phone, network, LineType::Prepaid, 1).method(method);

    let response = client.top_it_up(request).await?;
    println!("status: {}, body: {}", response.status, response.body);

    Ok(())
}
