use std::io;

use smsgh_vas::UtilityServices;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let auth = std::env::var("SMSGH_BASIC_AUTH").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSGH_BASIC_AUTH environment variable is required",
        )
    })?;
    let token = std::env::var("SMSGH_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSGH_TOKEN environment variable is required",
        )
    })?;

    let client = UtilityServices::new(auth, token)?;
    let body = client.get_account_balance().await?;
    println!("balance: {}", body.as_str());

    Ok(())
}
