use std::io;
use std::sync::mpsc;

use smsgh_vas::{GatewayError, MobileNumber, ProviderBody, UtilityOperation, UtilityServices};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
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
    let device = std::env::var("SMSGH_DEVICE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSGH_DEVICE environment variable is required",
        )
    })?;
    let amount = std::env::var("SMSGH_AMOUNT")
        .ok()
        .and_then(|value| value.parse::<u32>().ok())
        .unwrap_or(5);

    let client = UtilityServices::new(auth, token)?;
    let device = MobileNumber::parse(device)?;
    let operation = UtilityOperation::bundle_surfline_plus(device.as_str(), amount)?;

    let (tx, rx) = mpsc::channel();
    client
        .dispatch(
            operation,
            Some(Box::new(move |result: Result<ProviderBody, GatewayError>| {
                let _ = tx.send(result);
            })),
        )?
        .await;

    match rx.recv()? {
        Ok(body) => println!("purchased: {}", body.as_str()),
        Err(err) => println!("failed: {err}"),
    }

    Ok(())
}
