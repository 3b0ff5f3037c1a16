use std::io;

use cooking_agent::{Console, HttpModelClient, ModelClient};
use log::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // A broken config file should not stop the local features from working
    let client: Option<Box<dyn ModelClient>> = match HttpModelClient::from_env() {
        Ok(client) => {
            info!("Model client configured: {}", client.configured());
            Some(Box::new(client))
        }
        Err(e) => {
            error!("Could not set up the model client: {}", e);
            None
        }
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), client);
    console.run()?;
    Ok(())
}
