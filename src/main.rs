use clap::Parser;
use counsel_chat::Cli;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    counsel_chat::run(cli).await
}
