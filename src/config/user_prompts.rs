//! Interactive prompts used by the configuration commands

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts for the statistics provider's API domain and returns the trimmed input.
pub async fn prompt_for_api_domain() -> Result<String, AppError> {
    println!("Please enter the statistics provider API domain: ");
    let mut input = String::new();
    let mut reader = io::BufReader::new(io::stdin());
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
