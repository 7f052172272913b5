use serde::{Deserialize, Serialize};

pub const WELCOME_MESSAGE: &str = "Welcome to the Ingredient Analyzer API";

#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
