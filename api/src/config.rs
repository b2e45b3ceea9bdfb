use std::env;
use std::time::Duration;

use crate::app::DisplayOverrides;

#[derive(Clone)]
pub struct Config {
    /// Listen port
    pub port: u16,
    /// Base URL of the GitHub-compatible REST API
    pub github_api_url: String,
    /// Account whose activity is aggregated
    pub github_username: String,
    /// Optional token; unauthenticated requests are limited to 60/hour
    pub github_token: Option<String>,
    /// Deadline for each upstream GitHub request
    pub github_timeout: Duration,
    /// Language that always appears in the language breakdown
    pub designated_language: String,
    /// Display overrides for the follower/following counters
    pub overrides: DisplayOverrides,
    /// SMTP relay host
    pub smtp_host: String,
    pub email_user: String,
    pub email_pass: String,
    /// The one fixed recipient of contact submissions
    pub receiver_email: String,
    /// Rate limit POST /api/contact per peer IP
    pub contact_rate_limit: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            github_api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            github_username: env::var("GITHUB_USERNAME")
                .unwrap_or_else(|_| "Tharunk043".to_string()),
            github_token: env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
            github_timeout: Duration::from_secs(
                parse_count("GITHUB_TIMEOUT_SECS")
                    .filter(|secs| *secs > 0)
                    .unwrap_or(10),
            ),
            designated_language: env::var("DESIGNATED_LANGUAGE")
                .unwrap_or_else(|_| "Java".to_string()),
            overrides: DisplayOverrides {
                followers: parse_count("FOLLOWERS_OVERRIDE"),
                following: parse_count("FOLLOWING_OVERRIDE"),
            },
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            email_user: env::var("EMAIL_USER").unwrap_or_default(),
            email_pass: env::var("EMAIL_PASS").unwrap_or_default(),
            receiver_email: env::var("RECEIVER_EMAIL").unwrap_or_default(),
            contact_rate_limit: env::var("CONTACT_RATE_LIMIT")
                .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "off"))
                .unwrap_or(true),
        }
    }

    /// Check if SMTP credentials are configured
    pub fn smtp_configured(&self) -> bool {
        !self.email_user.is_empty() && !self.email_pass.is_empty()
    }
}

fn parse_count(key: &str) -> Option<u64> {
    match env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(n) => Some(n),
            Err(_) => {
                tracing::warn!("Ignoring {}={:?}: not a non-negative integer", key, raw);
                None
            }
        },
        Err(_) => None,
    }
}
