use std::time::Duration;

use reqwest::Client;

pub const USER_AGENT: &str = concat!("xkcd/", env!("CARGO_PKG_VERSION"));

pub fn build_client(timeout_secs: u64) -> crate::error::Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()?;
    Ok(client)
}
