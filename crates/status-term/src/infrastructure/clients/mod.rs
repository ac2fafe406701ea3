pub mod http;

use anyhow::Result;

use crate::domain::models::CheckerBox;

pub struct CheckerManager {}

impl CheckerManager {
    pub fn get() -> Result<CheckerBox> {
        return Ok(Box::new(http::HttpChecker::from_config()?));
    }
}
