//! Query parameter types for the list endpoints.
//!
//! Characters and starships search on `name`, films on `title`. Both shapes
//! validate `skip` / `limit` before they reach the repository layer, which
//! clamps them again for direct library callers.

use holocron_core::error::CoreError;
use holocron_core::pagination::{PageRequest, MAX_LIMIT};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;

/// `?skip=&limit=&name=`
#[derive(Debug, Default, Deserialize, Validate)]
pub struct NameSearchParams {
    #[validate(range(min = 0, message = "skip must be zero or greater"))]
    pub skip: Option<i64>,
    #[validate(range(min = 0, max = MAX_LIMIT, message = "limit must be between 0 and 100"))]
    pub limit: Option<i64>,
    pub name: Option<String>,
}

impl NameSearchParams {
    pub fn into_page_request(self) -> AppResult<PageRequest> {
        check(&self)?;
        Ok(PageRequest::new(self.skip, self.limit, self.name))
    }
}

/// `?skip=&limit=&title=`
#[derive(Debug, Default, Deserialize, Validate)]
pub struct TitleSearchParams {
    #[validate(range(min = 0, message = "skip must be zero or greater"))]
    pub skip: Option<i64>,
    #[validate(range(min = 0, max = MAX_LIMIT, message = "limit must be between 0 and 100"))]
    pub limit: Option<i64>,
    pub title: Option<String>,
}

impl TitleSearchParams {
    pub fn into_page_request(self) -> AppResult<PageRequest> {
        check(&self)?;
        Ok(PageRequest::new(self.skip, self.limit, self.title))
    }
}

fn check(params: &impl Validate) -> Result<(), CoreError> {
    params
        .validate()
        .map_err(|errors| CoreError::Validation(errors.to_string()))
}
