use crate::domain::model::{
    ContactForm, ContactMessageRecord, ContactReceipt, Experience, Project, Stats,
    TechnicalExpertise,
};
use crate::utils::error::{Result, SubmissionError};
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    /// Base of every API path, e.g. `http://localhost:8001/api`.
    fn api_base_url(&self) -> &str;
    /// Upper bound for any single outbound call.
    fn request_timeout(&self) -> Duration;
    /// How long a submission outcome stays visible before the form returns to idle.
    fn status_reset_delay(&self) -> Duration;
}

/// The remote portfolio service.
///
/// `health_check` reports availability as a boolean: unreachable, slow or non-2xx
/// backends are `Ok(false)`. An `Err` means the client itself is broken (bad base
/// URL and the like).
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    async fn health_check(&self) -> Result<bool>;

    async fn projects(&self, category: Option<&str>) -> Result<Vec<Project>>;
    async fn project(&self, id: &str) -> Result<Project>;
    async fn experience(&self) -> Result<Vec<Experience>>;
    async fn technical_expertise(&self, category: Option<&str>) -> Result<Vec<TechnicalExpertise>>;
    async fn stats(&self) -> Result<Stats>;

    /// `Ok(None)` when the backend accepted the message but its reply could not be read.
    async fn submit_contact(
        &self,
        form: &ContactForm,
    ) -> std::result::Result<Option<ContactReceipt>, SubmissionError>;
    async fn contact_messages(&self, skip: u32, limit: u32) -> Result<Vec<ContactMessageRecord>>;
}
