use crate::domain::model::{
    ContactForm, ContactMessageRecord, ContactReceipt, Experience, Project, Stats,
    TechnicalExpertise,
};
use crate::domain::ports::{ConfigProvider, PortfolioApi};
use crate::utils::error::{PortfolioError, Result, SubmissionError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

/// `PortfolioApi` over REST/JSON.
pub struct HttpPortfolioApi {
    client: Client,
    base_url: String,
}

impl HttpPortfolioApi {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!(
            "{}/{}",
            self.base_url,
            path.trim_start_matches('/')
        ))?)
    }

    async fn send(&self, request: RequestBuilder, endpoint: &Url) -> Result<Response> {
        tracing::debug!("API request: {}", endpoint);
        let response = request.send().await?;
        tracing::debug!("API response: {} {}", response.status(), endpoint);
        Ok(response)
    }

    /// `portfolio/projects/{id}` with the id kept as one path segment.
    fn project_endpoint(&self, id: &str) -> Result<Url> {
        // `.` and `..` would be dropped by the url crate and hit the listing
        if matches!(id, "" | "." | "..") {
            return Err(PortfolioError::NotFound {
                resource: format!("project '{}'", id),
            });
        }

        let mut endpoint = self.endpoint("portfolio/projects")?;
        endpoint
            .path_segments_mut()
            .map_err(|_| PortfolioError::ConfigError {
                message: format!("{} cannot be used as a base URL", self.base_url),
            })?
            .push(id);
        Ok(endpoint)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let endpoint = self.endpoint(path)?;
        self.get_json_at(endpoint, query).await
    }

    async fn get_json_at<T: DeserializeOwned>(
        &self,
        endpoint: Url,
        query: &[(&str, String)],
    ) -> Result<T> {
        let request = self.client.get(endpoint.clone()).query(query);
        let response = self.send(request, &endpoint).await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(PortfolioError::NotFound {
                resource: endpoint.path().to_string(),
            });
        }
        if !status.is_success() {
            return Err(PortfolioError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        // decode separately so a wrong shape reports as a serialization error
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn category_filter(category: Option<&str>) -> Vec<(&'static str, String)> {
    category
        .map(|c| vec![("category", c.to_string())])
        .unwrap_or_default()
}

#[async_trait]
impl PortfolioApi for HttpPortfolioApi {
    async fn health_check(&self) -> Result<bool> {
        let endpoint = self.endpoint("health")?;
        match self.send(self.client.get(endpoint.clone()), &endpoint).await {
            Ok(response) if response.status().is_success() => Ok(true),
            Ok(response) => {
                tracing::warn!(status = %response.status(), "Backend health check failed");
                Ok(false)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Backend is not available");
                Ok(false)
            }
        }
    }

    async fn projects(&self, category: Option<&str>) -> Result<Vec<Project>> {
        self.get_json("portfolio/projects", &category_filter(category))
            .await
    }

    async fn project(&self, id: &str) -> Result<Project> {
        let endpoint = self.project_endpoint(id)?;
        self.get_json_at(endpoint, &[]).await
    }

    async fn experience(&self) -> Result<Vec<Experience>> {
        self.get_json("portfolio/experience", &[]).await
    }

    async fn technical_expertise(&self, category: Option<&str>) -> Result<Vec<TechnicalExpertise>> {
        self.get_json("portfolio/expertise", &category_filter(category))
            .await
    }

    async fn stats(&self) -> Result<Stats> {
        self.get_json("portfolio/stats", &[]).await
    }

    async fn submit_contact(
        &self,
        form: &ContactForm,
    ) -> std::result::Result<Option<ContactReceipt>, SubmissionError> {
        let endpoint = self.endpoint("contact/").map_err(|e| {
            tracing::error!(error = %e, "Contact endpoint is not a valid URL");
            SubmissionError::Transport
        })?;

        let response = self
            .send(self.client.post(endpoint.clone()).json(form), &endpoint)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Contact submission failed in transport");
                SubmissionError::Transport
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "Contact submission rejected");
            return Err(SubmissionError::from_status(status.as_u16()));
        }

        Ok(response.json::<ContactReceipt>().await.ok())
    }

    async fn contact_messages(&self, skip: u32, limit: u32) -> Result<Vec<ContactMessageRecord>> {
        self.get_json(
            "contact/",
            &[("skip", skip.to_string()), ("limit", limit.to_string())],
        )
        .await
    }
}
