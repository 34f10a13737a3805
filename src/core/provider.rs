use crate::core::merge::{merge_fallback, RemoteFields};
use crate::domain::model::PortfolioDocument;
use crate::domain::ports::PortfolioApi;
use crate::utils::error::Result;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Where the active document came from. Informational only, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Backend answered the health check; its non-empty fields were merged in.
    Backend,
    /// Backend unavailable, bundled document served as-is.
    Bundled,
}

#[derive(Debug, Clone)]
pub struct LoadReport {
    pub document: PortfolioDocument,
    pub source: DataSource,
    /// Dynamic fields whose value came from the backend.
    pub remote_fields: Vec<&'static str>,
}

impl LoadReport {
    fn bundled(document: PortfolioDocument) -> Self {
        Self {
            document,
            source: DataSource::Bundled,
            remote_fields: Vec::new(),
        }
    }
}

/// Produces the page's document, degrading to the bundled one under any failure.
pub struct PortfolioProvider<A: PortfolioApi> {
    api: Arc<A>,
    fallback: PortfolioDocument,
    request_timeout: Duration,
}

impl<A: PortfolioApi> PortfolioProvider<A> {
    pub fn new(api: Arc<A>, fallback: PortfolioDocument, request_timeout: Duration) -> Self {
        Self {
            api,
            fallback,
            request_timeout,
        }
    }

    pub fn fallback(&self) -> &PortfolioDocument {
        &self.fallback
    }

    /// Never fails: the bundled document is the floor.
    pub async fn load(&self) -> PortfolioDocument {
        self.load_report().await.document
    }

    pub async fn load_report(&self) -> LoadReport {
        match self.try_load().await {
            Ok(report) => report,
            Err(e) => {
                tracing::error!(error = %e, "Portfolio load failed, serving bundled data");
                LoadReport::bundled(self.fallback.clone())
            }
        }
    }

    async fn try_load(&self) -> Result<LoadReport> {
        if !self.is_available().await? {
            tracing::info!("Backend unavailable, serving bundled portfolio");
            return Ok(LoadReport::bundled(self.fallback.clone()));
        }

        let (projects, experience, technical_expertise, stats) = tokio::join!(
            self.fail_soft("projects", self.api.projects(None)),
            self.fail_soft("experience", self.api.experience()),
            self.fail_soft("technical_expertise", self.api.technical_expertise(None)),
            self.fail_soft("stats", self.api.stats()),
        );

        let mut remote_fields = Vec::new();
        if !projects.is_empty() {
            remote_fields.push("projects");
        }
        if !experience.is_empty() {
            remote_fields.push("experience");
        }
        if !technical_expertise.is_empty() {
            remote_fields.push("technical_expertise");
        }
        if !stats.is_empty() {
            remote_fields.push("stats");
        }

        let document = merge_fallback(
            self.fallback.clone(),
            RemoteFields {
                projects,
                experience,
                technical_expertise,
                stats,
            },
        );

        tracing::info!(fields = ?remote_fields, "Portfolio loaded from backend");
        Ok(LoadReport {
            document,
            source: DataSource::Backend,
            remote_fields,
        })
    }

    /// Availability probe. Only a broken client surfaces as `Err`.
    async fn is_available(&self) -> Result<bool> {
        match tokio::time::timeout(self.request_timeout, self.api.health_check()).await {
            Ok(available) => available,
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.request_timeout.as_secs(),
                    "Health check timed out"
                );
                Ok(false)
            }
        }
    }

    async fn fail_soft<T, F>(&self, field: &'static str, call: F) -> T
    where
        T: Default,
        F: Future<Output = Result<T>>,
    {
        match tokio::time::timeout(self.request_timeout, call).await {
            Ok(Ok(value)) => value,
            Ok(Err(e)) => {
                tracing::warn!(field, error = %e, "Failed to fetch from backend, using bundled data");
                T::default()
            }
            Err(_) => {
                tracing::warn!(field, "Backend fetch timed out, using bundled data");
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{
        ContactForm, ContactMessageRecord, ContactReceipt, Experience, Project, RecordId, Stats,
        TechnicalExpertise,
    };
    use crate::utils::error::{PortfolioError, SubmissionError};
    use async_trait::async_trait;
    use serde_json::json;

    /// Canned backend. `None` means the call fails.
    #[derive(Default)]
    struct FakeApi {
        available: Option<bool>,
        hang_health: bool,
        projects: Option<Vec<Project>>,
        experience: Option<Vec<Experience>>,
        expertise: Option<Vec<TechnicalExpertise>>,
        stats: Option<Stats>,
    }

    fn unavailable() -> PortfolioError {
        PortfolioError::UnexpectedStatus {
            status: 503,
            endpoint: "fake".to_string(),
        }
    }

    #[async_trait]
    impl PortfolioApi for FakeApi {
        async fn health_check(&self) -> Result<bool> {
            if self.hang_health {
                std::future::pending::<()>().await;
            }
            self.available.ok_or_else(|| PortfolioError::ConfigError {
                message: "bad base url".to_string(),
            })
        }

        async fn projects(&self, _category: Option<&str>) -> Result<Vec<Project>> {
            self.projects.clone().ok_or_else(unavailable)
        }

        async fn project(&self, id: &str) -> Result<Project> {
            Err(PortfolioError::NotFound {
                resource: format!("project {}", id),
            })
        }

        async fn experience(&self) -> Result<Vec<Experience>> {
            self.experience.clone().ok_or_else(unavailable)
        }

        async fn technical_expertise(
            &self,
            _category: Option<&str>,
        ) -> Result<Vec<TechnicalExpertise>> {
            self.expertise.clone().ok_or_else(unavailable)
        }

        async fn stats(&self) -> Result<Stats> {
            self.stats.clone().ok_or_else(unavailable)
        }

        async fn submit_contact(
            &self,
            _form: &ContactForm,
        ) -> std::result::Result<Option<ContactReceipt>, SubmissionError> {
            Err(SubmissionError::Transport)
        }

        async fn contact_messages(
            &self,
            _skip: u32,
            _limit: u32,
        ) -> Result<Vec<ContactMessageRecord>> {
            Ok(Vec::new())
        }
    }

    fn provider(api: FakeApi) -> PortfolioProvider<FakeApi> {
        PortfolioProvider::new(
            Arc::new(api),
            PortfolioDocument::bundled().unwrap(),
            Duration::from_secs(10),
        )
    }

    fn project(title: &str) -> Project {
        Project {
            id: RecordId::Text(title.to_lowercase()),
            title: title.to_string(),
            description: "From the backend".to_string(),
            detailed_description: None,
            technologies: vec![],
            category: "Conversational AI".to_string(),
            status: "Production".to_string(),
            impact: None,
            client: None,
            duration: None,
            team_size: Some(4),
            role: None,
            challenges: None,
            solutions: None,
        }
    }

    #[tokio::test]
    async fn test_unavailable_backend_returns_bundled_document() {
        let provider = provider(FakeApi {
            available: Some(false),
            projects: Some(vec![project("Ignored")]),
            ..FakeApi::default()
        });

        let report = provider.load_report().await;

        assert_eq!(report.source, DataSource::Bundled);
        assert_eq!(&report.document, provider.fallback());
        assert!(report.remote_fields.is_empty());
    }

    #[tokio::test]
    async fn test_all_field_calls_failing_equals_bundled_document() {
        let provider = provider(FakeApi {
            available: Some(true),
            ..FakeApi::default()
        });

        let report = provider.load_report().await;

        assert_eq!(report.source, DataSource::Backend);
        assert_eq!(&report.document, provider.fallback());
    }

    #[tokio::test]
    async fn test_single_successful_field_is_the_only_difference() {
        let provider = provider(FakeApi {
            available: Some(true),
            projects: Some(vec![project("Alpha"), project("Beta")]),
            ..FakeApi::default()
        });
        let fallback = provider.fallback().clone();

        let report = provider.load_report().await;
        let doc = report.document;

        assert_eq!(report.remote_fields, vec!["projects"]);
        assert_eq!(doc.projects, vec![project("Alpha"), project("Beta")]);
        assert_eq!(doc.experience, fallback.experience);
        assert_eq!(doc.technical_expertise, fallback.technical_expertise);
        assert_eq!(doc.stats, fallback.stats);
        assert_eq!(doc.hero, fallback.hero);
        assert_eq!(doc.about, fallback.about);
        assert_eq!(doc.skills, fallback.skills);
        assert_eq!(doc.contact, fallback.contact);
    }

    #[tokio::test]
    async fn test_empty_remote_sequences_keep_bundled_entries() {
        let provider = provider(FakeApi {
            available: Some(true),
            projects: Some(vec![]),
            experience: Some(vec![]),
            expertise: Some(vec![]),
            stats: Some(Stats::new()),
            ..FakeApi::default()
        });

        let doc = provider.load().await;

        assert_eq!(&doc, provider.fallback());
    }

    #[tokio::test]
    async fn test_remote_stats_shallow_merged() {
        let remote_stats = match json!({"total_projects": 12, "years_experience": 5}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        let provider = provider(FakeApi {
            available: Some(true),
            stats: Some(remote_stats),
            ..FakeApi::default()
        });

        let doc = provider.load().await;

        assert_eq!(doc.stats.get("total_projects"), Some(&json!(12)));
        assert_eq!(doc.stats.get("years_experience"), Some(&json!(5)));
        assert_eq!(doc.stats.get("specialization"), Some(&json!("CCAI & Dialogflow CX")));
    }

    #[tokio::test]
    async fn test_broken_client_degrades_to_bundled_document() {
        let provider = provider(FakeApi {
            available: None,
            ..FakeApi::default()
        });

        let report = provider.load_report().await;

        assert_eq!(report.source, DataSource::Bundled);
        assert_eq!(&report.document, provider.fallback());
    }

    #[tokio::test(start_paused = true)]
    async fn test_hanging_health_check_times_out() {
        let provider = provider(FakeApi {
            available: Some(true),
            hang_health: true,
            projects: Some(vec![project("Ignored")]),
            ..FakeApi::default()
        });

        let report = provider.load_report().await;

        assert_eq!(report.source, DataSource::Bundled);
        assert_eq!(&report.document, provider.fallback());
    }
}
