use crate::core::contact::ContactFormClient;
use crate::core::provider::{DataSource, PortfolioProvider};
use crate::domain::model::PortfolioDocument;
use crate::domain::ports::{ConfigProvider, PortfolioApi};
use std::sync::Arc;

/// One page view: the active document plus the contact form mounted under it.
///
/// The document is loaded once on mount and handed out read-only. `reload` swaps
/// in a fresh document wholesale. Dropping the site tears down the form and its
/// pending status reset.
pub struct PortfolioSite<A: PortfolioApi> {
    provider: PortfolioProvider<A>,
    document: Arc<PortfolioDocument>,
    source: DataSource,
    contact: ContactFormClient<A>,
}

impl<A: PortfolioApi> PortfolioSite<A> {
    pub async fn mount<C: ConfigProvider>(
        api: Arc<A>,
        fallback: PortfolioDocument,
        config: &C,
    ) -> Self {
        let provider = PortfolioProvider::new(Arc::clone(&api), fallback, config.request_timeout());
        let contact = ContactFormClient::new(
            api,
            config.request_timeout(),
            config.status_reset_delay(),
        );

        tracing::info!("Loading portfolio...");
        let report = provider.load_report().await;
        tracing::info!(
            source = ?report.source,
            projects = report.document.projects.len(),
            experience = report.document.experience.len(),
            "Portfolio ready"
        );

        Self {
            provider,
            document: Arc::new(report.document),
            source: report.source,
            contact,
        }
    }

    pub fn document(&self) -> Arc<PortfolioDocument> {
        Arc::clone(&self.document)
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    pub async fn reload(&mut self) -> Arc<PortfolioDocument> {
        let report = self.provider.load_report().await;
        self.document = Arc::new(report.document);
        self.source = report.source;
        self.document()
    }

    pub fn contact(&mut self) -> &mut ContactFormClient<A> {
        &mut self.contact
    }
}
