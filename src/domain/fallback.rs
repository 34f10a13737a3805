use crate::domain::model::PortfolioDocument;
use crate::utils::error::Result;

/// Hand-authored document compiled into the binary.
const BUNDLED_PORTFOLIO: &str = include_str!("../../data/portfolio.json");

impl PortfolioDocument {
    /// Parses the bundled fallback document.
    pub fn bundled() -> Result<Self> {
        Ok(serde_json::from_str(BUNDLED_PORTFOLIO)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_document_parses() {
        let doc = PortfolioDocument::bundled().unwrap();

        assert_eq!(doc.hero.name, "HALIL SEKEROGLU");
        assert_eq!(doc.experience.len(), 3);
        assert_eq!(doc.projects.len(), 6);
        assert_eq!(doc.technical_expertise.len(), 4);
        assert!(!doc.skills.technical.is_empty());
        assert_eq!(doc.stats.get("certifications"), Some(&serde_json::json!(6)));
    }

    #[test]
    fn test_bundled_order_is_preserved() {
        let doc = PortfolioDocument::bundled().unwrap();

        assert_eq!(doc.experience[0].company, "Capgemini");
        assert_eq!(doc.projects[0].title, "TELUS FAQ Optimization with Playbooks");
        assert_eq!(
            doc.projects.last().unwrap().title,
            "Jenkins Pipeline Enhancement for Playbooks"
        );
    }

    #[test]
    fn test_document_uses_camel_case_keys() {
        let doc = PortfolioDocument::bundled().unwrap();
        let value = serde_json::to_value(&doc).unwrap();

        assert!(value.get("technicalExpertise").is_some());
        assert!(value.get("technical_expertise").is_none());
    }
}
