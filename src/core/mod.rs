pub mod contact;
pub mod merge;
pub mod provider;
pub mod site;

pub use crate::domain::model::PortfolioDocument;
pub use crate::domain::ports::{ConfigProvider, PortfolioApi};
pub use crate::utils::error::Result;
