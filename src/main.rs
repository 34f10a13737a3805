use anyhow::Context;
use clap::Parser;
use portfolio_site::domain::ports::{ConfigProvider, PortfolioApi};
use portfolio_site::utils::{logger, validation::Validate};
use portfolio_site::{
    Cli, Command, ContactForm, ContactFormClient, DataSource, HttpPortfolioApi,
    PortfolioDocument, PortfolioProvider, SubmissionState,
};
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日誌
    let format = if cli.log_json {
        logger::LogFormat::Json
    } else {
        logger::LogFormat::Compact
    };
    logger::init_logger(format, cli.verbose);

    let config = cli.site_config().context("Failed to read configuration")?;
    if cli.verbose {
        tracing::debug!("Site config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let api = Arc::new(HttpPortfolioApi::new(&config).context("Failed to build HTTP client")?);

    match cli.command {
        Command::Load { json } => {
            let fallback =
                PortfolioDocument::bundled().context("Bundled portfolio data is corrupt")?;
            let provider = PortfolioProvider::new(api, fallback, config.request_timeout());
            let report = provider.load_report().await;

            if json {
                println!("{}", serde_json::to_string_pretty(&report.document)?);
            } else {
                print_summary(&report.document, report.source, &report.remote_fields);
            }
        }
        Command::Health => {
            let available = api.health_check().await?;
            if available {
                println!("✅ Backend available at {}", config.api_base_url());
            } else {
                println!("⚠️  Backend unavailable at {}", config.api_base_url());
                std::process::exit(2);
            }
        }
        Command::Project { id } => match api.project(&id).await {
            Ok(project) => println!("{}", serde_json::to_string_pretty(&project)?),
            Err(e) => {
                tracing::error!("❌ Failed to fetch project {}: {}", id, e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
        },
        Command::Messages { skip, limit } => match api.contact_messages(skip, limit).await {
            Ok(messages) => {
                for m in &messages {
                    println!("[{}] {} <{}> {}: {}", m.timestamp, m.name, m.email, m.status, m.subject);
                }
                println!("{} message(s)", messages.len());
            }
            Err(e) => {
                tracing::error!("❌ Failed to list contact messages: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
        },
        Command::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let mut client = ContactFormClient::new(
                api,
                config.request_timeout(),
                config.status_reset_delay(),
            );
            client.fill(ContactForm::new(name, email, subject, message));

            match client.submit().await {
                SubmissionState::Success => {
                    println!("✅ {}", SubmissionState::Success.message().unwrap_or_default())
                }
                state => {
                    eprintln!("❌ {}", state.message().unwrap_or_default());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn print_summary(doc: &PortfolioDocument, source: DataSource, remote_fields: &[&str]) {
    match source {
        DataSource::Backend if remote_fields.is_empty() => {
            println!("📦 Source: backend reachable, bundled data used for every field")
        }
        DataSource::Backend => println!("🌐 Source: backend ({})", remote_fields.join(", ")),
        DataSource::Bundled => println!("📦 Source: bundled data (backend unavailable)"),
    }

    println!("{} - {}", doc.hero.name, doc.hero.title);
    println!("About: {} ({})", doc.about.location, doc.about.email);
    println!("Experience ({}):", doc.experience.len());
    for entry in &doc.experience {
        println!("  - {} @ {} [{}]", entry.role, entry.company, entry.period);
    }
    println!("Projects ({}):", doc.projects.len());
    for project in &doc.projects {
        println!("  - {} ({}, {})", project.title, project.category, project.status);
    }
    println!("Technical expertise ({}):", doc.technical_expertise.len());
    for area in &doc.technical_expertise {
        println!("  - {}: {} [{}]", area.category, area.title, area.experience_level);
    }
    println!(
        "Skills: {} technical, {} platforms, {} certifications",
        doc.skills.technical.len(),
        doc.skills.platforms.len(),
        doc.skills.certifications.len()
    );
    for (key, value) in &doc.stats {
        println!("  {}: {}", key, value);
    }
    println!("Contact: {} | {}", doc.contact.email, doc.contact.availability);
}
