use pathshala_content::{ContentLoader, Registry, integrity};

use crate::{ApiConfig, config::Environment};

#[derive(Clone, Debug)]
pub struct ApiState {
    pub content: ContentLoader,
    pub environment: Environment,
}

impl ApiState {
    /// Load the bundled curriculum.
    ///
    /// In development the content is also run through the integrity pass;
    /// every defect found is logged but none stops start-up.
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let registry = Registry::load()?;

        tracing::info!(
            topics = registry.topics().len(),
            units = registry.unit_count(),
            problems = registry.problem_count(),
            "Content registry loaded"
        );

        if config.env.is_development() {
            let issues = integrity::check(registry.topics());
            for issue in &issues {
                tracing::warn!("Content integrity: {issue}");
            }
            if issues.is_empty() {
                tracing::debug!("Content integrity check passed");
            }
        }

        Ok(Self::from_loader(ContentLoader::new(registry), config.env.clone()))
    }

    pub const fn from_loader(content: ContentLoader, environment: Environment) -> Self {
        Self {
            content,
            environment,
        }
    }
}
