use std::sync::Arc;

use crate::backend::ContentClient;
use crate::config::Settings;
use crate::error::Result;
use crate::render::TemplateLoader;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub content_client: ContentClient,
    pub template_loader: Arc<TemplateLoader>,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self> {
        let content_client = ContentClient::new(&settings.backend)?;
        let template_loader = Arc::new(TemplateLoader::new(settings.templates.dir.clone()));

        Ok(Self {
            settings: Arc::new(settings),
            content_client,
            template_loader,
        })
    }
}
