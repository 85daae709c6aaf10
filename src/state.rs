use crate::config::AppConfig;
use crate::services::email::EmailProvider;
use crate::services::template::TemplateRenderer;

pub struct AppState {
    pub config: AppConfig,
    pub email: Box<dyn EmailProvider>,
    pub templates: TemplateRenderer,
}
