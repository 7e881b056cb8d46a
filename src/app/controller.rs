use super::tool_state::ToolState;
use super::view::AppView;
use crate::chat::ChatSession;
use crate::contracts::{
    BrandNameSuggestion, ContentKind, DesignSystem, MarketingContent, SentimentResult, Tone,
};
use crate::error::BrandError;
use crate::orchestration::BrandService;

/// Navigation plus the per-tool state behind each screen.
///
/// Every tool owns its state outright; nothing is shared across tools.
/// Entering a tool mounts it with fresh state, leaving it discards that
/// state. For the consultant that means the chat session is created on entry
/// and dropped on exit, so re-entering always starts a new conversation.
pub struct BrandApp {
    service: BrandService,
    view: AppView,
    names: ToolState<Vec<BrandNameSuggestion>>,
    logo: ToolState<Option<String>>,
    content: ToolState<MarketingContent>,
    sentiment: ToolState<SentimentResult>,
    design: ToolState<DesignSystem>,
    consultant: Option<ChatSession>,
}

impl BrandApp {
    pub fn new(service: BrandService) -> Self {
        Self {
            service,
            view: AppView::Home,
            names: ToolState::default(),
            logo: ToolState::default(),
            content: ToolState::default(),
            sentiment: ToolState::default(),
            design: ToolState::default(),
            consultant: None,
        }
    }

    pub fn view(&self) -> AppView {
        self.view
    }

    pub fn navigate(&mut self, view: AppView) {
        if view == self.view {
            return;
        }
        tracing::debug!(from = %self.view, to = %view, "Navigating");
        self.unmount(self.view);
        self.mount(view);
        self.view = view;
    }

    fn mount(&mut self, view: AppView) {
        match view {
            AppView::Home => {}
            AppView::Names => self.names.reset(),
            AppView::Logo => self.logo.reset(),
            AppView::Content => self.content.reset(),
            AppView::Sentiment => self.sentiment.reset(),
            AppView::Design => self.design.reset(),
            AppView::Consultant => self.consultant = Some(self.service.start_chat()),
        }
    }

    fn unmount(&mut self, view: AppView) {
        match view {
            AppView::Home => {}
            AppView::Names => self.names.reset(),
            AppView::Logo => self.logo.reset(),
            AppView::Content => self.content.reset(),
            AppView::Sentiment => self.sentiment.reset(),
            AppView::Design => self.design.reset(),
            AppView::Consultant => self.consultant = None,
        }
    }

    fn require_view(&self, expected: AppView) -> Result<(), BrandError> {
        if self.view == expected {
            Ok(())
        } else {
            Err(BrandError::precondition(format!(
                "{} is not the active tool (current view: {})",
                expected.title(),
                self.view.title()
            )))
        }
    }

    pub fn names(&self) -> &ToolState<Vec<BrandNameSuggestion>> {
        &self.names
    }

    pub fn logo(&self) -> &ToolState<Option<String>> {
        &self.logo
    }

    pub fn content(&self) -> &ToolState<MarketingContent> {
        &self.content
    }

    pub fn sentiment(&self) -> &ToolState<SentimentResult> {
        &self.sentiment
    }

    pub fn design(&self) -> &ToolState<DesignSystem> {
        &self.design
    }

    /// The live conversation, present only while the consultant is mounted.
    pub fn consultant(&self) -> Option<&ChatSession> {
        self.consultant.as_ref()
    }

    pub async fn submit_names(
        &mut self,
        industry: &str,
        keywords: &str,
        tone: Tone,
    ) -> Result<&[BrandNameSuggestion], BrandError> {
        self.require_view(AppView::Names)?;
        let flight = self.names.begin()?;
        let outcome = self
            .service
            .generate_brand_names(industry, keywords, tone)
            .await;
        flight.finish(outcome).map(Vec::as_slice)
    }

    pub async fn submit_logo(&mut self, description: &str) -> Result<Option<&str>, BrandError> {
        self.require_view(AppView::Logo)?;
        let flight = self.logo.begin()?;
        let outcome = self.service.generate_logo(description).await;
        flight.finish(outcome).map(Option::as_deref)
    }

    pub async fn submit_content(
        &mut self,
        kind: ContentKind,
        brand_name: &str,
        brand_details: &str,
    ) -> Result<&MarketingContent, BrandError> {
        self.require_view(AppView::Content)?;
        let flight = self.content.begin()?;
        let outcome = self
            .service
            .generate_marketing_content(kind, brand_name, brand_details)
            .await
            .map(|text| MarketingContent { kind, text });
        flight.finish(outcome)
    }

    pub async fn submit_sentiment(&mut self, reviews: &str) -> Result<&SentimentResult, BrandError> {
        self.require_view(AppView::Sentiment)?;
        let flight = self.sentiment.begin()?;
        let outcome = self.service.analyze_sentiment(reviews).await;
        flight.finish(outcome)
    }

    pub async fn submit_design(&mut self, personality: &str) -> Result<&DesignSystem, BrandError> {
        self.require_view(AppView::Design)?;
        let flight = self.design.begin()?;
        let outcome = self.service.generate_design_system(personality).await;
        flight.finish(outcome)
    }

    pub async fn send_chat(&mut self, message: &str) -> Result<String, BrandError> {
        let session = self.consultant.as_mut().ok_or_else(|| {
            BrandError::precondition("the consultant is not active; navigate to it first")
        })?;
        session.send(message).await
    }
}
