use super::Engine;

use async_trait::async_trait;

use crate::{api::SidebarAPI, error::Error, state::Action, views::SidebarView};

impl Engine {
    async fn dispatch_sidebar(&self, action: Option<Action>) -> SidebarView {
        let mut state = self.state.lock().await;

        if let Some(action) = action {
            state.apply(action);
        }

        SidebarView::build(&state, &self.catalog)
    }
}

#[async_trait]
impl SidebarAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_sidebar(&self) -> Result<SidebarView, Error> {
        Ok(self.dispatch_sidebar(None).await)
    }

    #[tracing::instrument(skip(self))]
    async fn toggle_sidebar(&self) -> Result<SidebarView, Error> {
        Ok(self.dispatch_sidebar(Some(Action::ToggleSidebar)).await)
    }

    #[tracing::instrument(skip(self))]
    async fn update_search_term(&self, search_term: String) -> Result<SidebarView, Error> {
        Ok(self
            .dispatch_sidebar(Some(Action::SetSearchTerm(search_term)))
            .await)
    }

    #[tracing::instrument(skip(self))]
    async fn toggle_category(&self, category_id: String) -> Result<SidebarView, Error> {
        Ok(self
            .dispatch_sidebar(Some(Action::ToggleCategory(category_id)))
            .await)
    }
}
