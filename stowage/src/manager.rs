use anyhow::{Context, Result};
use log::info;

use crate::entities::{Container, FitResult, Item, PackingSession};
use crate::geometry::primitives::Point;
use crate::util::PackConfig;

/// Thin orchestration layer owning the session bound to the currently
/// selected container.
///
/// Operations issued with no container selected are precondition violations
/// and are rejected here, before reaching a session; an infeasible placement
/// (`NoFit`) is not an error and flows through as a normal result.
#[derive(Clone, Debug, Default)]
pub struct SessionManager {
    config: PackConfig,
    session: Option<PackingSession>,
}

impl SessionManager {
    pub fn new(config: PackConfig) -> Self {
        SessionManager {
            config,
            session: None,
        }
    }

    /// Binds a session to `container`. Selecting a different container
    /// replaces the session entirely; re-selecting the current container
    /// keeps the packed state.
    pub fn select_container(&mut self, container: Container) -> &PackingSession {
        let replace = self
            .session
            .as_ref()
            .is_none_or(|s| s.container.id != container.id);
        if replace {
            info!(
                "[MANAGER] selected container {} ({})",
                container.id, container.name
            );
            self.session = Some(PackingSession::with_policy(
                container,
                self.config.grid_scan(),
            ));
        }
        self.session.as_ref().expect("session was just ensured")
    }

    pub fn check_fit(&self, item: &Item) -> Result<FitResult> {
        Ok(self.active()?.check_fit(item))
    }

    pub fn commit(&mut self, item: &Item) -> Result<FitResult> {
        Ok(self.active_mut()?.commit(item))
    }

    pub fn remove(&mut self, item_id: &str) -> Result<bool> {
        Ok(self.active_mut()?.remove(item_id).is_some())
    }

    pub fn reposition(&mut self, item_id: &str, position: Point) -> Result<()> {
        self.active_mut()?.reposition(item_id, position)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.active_mut()?.clear();
        Ok(())
    }

    /// The active session, if a container has been selected.
    pub fn session(&self) -> Option<&PackingSession> {
        self.session.as_ref()
    }

    fn active(&self) -> Result<&PackingSession> {
        self.session.as_ref().context("no container selected")
    }

    fn active_mut(&mut self) -> Result<&mut PackingSession> {
        self.session.as_mut().context("no container selected")
    }
}
