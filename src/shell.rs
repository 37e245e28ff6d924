// Desktop shell: window manager, start menu and taskbar for one signed-in user

use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::file_store::FileRecord;
use crate::launcher::{self, AppEntry, LaunchError, LaunchSurface};
use crate::session::{Session, UserId};
use crate::state::window::{WindowId, WindowInstance};
use crate::state::WindowRegistry;
use crate::surface::{FrameLayout, InteractionSurface, Viewport};
use serde::Serialize;
use tracing::{debug, info};

/// One taskbar button per open window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskbarItem {
    pub id: WindowId,
    pub title: String,
    pub minimized: bool,
    pub focused: bool,
}

/// The mounted desktop of a session
pub struct Desktop {
    session: Session,
    registry: WindowRegistry,
    surface: InteractionSurface,
    start_menu_open: bool,
}

impl Desktop {
    pub fn new(session: Session, config: &ShellConfig) -> Self {
        Self {
            session,
            registry: WindowRegistry::with_defaults(config.default_window, config.limits()),
            surface: InteractionSurface::new(Viewport::default(), config.taskbar_height),
            start_menu_open: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut WindowRegistry {
        &mut self.registry
    }

    pub fn surface(&self) -> &InteractionSurface {
        &self.surface
    }

    /// Registry and surface together, for routing pointer events
    pub fn parts_mut(&mut self) -> (&mut WindowRegistry, &mut InteractionSurface) {
        (&mut self.registry, &mut self.surface)
    }

    pub fn layout(&self) -> Vec<FrameLayout> {
        self.surface.layout(&self.registry)
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.surface.set_viewport(viewport);
    }

    pub fn is_start_menu_open(&self) -> bool {
        self.start_menu_open
    }

    pub fn toggle_start_menu(&mut self) -> bool {
        self.start_menu_open = !self.start_menu_open;
        self.start_menu_open
    }

    pub fn close_start_menu(&mut self) {
        self.start_menu_open = false;
    }

    /// Launch an app tile. Picking a start-menu tile also closes the menu.
    pub fn launch(&mut self, surface: LaunchSurface, entry: &AppEntry) -> &WindowInstance {
        if surface == LaunchSurface::StartMenu {
            self.start_menu_open = false;
        }
        launcher::launch(&mut self.registry, entry)
    }

    /// Launch by app id from one of the launch surfaces
    pub fn launch_app(
        &mut self,
        surface: LaunchSurface,
        app_id: &str,
    ) -> Result<&WindowInstance, LaunchError> {
        let entry = launcher::find_entry(surface, app_id)
            .ok_or_else(|| LaunchError::UnknownApp(app_id.to_string()))?;
        Ok(self.launch(surface, &entry))
    }

    pub fn open_document(&mut self, file: &FileRecord) -> Result<&WindowInstance, LaunchError> {
        launcher::open_document(&mut self.registry, file)
    }

    /// Taskbar buttons in open order
    pub fn taskbar_items(&self) -> Vec<TaskbarItem> {
        let focused = self.registry.topmost().map(|w| &w.id);
        self.registry
            .list_windows()
            .iter()
            .map(|w| TaskbarItem {
                id: w.id.clone(),
                title: w.title.clone(),
                minimized: w.is_minimized,
                focused: focused == Some(&w.id),
            })
            .collect()
    }
}

/// Top-level shell. The desktop only exists while a session is established.
pub struct Shell {
    config: ShellConfig,
    desktop: Option<Desktop>,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            desktop: None,
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Mount a fresh desktop for `user`, replacing any previous one
    pub fn sign_in(&mut self, user: UserId) -> &mut Desktop {
        info!(user = %user, "mounting desktop");
        let desktop = Desktop::new(Session::new(user), &self.config);
        self.desktop.insert(desktop)
    }

    /// Unmount the desktop. Window layout is not kept.
    pub fn sign_out(&mut self) {
        if let Some(desktop) = self.desktop.take() {
            info!(user = %desktop.session.user, "unmounting desktop");
            debug!(windows = desktop.registry.len(), "discarding open windows");
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.desktop.as_ref().map(|d| d.session())
    }

    pub fn desktop(&self) -> Result<&Desktop, ShellError> {
        self.desktop.as_ref().ok_or(ShellError::NotSignedIn)
    }

    pub fn desktop_mut(&mut self) -> Result<&mut Desktop, ShellError> {
        self.desktop.as_mut().ok_or(ShellError::NotSignedIn)
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}
