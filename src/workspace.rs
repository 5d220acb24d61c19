use crate::{Error, HookEvent, Hooks, Result};

/// X window identifier.
pub type Xid = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub id: Xid,
    pub urgent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub name: String,
    pub windows: Vec<Window>,
    /// The screen currently showing this workspace, if any.
    pub screen: Option<usize>,
}

impl Workspace {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            windows: vec![],
            screen: None,
        }
    }

    #[must_use]
    pub fn has_urgent(&self) -> bool {
        self.windows.iter().any(|w| w.urgent)
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        !self.windows.is_empty()
    }
}

/// Read access to the window manager's workspaces, plus the one mutation a
/// bar widget needs.
pub trait WorkspaceRegistry {
    /// All workspaces, in display order.
    fn workspaces(&self) -> &[Workspace];

    /// Show the workspace at `index` on `screen`.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of range.
    fn set_active_workspace(&mut self, screen: usize, index: usize) -> Result<()>;
}

/// A self contained [`WorkspaceRegistry`] that fires lifecycle hooks as its
/// state changes.
pub struct WorkspaceSet {
    workspaces: Vec<Workspace>,
    /// Workspace index shown on each screen.
    screens: Vec<usize>,
    hooks: Hooks,
}

impl WorkspaceSet {
    /// Screen `i` starts out showing workspace `i`.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no screens, or not enough workspaces to
    /// give every screen its own.
    pub fn try_new(names: &[&str], n_screens: usize) -> Result<Self> {
        if n_screens == 0 {
            return Err(Error::InvalidWorkspaces("at least one screen is required".into()));
        }
        if names.len() < n_screens {
            return Err(Error::InvalidWorkspaces(format!(
                "{} workspaces can not cover {n_screens} screens",
                names.len()
            )));
        }

        let mut workspaces: Vec<_> = names.iter().map(|&n| Workspace::new(n)).collect();
        for (screen, ws) in workspaces.iter_mut().take(n_screens).enumerate() {
            ws.screen = Some(screen);
        }

        Ok(Self {
            workspaces,
            screens: (0..n_screens).collect(),
            hooks: Hooks::new(),
        })
    }

    pub fn hooks_mut(&mut self) -> &mut Hooks {
        &mut self.hooks
    }

    #[must_use]
    pub fn n_screens(&self) -> usize {
        self.screens.len()
    }

    /// The workspace index shown on `screen`.
    #[must_use]
    pub fn active_workspace(&self, screen: usize) -> Option<usize> {
        self.screens.get(screen).copied()
    }

    fn workspace_mut(&mut self, index: usize) -> Result<&mut Workspace> {
        self.workspaces
            .get_mut(index)
            .ok_or(Error::UnknownWorkspace(index))
    }

    fn find_window(&self, id: Xid) -> Result<(usize, usize)> {
        self.workspaces
            .iter()
            .enumerate()
            .find_map(|(wix, ws)| {
                ws.windows
                    .iter()
                    .position(|w| w.id == id)
                    .map(|pos| (wix, pos))
            })
            .ok_or(Error::UnknownWindow(id))
    }

    /// Start managing a new window on the given workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the workspace does not exist or the window is
    /// already managed.
    pub fn manage_window(&mut self, workspace: usize, id: Xid) -> Result<()> {
        if self.find_window(id).is_ok() {
            return Err(Error::DuplicateWindow(id));
        }

        self.workspace_mut(workspace)?
            .windows
            .push(Window { id, urgent: false });

        self.hooks.fire(&HookEvent::ClientManaged { id });
        self.hooks
            .fire(&HookEvent::ClientAddedToWorkspace { id, workspace });

        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the window is not managed.
    pub fn kill_window(&mut self, id: Xid) -> Result<()> {
        let (wix, pos) = self.find_window(id)?;
        self.workspaces[wix].windows.remove(pos);

        self.hooks.fire(&HookEvent::ClientKilled { id });

        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the window is not managed.
    pub fn set_urgent(&mut self, id: Xid, urgent: bool) -> Result<()> {
        let (wix, pos) = self.find_window(id)?;
        self.workspaces[wix].windows[pos].urgent = urgent;

        self.hooks
            .fire(&HookEvent::UrgentHintChanged { id, urgent });

        Ok(())
    }

    /// Append a new, hidden workspace and return its index.
    pub fn add_workspace(&mut self, name: impl Into<String>) -> usize {
        self.workspaces.push(Workspace::new(name));
        self.workspaces.len() - 1
    }

    /// Remove a hidden workspace, moving its windows onto the first workspace
    /// that remains.
    ///
    /// # Errors
    ///
    /// Returns an error if the workspace does not exist, is currently shown on
    /// a screen, or is the last workspace.
    pub fn remove_workspace(&mut self, index: usize) -> Result<()> {
        let ws = self
            .workspaces
            .get(index)
            .ok_or(Error::UnknownWorkspace(index))?;

        if let Some(screen) = ws.screen {
            return Err(Error::InvalidWorkspaces(format!(
                "workspace '{}' is visible on screen {screen}",
                ws.name
            )));
        }
        if self.workspaces.len() == 1 {
            return Err(Error::InvalidWorkspaces(
                "can not remove the last workspace".into(),
            ));
        }

        let removed = self.workspaces.remove(index);
        self.workspaces[0].windows.extend(removed.windows);

        for shown in &mut self.screens {
            if *shown > index {
                *shown -= 1;
            }
        }

        tracing::info!("removed workspace '{}'", removed.name);
        self.hooks
            .fire(&HookEvent::WorkspaceRemoved { name: removed.name });

        Ok(())
    }
}

impl WorkspaceRegistry for WorkspaceSet {
    fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    fn set_active_workspace(&mut self, screen: usize, index: usize) -> Result<()> {
        let current = self
            .active_workspace(screen)
            .ok_or(Error::UnknownScreen(screen))?;
        if index >= self.workspaces.len() {
            return Err(Error::UnknownWorkspace(index));
        }
        if current == index {
            return Ok(());
        }

        // Pull the workspace over from whichever screen has it, giving that
        // screen our old one.
        if let Some(other) = self.workspaces[index].screen {
            self.screens[other] = current;
            self.workspaces[current].screen = Some(other);
        } else {
            self.workspaces[current].screen = None;
        }

        self.screens[screen] = index;
        self.workspaces[index].screen = Some(screen);

        tracing::info!(
            "screen {screen} now shows workspace '{}'",
            self.workspaces[index].name
        );
        self.hooks.fire(&HookEvent::WorkspaceChanged {
            screen,
            workspace: index,
        });

        Ok(())
    }
}
