use crate::{BarInfo, BarWidget, Color, DrawContext, Hooks, Result, WorkspaceRegistry};

pub type Sender = std::sync::mpsc::Sender<StatusBarEvent>;
pub type Receiver = std::sync::mpsc::Receiver<StatusBarEvent>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBarEvent {
    Startup,
    Redraw,
}

/// Handed to widgets so that hook callbacks can ask the bar to repaint.
#[derive(Debug, Clone)]
pub struct RedrawRequester {
    sender: Sender,
}

impl RedrawRequester {
    pub fn request(&self) {
        if self.sender.send(StatusBarEvent::Redraw).is_err() {
            tracing::warn!("status bar has gone away, dropping redraw request");
        }
    }
}

/// A simple status bar that works via hooks
pub struct StatusBar<C: DrawContext> {
    ctx: C,
    info: BarInfo,
    /// The widgets contained within this status bar, left to right
    pub widgets: Vec<Box<dyn BarWidget>>,
    /// (offset, width) of each widget as of the last redraw
    spans: Vec<(usize, usize)>,
    bg: Color,
    sender: Sender,
    receiver: Receiver,
}

impl<C: DrawContext> StatusBar<C> {
    /// Try to initialise a new status bar on the given screen.
    ///
    /// # Errors
    ///
    /// If the drawing surface can not be cleared, then we return an error
    pub fn try_new(
        mut ctx: C,
        screen: usize,
        width: usize,
        height: usize,
        bg: impl Into<Color>,
        widgets: Vec<Box<dyn BarWidget>>,
    ) -> Result<Self> {
        let (sender, receiver) = std::sync::mpsc::channel();

        ctx.clear()?;
        ctx.flush();

        Ok(Self {
            ctx,
            info: BarInfo {
                screen,
                width,
                height,
            },
            widgets,
            spans: vec![],
            bg: bg.into(),
            sender,
            receiver,
        })
    }

    #[must_use]
    pub const fn info(&self) -> &BarInfo {
        &self.info
    }

    pub const fn ctx(&self) -> &C {
        &self.ctx
    }

    pub fn ctx_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    pub fn create_hook(&self) -> RedrawRequester {
        RedrawRequester {
            sender: self.sender.clone(),
        }
    }

    /// Let every widget subscribe to the hooks it cares about, and queue the
    /// first paint.
    pub fn configure(&mut self, hooks: &mut Hooks) {
        for widget in &mut self.widgets {
            let redraw = RedrawRequester {
                sender: self.sender.clone(),
            };
            widget.setup_hooks(hooks, redraw);
        }

        // The receiver lives in self, so this can't fail
        let _ = self.sender.send(StatusBarEvent::Startup);
    }

    /// Re-render all widgets in this status bar
    ///
    /// # Errors
    ///
    /// If we are unable to re-render a widget, then we return an error
    pub fn redraw(&mut self, wm: &dyn WorkspaceRegistry) -> Result<()> {
        self.ctx.clear()?;

        self.ctx.set_x_offset(0.);
        self.ctx.color(&self.bg);
        self.ctx
            .rectangle(0.0, 0.0, self.info.width as f64, self.info.height as f64)?;

        self.spans.clear();
        let mut offset = 0;

        for widget in &mut self.widgets {
            self.ctx.set_x_offset(offset as f64);
            let width = widget.draw(&mut self.ctx, wm, &self.info)?;
            self.spans.push((offset, width));
            offset += width;
        }

        self.ctx.set_x_offset(0.);
        self.ctx.flush();
        tracing::debug!("redrew status bar on screen {}", self.info.screen);

        Ok(())
    }

    /// Poll for events from the status bar, redrawing once per event.
    ///
    /// Returns the number of redraws performed. Events after a failed redraw
    /// stay queued for the next poll.
    ///
    /// # Errors
    ///
    /// Returns an error if a redraw fails,
    /// not if events can't be received.
    pub fn poll_events(&mut self, wm: &dyn WorkspaceRegistry) -> Result<usize> {
        let mut redraws = 0;

        while let Ok(event) = self.receiver.try_recv() {
            tracing::trace!("status bar event: {:?}", event);
            self.redraw(wm)?;
            redraws += 1;
        }

        Ok(redraws)
    }

    /// Forward a click to whichever widget was drawn under `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget's click handler fails.
    pub fn click(&mut self, wm: &mut dyn WorkspaceRegistry, x: usize, y: usize) -> Result<()> {
        let hit = self
            .spans
            .iter()
            .position(|&(offset, width)| (offset..offset + width).contains(&x));

        match hit {
            Some(i) => {
                let offset = self.spans[i].0;
                self.widgets[i].click(wm, &self.info, x - offset, y)
            }
            None => {
                tracing::trace!("click at {x} did not land on a widget");
                Ok(())
            }
        }
    }
}
