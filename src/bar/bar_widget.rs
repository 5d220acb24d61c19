use crate::{DrawContext, Hooks, RedrawRequester, Result, WorkspaceRegistry};

/// The bar a widget is being rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarInfo {
    /// The screen this bar lives on.
    pub screen: usize,
    pub width: usize,
    pub height: usize,
}

pub trait BarWidget {
    /// Render the widget to the status bar, starting at the context's current
    /// x offset.
    ///
    /// Returns the width of the widget.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget fails to draw.
    fn draw(
        &mut self,
        ctx: &mut dyn DrawContext,
        wm: &dyn WorkspaceRegistry,
        bar: &BarInfo,
    ) -> Result<usize>;

    /// The width required by this widget.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget fails to calculate its extent.
    fn current_width(
        &mut self,
        ctx: &mut dyn DrawContext,
        wm: &dyn WorkspaceRegistry,
        bar: &BarInfo,
    ) -> Result<usize>;

    /// Handle a click at `(x, y)`, relative to the widget's left edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the action triggered by the click fails.
    fn click(
        &mut self,
        _wm: &mut dyn WorkspaceRegistry,
        _bar: &BarInfo,
        _x: usize,
        _y: usize,
    ) -> Result<()> {
        Ok(())
    }

    /// Subscribe to whichever window manager events should repaint the bar.
    fn setup_hooks(&mut self, _hooks: &mut Hooks, _redraw: RedrawRequester) {}
}
