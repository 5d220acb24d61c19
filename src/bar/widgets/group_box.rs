//! A clickable indicator showing every workspace as a box.
//!
//! Each workspace gets a box of the same width, sized to fit the widest name.
//! The border of a box shows where the workspace is: on this bar's screen, on
//! another screen, or hidden but holding an urgent window. The text colour
//! shows whether the workspace has any windows at all.
use crate::{
    fit_text, BarInfo, BarWidget, Color, DrawContext, GroupBoxConfig, HookKind, Hooks,
    RedrawRequester, Result, Workspace, WorkspaceRegistry,
};

/// Box geometry for a single paint pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupBoxLayout {
    pub box_width: usize,
    pub margin_x: usize,
    pub margin_y: usize,
    pub max_text_width: usize,
    pub max_text_height: usize,
    /// Point size the names were fitted at.
    pub point_size: i32,
    pub count: usize,
}

impl GroupBoxLayout {
    #[must_use]
    pub const fn total_width(&self) -> usize {
        self.box_width * self.count
    }

    /// Left edge of the box for workspace `index`.
    #[must_use]
    pub const fn box_x(&self, index: usize) -> usize {
        self.box_width * index
    }

    /// The box under `x`, if any.
    #[must_use]
    pub const fn index_at(&self, x: usize) -> Option<usize> {
        if self.box_width == 0 {
            return None;
        }

        let index = x / self.box_width;
        if index < self.count {
            Some(index)
        } else {
            None
        }
    }
}

/// Which border, if any, a workspace box is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    ThisScreen,
    OtherScreen,
    Urgent,
}

impl Border {
    #[must_use]
    pub fn for_workspace(ws: &Workspace, screen: usize) -> Option<Self> {
        match ws.screen {
            Some(s) if s == screen => Some(Self::ThisScreen),
            Some(_) => Some(Self::OtherScreen),
            None if ws.has_urgent() => Some(Self::Urgent),
            None => None,
        }
    }

    #[must_use]
    pub const fn color<'a>(&self, config: &'a GroupBoxConfig) -> &'a Color {
        match self {
            Self::ThisScreen => &config.this_screen_border,
            Self::OtherScreen => &config.other_screen_border,
            Self::Urgent => &config.urgent_border,
        }
    }
}

pub struct GroupBox {
    config: GroupBoxConfig,
    /// What the user currently sees, used to map clicks.
    drawn: Option<GroupBoxLayout>,
}

impl GroupBox {
    #[must_use]
    pub fn new(config: GroupBoxConfig) -> Box<Self> {
        Box::new(Self {
            config,
            drawn: None,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &GroupBoxConfig {
        &self.config
    }

    #[must_use]
    pub const fn last_layout(&self) -> Option<&GroupBoxLayout> {
        self.drawn.as_ref()
    }

    /// Work out the box geometry for the given workspaces.
    ///
    /// Leaves the context's font set to the fitted size.
    ///
    /// # Errors
    ///
    /// Returns an error if the font can not be loaded or measured.
    pub fn layout(
        &self,
        ctx: &mut dyn DrawContext,
        workspaces: &[Workspace],
        bar_height: usize,
    ) -> Result<GroupBoxLayout> {
        let c = &self.config;
        let frame = (c.padding_y + c.border_width) * 2;

        // 20% of what is left, split above and below the text
        let margin_y = bar_height.saturating_sub(frame) / 5;
        let available = bar_height.saturating_sub(frame + margin_y * 2);

        let names: Vec<&str> = workspaces.iter().map(|w| w.name.as_str()).collect();
        let fitted = fit_text(
            ctx,
            &c.font,
            bar_height.try_into().unwrap_or(i32::MAX),
            &names,
            available,
        )?;

        let margin_x = c.min_margin_x.max(fitted.max_width / 5);
        let box_width =
            fitted.max_width + c.padding_x * 2 + c.border_width * 2 + margin_x * 2;

        let layout = GroupBoxLayout {
            box_width,
            margin_x,
            margin_y,
            max_text_width: fitted.max_width,
            max_text_height: fitted.max_height,
            point_size: fitted.point_size,
            count: workspaces.len(),
        };
        tracing::debug!("group box layout: {:?}", layout);

        Ok(layout)
    }

    /// The total width needed to show every workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the font can not be loaded or measured.
    pub fn calculate_width(
        &self,
        ctx: &mut dyn DrawContext,
        workspaces: &[Workspace],
        bar_height: usize,
    ) -> Result<usize> {
        Ok(self.layout(ctx, workspaces, bar_height)?.total_width())
    }

    /// Paint every workspace box using a layout from [`GroupBox::layout`],
    /// then commit the surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the drawing context fails.
    pub fn draw_with(
        &self,
        ctx: &mut dyn DrawContext,
        workspaces: &[Workspace],
        layout: &GroupBoxLayout,
        screen: usize,
        bar_height: usize,
    ) -> Result<()> {
        let c = &self.config;
        let height = bar_height as f64;
        let box_width = layout.box_width as f64;

        ctx.color(&c.background);
        ctx.rectangle(0., 0., layout.total_width() as f64, height)?;

        ctx.font(&c.font, layout.point_size)?;

        for (i, ws) in workspaces.iter().enumerate() {
            let x = layout.box_x(i) as f64;

            if let Some(border) = Border::for_workspace(ws, screen) {
                ctx.color(border.color(c));
                ctx.rounded_rectangle(
                    x + c.padding_x as f64,
                    c.padding_y as f64,
                    box_width - 2. * c.padding_x as f64,
                    height - 2. * c.padding_y as f64,
                    c.border_width as f64,
                )?;
            }

            ctx.color(if ws.is_occupied() {
                &c.active
            } else {
                &c.inactive
            });

            // Centre on the advance rather than the inked width
            let extent = ctx.text_extent(&ws.name)?;
            ctx.text(
                &ws.name,
                x + box_width / 2. - extent.x_advance / 2.,
                height / 2. + layout.max_text_height as f64 / 2.,
            )?;
        }

        ctx.flush();

        Ok(())
    }

    /// Recompute the layout and paint it.
    ///
    /// Returns the layout that was drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the drawing context fails.
    pub fn draw(
        &self,
        ctx: &mut dyn DrawContext,
        wm: &dyn WorkspaceRegistry,
        screen: usize,
        bar_height: usize,
    ) -> Result<GroupBoxLayout> {
        let workspaces = wm.workspaces();
        let layout = self.layout(ctx, workspaces, bar_height)?;
        self.draw_with(ctx, workspaces, &layout, screen, bar_height)?;

        Ok(layout)
    }

    /// Switch `screen` to the workspace under `x`.
    ///
    /// Returns whether a workspace was selected. Clicks past the last box are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry refuses the switch.
    pub fn click_at(
        layout: &GroupBoxLayout,
        wm: &mut dyn WorkspaceRegistry,
        screen: usize,
        x: usize,
    ) -> Result<bool> {
        match layout.index_at(x) {
            Some(index) if index < wm.workspaces().len() => {
                wm.set_active_workspace(screen, index)?;
                Ok(true)
            }
            _ => {
                tracing::trace!("ignoring group box click at x={x}");
                Ok(false)
            }
        }
    }
}

impl BarWidget for GroupBox {
    fn draw(
        &mut self,
        ctx: &mut dyn DrawContext,
        wm: &dyn WorkspaceRegistry,
        bar: &BarInfo,
    ) -> Result<usize> {
        let layout = Self::draw(self, ctx, wm, bar.screen, bar.height)?;
        self.drawn = Some(layout);

        Ok(layout.total_width())
    }

    fn current_width(
        &mut self,
        ctx: &mut dyn DrawContext,
        wm: &dyn WorkspaceRegistry,
        bar: &BarInfo,
    ) -> Result<usize> {
        self.calculate_width(ctx, wm.workspaces(), bar.height)
    }

    fn click(
        &mut self,
        wm: &mut dyn WorkspaceRegistry,
        bar: &BarInfo,
        x: usize,
        _y: usize,
    ) -> Result<()> {
        if let Some(layout) = &self.drawn {
            Self::click_at(layout, wm, bar.screen, x)?;
        }

        Ok(())
    }

    fn setup_hooks(&mut self, hooks: &mut Hooks, redraw: RedrawRequester) {
        for kind in HookKind::ALL {
            let redraw = redraw.clone();
            hooks.subscribe(kind, move |_| redraw.request());
        }
    }
}
