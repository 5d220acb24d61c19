use crate::{Color, DrawError};

pub type DrawResult<T> = std::result::Result<T, DrawError>;

/// Metrics for a single run of text in the currently selected font.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    /// Width of the inked area.
    pub width: f64,
    pub height: f64,
    /// How far the pen moves after drawing the text.
    pub x_advance: f64,
}

/// A surface that bar widgets render onto.
///
/// All coordinates are relative to the current x offset, so a widget can draw
/// starting at `0.0` without knowing where the bar placed it.
pub trait DrawContext {
    /// Select the font used for subsequent text operations.
    ///
    /// # Errors
    ///
    /// Returns an error if the font can not be loaded.
    fn font(&mut self, font_name: &str, point_size: i32) -> DrawResult<()>;

    /// Set the source colour for subsequent drawing.
    fn color(&mut self, color: &Color);

    /// Move the origin used by later drawing operations.
    fn set_x_offset(&mut self, x: f64);

    /// Clear the whole surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to clear.
    fn clear(&mut self) -> DrawResult<()>;

    /// Fill a rectangle with the current colour.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to draw.
    fn rectangle(&mut self, x: f64, y: f64, w: f64, h: f64) -> DrawResult<()>;

    /// Stroke the outline of a rounded rectangle with the current colour.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to draw.
    fn rounded_rectangle(&mut self, x: f64, y: f64, w: f64, h: f64, line_width: f64)
        -> DrawResult<()>;

    /// Render text with its baseline starting at `(x, baseline)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text can not be rendered.
    fn text(&mut self, txt: &str, x: f64, baseline: f64) -> DrawResult<()>;

    /// Measure `txt` in the current font.
    ///
    /// # Errors
    ///
    /// Returns an error if the text can not be measured.
    fn text_extent(&mut self, txt: &str) -> DrawResult<TextExtent>;

    /// Commit everything drawn so far to the screen.
    fn flush(&mut self);
}

/// The result of fitting a set of strings into a height limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FittedText {
    pub point_size: i32,
    pub max_width: usize,
    pub max_height: usize,
}

/// Scale `font` so that every string fits within `height_limit` pixels, and
/// report the largest resulting extent.
///
/// The font is measured at `reference_size` and scaled linearly. When the
/// strings have no height at all, nothing is fitted and the extent is zero.
///
/// # Errors
///
/// Returns an error if the font can not be selected or text can not be measured.
pub fn fit_text(
    ctx: &mut dyn DrawContext,
    font: &str,
    reference_size: i32,
    strings: &[&str],
    height_limit: usize,
) -> DrawResult<FittedText> {
    ctx.font(font, reference_size)?;

    let measured = ctx.text_extent(&strings.concat())?;
    if measured.height <= 0.0 {
        return Ok(FittedText {
            point_size: reference_size,
            ..FittedText::default()
        });
    }

    let scaled = (f64::from(reference_size) * height_limit as f64 / measured.height).floor();
    let point_size = (scaled as i32).max(1);
    ctx.font(font, point_size)?;

    let mut fitted = FittedText {
        point_size,
        ..FittedText::default()
    };

    for s in strings {
        let extent = ctx.text_extent(s)?;
        fitted.max_width = fitted.max_width.max(extent.width.ceil() as usize);
        fitted.max_height = fitted.max_height.max(extent.height.ceil() as usize);
    }

    Ok(fitted)
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Font(String, i32),
        Clear,
        Rectangle {
            x: f64,
            y: f64,
            w: f64,
            h: f64,
            color: Color,
        },
        RoundedRectangle {
            x: f64,
            y: f64,
            w: f64,
            h: f64,
            line_width: f64,
            color: Color,
        },
        Text {
            txt: String,
            x: f64,
            baseline: f64,
            color: Color,
        },
        Flush,
    }

    /// Records every operation in absolute coordinates.
    ///
    /// Text is measured with a fixed advance of half the point size per
    /// character and a height equal to the point size.
    #[derive(Debug)]
    pub struct MockContext {
        pub ops: Vec<Op>,
        point_size: i32,
        color: Color,
        x_offset: f64,
    }

    impl MockContext {
        pub fn new() -> Self {
            Self {
                ops: vec![],
                point_size: 12,
                color: Color::new(0),
                x_offset: 0.,
            }
        }

        pub fn borders(&self) -> Vec<&Op> {
            self.ops
                .iter()
                .filter(|op| matches!(op, Op::RoundedRectangle { .. }))
                .collect()
        }

        pub fn texts(&self) -> Vec<&Op> {
            self.ops
                .iter()
                .filter(|op| matches!(op, Op::Text { .. }))
                .collect()
        }

        pub fn flushes(&self) -> usize {
            self.ops.iter().filter(|op| **op == Op::Flush).count()
        }
    }

    impl DrawContext for MockContext {
        fn font(&mut self, font_name: &str, point_size: i32) -> DrawResult<()> {
            if font_name.is_empty() {
                return Err(DrawError::UnknownFont(font_name.to_string()));
            }
            self.point_size = point_size;
            self.ops.push(Op::Font(font_name.to_string(), point_size));
            Ok(())
        }

        fn color(&mut self, color: &Color) {
            self.color = *color;
        }

        fn set_x_offset(&mut self, x: f64) {
            self.x_offset = x;
        }

        fn clear(&mut self) -> DrawResult<()> {
            self.ops.push(Op::Clear);
            Ok(())
        }

        fn rectangle(&mut self, x: f64, y: f64, w: f64, h: f64) -> DrawResult<()> {
            self.ops.push(Op::Rectangle {
                x: x + self.x_offset,
                y,
                w,
                h,
                color: self.color,
            });
            Ok(())
        }

        fn rounded_rectangle(
            &mut self,
            x: f64,
            y: f64,
            w: f64,
            h: f64,
            line_width: f64,
        ) -> DrawResult<()> {
            self.ops.push(Op::RoundedRectangle {
                x: x + self.x_offset,
                y,
                w,
                h,
                line_width,
                color: self.color,
            });
            Ok(())
        }

        fn text(&mut self, txt: &str, x: f64, baseline: f64) -> DrawResult<()> {
            self.ops.push(Op::Text {
                txt: txt.to_string(),
                x: x + self.x_offset,
                baseline,
                color: self.color,
            });
            Ok(())
        }

        fn text_extent(&mut self, txt: &str) -> DrawResult<TextExtent> {
            let width = txt.chars().count() as f64 * f64::from(self.point_size) / 2.;
            let height = if txt.is_empty() {
                0.
            } else {
                f64::from(self.point_size)
            };

            Ok(TextExtent {
                width,
                height,
                x_advance: width,
            })
        }

        fn flush(&mut self) {
            self.ops.push(Op::Flush);
        }
    }
}
