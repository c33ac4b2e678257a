//! Collaborator seams around the regularization core.
//!
//! Reading raw coordinates and rendering the result live outside this
//! crate. They plug in through [`DrawingSource`] and [`DrawingSink`].

use kurbo::Rect;
use thiserror::Error;

use crate::config::RegularizeConfig;
use crate::drawing::Drawing;
use crate::{regularize, Regularized};

/// Produces the drawing to regularize (e.g. a tabular file parser).
pub trait DrawingSource {
    type Error: std::error::Error + 'static;

    fn read(&mut self) -> Result<Drawing, Self::Error>;
}

/// Consumes the regularized drawing (e.g. a vector renderer).
pub trait DrawingSink {
    type Error: std::error::Error + 'static;

    fn write(&mut self, drawing: &Drawing, style: &RenderStyle) -> Result<(), Self::Error>;
}

/// What a renderer needs besides the geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// Padded canvas; `None` for an empty drawing.
    pub canvas: Option<Rect>,
    pub palette: Vec<&'static str>,
}

impl RenderStyle {
    pub fn new(drawing: &Drawing, config: &RegularizeConfig) -> Self {
        Self {
            canvas: drawing.canvas(config.padding),
            palette: config.palette.clone(),
        }
    }

    /// Stroke color for the path at `path_index`, cycling the palette.
    pub fn color_for(&self, path_index: usize) -> Option<&'static str> {
        if self.palette.is_empty() {
            return None;
        }
        Some(self.palette[path_index % self.palette.len()])
    }
}

/// Failure in either collaborator.
#[derive(Error, Debug)]
pub enum PipelineError<R, W>
where
    R: std::error::Error + 'static,
    W: std::error::Error + 'static,
{
    #[error("failed to read drawing: {0}")]
    Read(#[source] R),

    #[error("failed to write drawing: {0}")]
    Write(#[source] W),
}

/// An in-memory drawing is its own source.
impl DrawingSource for Drawing {
    type Error = std::convert::Infallible;

    fn read(&mut self) -> Result<Drawing, Self::Error> {
        Ok(self.clone())
    }
}

/// Source → regularize → sink.
pub fn run<S, K>(
    source: &mut S,
    sink: &mut K,
    config: &RegularizeConfig,
) -> Result<Regularized, PipelineError<S::Error, K::Error>>
where
    S: DrawingSource,
    K: DrawingSink,
{
    let drawing = source.read().map_err(PipelineError::Read)?;
    let result = regularize(&drawing, config);
    let style = RenderStyle::new(&result.drawing, config);
    sink.write(&result.drawing, &style).map_err(PipelineError::Write)?;
    Ok(result)
}
