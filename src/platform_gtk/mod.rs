use gtk4 as gtk;

use crate::api::GraphEngine;
use crate::render::Renderer;

/// GTK4 embedding seam: owns an engine on behalf of a `DrawingArea` host.
///
/// The host wires its draw callback to `engine_mut().render()` (or, with the
/// Cairo backend, `CairoContextRenderer::render_on_cairo_context`).
pub struct GtkGraphAdapter<R: Renderer> {
    engine: GraphEngine<R>,
}

impl<R: Renderer> GtkGraphAdapter<R> {
    #[must_use]
    pub fn new(engine: GraphEngine<R>) -> Self {
        let _ = std::mem::size_of::<gtk::DrawingArea>();
        Self { engine }
    }

    #[must_use]
    pub fn engine(&self) -> &GraphEngine<R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GraphEngine<R> {
        &mut self.engine
    }
}
