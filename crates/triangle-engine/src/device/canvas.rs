//! Canvas lookup by element id.
//!
//! In the browser the canvas is a DOM element. On native targets a winit
//! window stands in for it and is registered under an id up front.

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlCanvasElement;

    pub type Canvas = HtmlCanvasElement;

    /// Looks canvases up in the current document.
    #[derive(Debug, Default)]
    pub struct CanvasLookup;

    impl CanvasLookup {
        pub fn find(&self, id: &str) -> Option<Canvas> {
            web_sys::window()?
                .document()?
                .get_element_by_id(id)?
                .dyn_into::<HtmlCanvasElement>()
                .ok()
        }
    }

    /// Drawing-buffer size in pixels.
    pub fn size(canvas: &Canvas) -> (u32, u32) {
        (canvas.width(), canvas.height())
    }

    pub fn surface_target(canvas: Canvas) -> wgpu::SurfaceTarget<'static> {
        wgpu::SurfaceTarget::Canvas(canvas)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use std::collections::HashMap;
    use std::sync::Arc;

    use winit::window::Window;

    pub type Canvas = Arc<Window>;

    /// Windows registered by id.
    #[derive(Default)]
    pub struct CanvasLookup {
        windows: HashMap<String, Arc<Window>>,
    }

    impl CanvasLookup {
        pub fn insert(&mut self, id: impl Into<String>, window: Arc<Window>) {
            self.windows.insert(id.into(), window);
        }

        pub fn find(&self, id: &str) -> Option<Canvas> {
            self.windows.get(id).cloned()
        }
    }

    /// Inner size in physical pixels.
    pub fn size(canvas: &Canvas) -> (u32, u32) {
        let size = canvas.inner_size();
        (size.width, size.height)
    }

    pub fn surface_target(canvas: Canvas) -> wgpu::SurfaceTarget<'static> {
        wgpu::SurfaceTarget::from(canvas)
    }
}

pub use imp::{Canvas, CanvasLookup};
pub(crate) use imp::{size, surface_target};
