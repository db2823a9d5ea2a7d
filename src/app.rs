use anyhow::{anyhow, Context as _, Result};
use glutin::{
    config::ConfigTemplateBuilder,
    context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version},
    display::{GetGlDisplay, GlDisplay},
    prelude::*,
    surface::{Surface, WindowSurface},
};
use glutin_winit::{DisplayBuilder, GlWindow};
use log::{error, info};
use raw_window_handle::HasRawWindowHandle;
use std::{ffi::CString, num::NonZeroU32};
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::config::WindowConfig;

/// Window plus the GL context and surface rendering into it.
///
/// Everything here lives on the one thread that owns the context; all GL
/// calls made from the per-frame closure run on that thread too.
pub struct App {
    window: Window,
    gl_context: PossiblyCurrentContext,
    gl_surface: Surface<WindowSurface>,
}

impl App {
    /// Creates the window, a 3.3 OpenGL context and surface, makes the
    /// context current, and loads the GL function pointers.
    ///
    /// Any failure here is a startup error; `main` turns it into a nonzero
    /// exit.
    pub fn new(config: &WindowConfig) -> Result<(Self, EventLoop<()>)> {
        info!(
            "Initializing window \"{}\" ({}x{})",
            config.title, config.width, config.height
        );

        let event_loop = EventLoop::new()?;
        let window_builder = WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(config.width, config.height));

        let template = ConfigTemplateBuilder::new().with_alpha_size(8);

        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));

        let (window, gl_config) = display_builder
            .build(&event_loop, template, |configs| {
                configs
                    .reduce(|accum, config| {
                        if config.num_samples() > accum.num_samples() {
                            config
                        } else {
                            accum
                        }
                    })
                    .unwrap()
            })
            .map_err(|e| anyhow!("failed to build window and GL config: {e}"))?;

        let window = window.context("display builder returned no window")?;
        let raw_window_handle = window.raw_window_handle();

        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .with_profile(GlProfile::Compatibility)
            .build(Some(raw_window_handle));

        let gl_display = gl_config.display();

        let gl_context = unsafe {
            gl_display
                .create_context(&gl_config, &context_attributes)
                .context("failed to create OpenGL context")?
        };

        let attrs = window.build_surface_attributes(<_>::default());
        let gl_surface = unsafe {
            gl_display
                .create_window_surface(&gl_config, &attrs)
                .context("failed to create GL surface")?
        };

        let gl_context = gl_context
            .make_current(&gl_surface)
            .context("failed to make context current")?;

        // Load OpenGL functions
        gl::load_with(|symbol| {
            let symbol = CString::new(symbol).unwrap();
            gl_display.get_proc_address(symbol.as_c_str()) as *const _
        });

        unsafe {
            gl::ClearColor(0.2, 0.3, 0.3, 1.0);
        }

        Ok((
            Self {
                window,
                gl_context,
                gl_surface,
            },
            event_loop,
        ))
    }

    /// Runs the redraw loop until the window is closed.
    ///
    /// Each frame the color buffer is cleared, `draw` issues its draw
    /// calls, and the buffers are swapped. Window close exits the loop
    /// cleanly.
    pub fn run(self, event_loop: EventLoop<()>, mut draw: impl FnMut() + 'static) -> Result<()> {
        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(size) => self.resize(size),
                WindowEvent::RedrawRequested => {
                    unsafe {
                        gl::Clear(gl::COLOR_BUFFER_BIT);
                    }
                    draw();
                    if let Err(e) = self.gl_surface.swap_buffers(&self.gl_context) {
                        error!("Failed to swap buffers: {e}");
                    }
                }
                _ => (),
            },
            Event::AboutToWait => self.window.request_redraw(),
            _ => (),
        })?;

        Ok(())
    }

    fn resize(&self, size: PhysicalSize<u32>) {
        if let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        {
            self.gl_surface.resize(&self.gl_context, width, height);
            unsafe {
                gl::Viewport(0, 0, size.width as i32, size.height as i32);
            }
        }
    }
}
