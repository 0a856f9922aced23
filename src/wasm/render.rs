//! Canvas render loop and input shim for the wave background.
//!
//! [`WaveBackground`] owns the canvas element, the pending animation-frame
//! handle and every event closure, so dropping it (or calling
//! [`WaveBackground::stop`]) tears the whole loop down without leaking
//! callbacks. Pointer and dark-mode state are plain `Cell`s shared with the
//! event handlers; the loop is single-threaded so last-write-wins is enough.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent, TouchEvent, Window,
};

use crate::theme::Theme;
use crate::wave::{self, Point};

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct WaveBackground {
    canvas: HtmlCanvasElement,
    pointer: Rc<Cell<Point>>,
    raf: Rc<Cell<Option<i32>>>,
    frame: FrameClosure,
    resize: Option<Closure<dyn FnMut()>>,
    mousemove: Option<Closure<dyn FnMut(MouseEvent)>>,
    touchmove: Option<Closure<dyn FnMut(TouchEvent)>>,
}

impl WaveBackground {
    /// Create the canvas, size it to the window, hook up input and start
    /// the frame chain. `dark` is shared with the page's theme toggle and
    /// re-read every frame.
    pub fn start(document: &Document, dark: Rc<Cell<bool>>) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas.set_class_name("wave-canvas");
        document.body().ok_or("no body")?.append_child(&canvas)?;

        let (w, h) = viewport(&window);
        canvas.set_width(w);
        canvas.set_height(h);

        // Pointer rests at the viewport center until the first input event.
        let pointer = Rc::new(Cell::new(Point::new(
            f64::from(w) / 2.0,
            f64::from(h) / 2.0,
        )));

        let resize = {
            let canvas = canvas.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                let (w, h) = viewport(&window);
                canvas.set_width(w);
                canvas.set_height(h);
            }) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;

        let mousemove = {
            let pointer = pointer.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                pointer.set(Point::new(f64::from(e.client_x()), f64::from(e.client_y())));
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        window.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;

        // First active touch point stands in for the mouse.
        let touchmove = {
            let pointer = pointer.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                if let Some(touch) = e.touches().get(0) {
                    pointer.set(Point::new(
                        f64::from(touch.client_x()),
                        f64::from(touch.client_y()),
                    ));
                }
            }) as Box<dyn FnMut(TouchEvent)>)
        };
        window.add_event_listener_with_callback("touchmove", touchmove.as_ref().unchecked_ref())?;

        let raf: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let frame: FrameClosure = Rc::new(RefCell::new(None));

        // The frame closure re-requests itself. Storing it inside an
        // `Option` behind an `Rc` lets it obtain a reference to itself,
        // and lets `stop` cut the chain by dropping it.
        {
            let canvas = canvas.clone();
            let pointer = pointer.clone();
            let raf = raf.clone();
            let chain = frame.clone();
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let time = js_sys::Date::now() * wave::TIME_SCALE;
                let theme = Theme::from_dark(dark.get());
                if render_frame(&canvas, pointer.get(), theme, time).is_none() {
                    // Surface or context not available: drop this frame
                    // quietly and do not reschedule. A later trigger (page
                    // remount) restarts the chain.
                    raf.set(None);
                    return;
                }
                raf.set(request_frame(&chain));
            }) as Box<dyn FnMut()>));
        }
        raf.set(request_frame(&frame));

        Ok(Self {
            canvas,
            pointer,
            raf,
            frame,
            resize: Some(resize),
            mousemove: Some(mousemove),
            touchmove: Some(touchmove),
        })
    }

    /// Whether a next frame is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.raf.get().is_some()
    }

    /// Last pointer position recorded by the input shim.
    #[doc(hidden)]
    pub fn pointer(&self) -> Point {
        self.pointer.get()
    }

    #[doc(hidden)]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Cancel the pending frame, release all input subscriptions and remove
    /// the canvas. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(handle) = self.raf.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
        // Dropping the closure guarantees no late callback can re-enter.
        self.frame.borrow_mut().take();

        if let Some(window) = web_sys::window() {
            if let Some(cb) = self.resize.take() {
                let _ = window
                    .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
            }
            if let Some(cb) = self.mousemove.take() {
                let _ = window
                    .remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
            }
            if let Some(cb) = self.touchmove.take() {
                let _ = window
                    .remove_event_listener_with_callback("touchmove", cb.as_ref().unchecked_ref());
            }
        }
        self.canvas.remove();
    }
}

impl Drop for WaveBackground {
    fn drop(&mut self) {
        self.stop();
    }
}

fn viewport(window: &Window) -> (u32, u32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as u32, h as u32)
}

fn request_frame(frame: &FrameClosure) -> Option<i32> {
    let window = web_sys::window()?;
    let cb = frame.borrow();
    window
        .request_animation_frame(cb.as_ref()?.as_ref().unchecked_ref())
        .ok()
}

/// Paint one frame: full background fill, 12 wave strokes, 10 glow
/// particles. Returns `None` when the drawing context is unavailable.
fn render_frame(
    canvas: &HtmlCanvasElement,
    pointer: Point,
    theme: Theme,
    time: f64,
) -> Option<()> {
    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());

    ctx.set_fill_style_str(theme.background());
    ctx.fill_rect(0.0, 0.0, width, height);

    for i in 0..wave::WAVE_COUNT {
        let style = wave::style(i);
        ctx.set_stroke_style_str(&style.css());
        ctx.set_line_width(wave::STROKE_WIDTH);
        ctx.begin_path();

        let mut x = 0.0;
        while x <= width {
            let y = wave::sample_y(i, x, time, height, pointer);
            if x == 0.0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
            x += wave::SAMPLE_STEP;
        }
        ctx.stroke();
    }

    for i in 0..wave::PARTICLE_COUNT {
        let p = wave::particle(i, time, pointer);
        let r = p.glow_radius();

        let gradient = ctx
            .create_radial_gradient(p.center.x, p.center.y, 0.0, p.center.x, p.center.y, r)
            .ok()?;
        for (offset, color) in wave::PARTICLE_GLOW {
            gradient.add_color_stop(offset as f32, color).ok()?;
        }

        ctx.begin_path();
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.arc(p.center.x, p.center.y, r, 0.0, std::f64::consts::TAU)
            .ok()?;
        ctx.fill();
    }

    Some(())
}
