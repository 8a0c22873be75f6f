//! Animation-frame driver: one `tick` and one `render` per browser frame.
//!
//! The loop reschedules itself from inside the `requestAnimationFrame`
//! callback. A render error is fatal: it is logged and the loop is not
//! rescheduled, leaving the last good frame on screen.

#[cfg(test)]
#[path = "frame_loop_test.rs"]
mod frame_loop_test;

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use canvas::canvas2d::Canvas2dTarget;
use canvas::engine::{CanvasController, Game, run_frame};
use canvas::render::RenderTarget;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::error::HostError;
use crate::state::input_tracker::InputTracker;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Run one frame against the tracker, then clear its edge-triggered input.
///
/// # Errors
///
/// Returns the render target's error. Input is consumed either way.
pub fn step<G, T>(game: &mut G, tracker: &mut InputTracker, target: &mut T) -> Result<(), T::Error>
where
    G: Game + ?Sized,
    T: RenderTarget + ?Sized,
    T::Error: Debug,
{
    let result = run_frame(game, &*tracker, target);
    tracker.end_frame();
    result
}

/// Start the animation-frame loop.
///
/// # Errors
///
/// Returns [`HostError::NoWindow`] outside a browser, or [`HostError::Js`] if the
/// first frame cannot be scheduled.
pub fn start(
    controller: Rc<RefCell<CanvasController>>,
    tracker: Rc<RefCell<InputTracker>>,
    mut target: Canvas2dTarget,
) -> Result<(), HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let callback: FrameCallback = Rc::new(RefCell::new(None));

    let callback_for_frame = Rc::clone(&callback);
    let window_for_frame = window.clone();
    let mut frames: u64 = 0;
    let frame = Closure::wrap(Box::new(move |_ts: f64| {
        let result = step(&mut *controller.borrow_mut(), &mut tracker.borrow_mut(), &mut target);
        if let Err(err) = result {
            log::error!("render failed after {frames} frame(s), stopping: {err:?}");
            return;
        }
        frames += 1;
        if let Err(err) = schedule(&window_for_frame, &callback_for_frame) {
            log::error!("could not schedule frame {frames}: {err}");
        }
    }) as Box<dyn FnMut(f64)>);
    *callback.borrow_mut() = Some(frame);

    schedule(&window, &callback)
}

fn schedule(window: &Window, callback: &FrameCallback) -> Result<(), HostError> {
    let holder = callback.borrow();
    let Some(frame) = holder.as_ref() else {
        return Err(HostError::Js("frame callback missing".into()));
    };
    window.request_animation_frame(frame.as_ref().unchecked_ref())?;
    Ok(())
}
