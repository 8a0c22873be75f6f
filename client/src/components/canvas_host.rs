//! Bridge component between the DOM and the frame-driven `CanvasController`.
//!
//! ARCHITECTURE
//! ============
//! DOM listeners write into a shared [`InputTracker`]; the animation-frame
//! loop reads it once per frame, ticks the controller, and renders into the
//! canvas's 2D context. Nothing here touches view or path state directly.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use canvas::canvas2d::Canvas2dTarget;
use canvas::config::CanvasConfig;
use canvas::engine::{CanvasController, Game};
use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::error::HostError;
use crate::state::input_tracker::InputTracker;
use crate::util::canvas_input::{mouse_point, should_prevent_default_key};
use crate::util::frame_loop;
use crate::util::host::{canvas_style, context_2d};

#[component]
pub fn CanvasHost(config: CanvasConfig) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let (width, height) = (config.width, config.height);
    let controller = Rc::new(RefCell::new(CanvasController::with_config(config)));
    let tracker = Rc::new(RefCell::new(InputTracker::new()));

    {
        let controller = Rc::clone(&controller);
        let tracker = Rc::clone(&tracker);
        let started = Rc::new(Cell::new(false));
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if started.replace(true) {
                return;
            }
            if let Err(err) = mount(&canvas, Rc::clone(&controller), Rc::clone(&tracker)) {
                log::error!("canvas host failed to start: {err}");
            }
        });
    }

    let on_mouse_down = {
        let tracker = Rc::clone(&tracker);
        move |ev: leptos::ev::MouseEvent| {
            let mut tracker = tracker.borrow_mut();
            tracker.cursor_moved(mouse_point(&ev));
            tracker.button_down(ev.button());
        }
    };

    let on_mouse_up = {
        let tracker = Rc::clone(&tracker);
        move |ev: leptos::ev::MouseEvent| {
            let mut tracker = tracker.borrow_mut();
            tracker.cursor_moved(mouse_point(&ev));
            tracker.button_up(ev.button());
        }
    };

    let on_mouse_move = {
        let tracker = Rc::clone(&tracker);
        move |ev: leptos::ev::MouseEvent| {
            let mut tracker = tracker.borrow_mut();
            tracker.cursor_moved(mouse_point(&ev));
            tracker.sync_buttons(ev.buttons());
        }
    };

    let on_mouse_leave = {
        let tracker = Rc::clone(&tracker);
        move |_ev: leptos::ev::MouseEvent| tracker.borrow_mut().release_all()
    };

    let on_key_down = {
        let tracker = Rc::clone(&tracker);
        move |ev: leptos::ev::KeyboardEvent| {
            let key = ev.key();
            if should_prevent_default_key(&key) {
                ev.prevent_default();
            }
            tracker.borrow_mut().key_down(&key);
        }
    };

    let on_key_up = {
        let tracker = Rc::clone(&tracker);
        move |ev: leptos::ev::KeyboardEvent| {
            let key = ev.key();
            if should_prevent_default_key(&key) {
                ev.prevent_default();
            }
            tracker.borrow_mut().key_up(&key);
        }
    };

    let on_blur = {
        let tracker = Rc::clone(&tracker);
        move |_ev: leptos::ev::FocusEvent| tracker.borrow_mut().release_all()
    };

    view! {
        <canvas
            class="canvas-host"
            node_ref=canvas_ref
            width=width.to_string()
            height=height.to_string()
            tabindex="0"
            style=canvas_style(width, height)
            on:mousedown=on_mouse_down
            on:mouseup=on_mouse_up
            on:mousemove=on_mouse_move
            on:mouseleave=on_mouse_leave
            on:keydown=on_key_down
            on:keyup=on_key_up
            on:blur=on_blur
            on:contextmenu=|ev: leptos::ev::MouseEvent| ev.prevent_default()
        >
            "Your browser does not support canvas."
        </canvas>
    }
}

/// Size the surface, bind the 2D context, and start the frame loop.
fn mount(
    canvas: &HtmlCanvasElement,
    controller: Rc<RefCell<CanvasController>>,
    tracker: Rc<RefCell<InputTracker>>,
) -> Result<(), HostError> {
    let outside_width = u32::try_from(canvas.client_width()).unwrap_or_default();
    let outside_height = u32::try_from(canvas.client_height()).unwrap_or_default();
    let (width, height) = controller.borrow().layout(outside_width, outside_height);
    canvas.set_width(width);
    canvas.set_height(height);

    let target = Canvas2dTarget::new(context_2d(canvas)?, width, height);
    frame_loop::start(controller, tracker, target)?;
    canvas.focus()?;
    log::info!("canvas host running at {width}x{height}");
    Ok(())
}
