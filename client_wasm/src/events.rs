//! Event listener registration and the requestAnimationFrame loop

use std::cell::{Cell, RefCell};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

/// Registered listeners, kept alive so they can be detached on teardown
pub struct Listeners {
    resize: Closure<dyn FnMut()>,
    mousemove: Closure<dyn FnMut(MouseEvent)>,
    wheel: Closure<dyn FnMut()>,
}

pub fn attach_listeners() -> Result<Listeners, JsValue> {
    let window = crate::dom::window()?;
    let body = crate::dom::document()?
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let resize = Closure::<dyn FnMut()>::new(|| {
        let _ = crate::handle_resize();
    });
    window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;

    let mousemove = Closure::<dyn FnMut(MouseEvent)>::new(|event: MouseEvent| {
        crate::handle_pointer_move(event.client_x() as f32, event.client_y() as f32);
    });
    body.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;

    let wheel = Closure::<dyn FnMut()>::new(|| {
        let _ = crate::handle_scroll();
    });
    window.add_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref())?;

    Ok(Listeners {
        resize,
        mousemove,
        wheel,
    })
}

pub fn detach_listeners(listeners: &Listeners) -> Result<(), JsValue> {
    let window = crate::dom::window()?;
    let body = crate::dom::document()?
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    window
        .remove_event_listener_with_callback("resize", listeners.resize.as_ref().unchecked_ref())?;
    body.remove_event_listener_with_callback(
        "mousemove",
        listeners.mousemove.as_ref().unchecked_ref(),
    )?;
    window
        .remove_event_listener_with_callback("wheel", listeners.wheel.as_ref().unchecked_ref())?;
    Ok(())
}

thread_local! {
    static FRAME_CALLBACK: RefCell<Option<Closure<dyn FnMut(f64)>>> = RefCell::new(None);
    static FRAME_HANDLE: Cell<Option<i32>> = Cell::new(None);
}

/// Start the self-rescheduling animation frame loop
pub fn start_frame_loop() -> Result<(), JsValue> {
    FRAME_CALLBACK.with(|callback| {
        *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(|now_ms: f64| {
            let _ = crate::render_frame(now_ms);
            let _ = schedule_next();
        }));
    });
    schedule_next()
}

fn schedule_next() -> Result<(), JsValue> {
    let window = crate::dom::window()?;
    FRAME_CALLBACK.with(|callback| {
        if let Some(closure) = callback.borrow().as_ref() {
            let handle = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
            FRAME_HANDLE.with(|h| h.set(Some(handle)));
        }
        Ok(())
    })
}

/// Cancel the pending animation frame and drop the loop closure
pub fn stop_frame_loop() -> Result<(), JsValue> {
    if let Some(handle) = FRAME_HANDLE.with(|h| h.take()) {
        crate::dom::window()?.cancel_animation_frame(handle)?;
    }
    FRAME_CALLBACK.with(|callback| callback.borrow_mut().take());
    Ok(())
}
