//! 帧回调封装模块
//!
//! 使用 `web_sys` 的 requestAnimationFrame API，用显式持有的句柄
//! 替代裸存回调 id 的模块级变量。句柄被 drop 时自动取消调度。

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

type TickClosure = Closure<dyn FnMut(f64)>;

/// 自调度的帧循环
///
/// 每个显示帧调用一次 `tick`（参数为 DOMHighResTimeStamp 毫秒），
/// 直到 `cancel` 被调用。任意时刻至多有一个已调度的回调。
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    #[allow(dead_code)]
    closure: Rc<RefCell<Option<TickClosure>>>,
}

impl FrameLoop {
    /// 启动帧循环
    ///
    /// # Panics
    /// 如果无法获取 window 对象或调度失败
    pub fn start<F>(mut tick: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let closure: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));

        let id_handle = raf_id.clone();
        let self_handle = closure.clone();
        let cb = Closure::new(move |timestamp: f64| {
            tick(timestamp);

            // 已取消则不再调度
            if id_handle.get().is_none() {
                return;
            }
            if let Some(window) = web_sys::window() {
                if let Some(cb) = self_handle.borrow().as_ref() {
                    if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        id_handle.set(Some(id));
                    }
                }
            }
        });
        *closure.borrow_mut() = Some(cb);

        let window = web_sys::window().expect("无法获取 window 对象");
        let id = {
            let guard = closure.borrow();
            let cb = guard.as_ref().expect("闭包已就位");
            window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .expect("调度帧回调失败")
        };
        raf_id.set(Some(id));

        Self { raf_id, closure }
    }

    /// 取消帧循环
    ///
    /// 幂等：重复调用无额外效果。
    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
