//! 滚动动画引擎 - DOM 驱动层
//!
//! 持有被跟踪元素的注册表与浮动循环句柄，把 `rules` 层的纯决策
//! 应用为真实的 class 与内联样式。注册基于静态的选择器描述表，
//! 运行期不对元素做任何结构探测。

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, HtmlElement};

use super::rules::{
    self, Category, ElementState, FloatLoopState, HoverStyle, HoverTarget, Rect,
    SCROLL_THROTTLE_MS, ScrollThrottle, ThrottleDecision, Viewport,
};
use crate::web::frame::FrameLoop;

/// 滚动触发元素的注册描述表：选择器 -> 类别
const SCROLL_DESCRIPTORS: &[(&str, Category)] = &[
    (".testimonial-card", Category::Testimonial),
    (".section-title", Category::SectionTitle),
    (".hero h1", Category::HeroHeading),
    (".hero p", Category::HeroParagraph),
    (".tech-image", Category::TechImage),
    (".animate-on-scroll", Category::ScrollTriggered),
];

/// 悬停反应元素的注册描述表：选择器 -> 目标种类
const HOVER_DESCRIPTORS: &[(&str, HoverTarget)] = &[
    (".testimonial-card", HoverTarget::Card),
    (".btn", HoverTarget::Button),
];

/// 被跟踪元素的注册表；页面生命周期内只在挂载时建立一次
struct Registry {
    nodes: Vec<HtmlElement>,
    states: Vec<ElementState>,
    /// 浮动元素在注册表中的下标
    tech: Vec<usize>,
    throttle: ScrollThrottle,
    float: FloatLoopState,
    started: bool,
}

struct Shared {
    /// 启动时读取一次的平台偏好
    reduced_motion: bool,
    registry: RefCell<Registry>,
    float_loop: RefCell<Option<FrameLoop>>,
}

/// 滚动动画器
///
/// 克隆只复制句柄；所有状态单一持有，
/// 仅在主事件上下文中被修改。
#[derive(Clone)]
pub struct ScrollAnimator {
    shared: Rc<Shared>,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self {
            shared: Rc::new(Shared {
                reduced_motion: prefers_reduced_motion(),
                registry: RefCell::new(Registry {
                    nodes: Vec::new(),
                    states: Vec::new(),
                    tech: Vec::new(),
                    throttle: ScrollThrottle::new(),
                    float: FloatLoopState::new(),
                    started: false,
                }),
                float_loop: RefCell::new(None),
            }),
        }
    }

    /// 注册一个元素；类别内序号按注册顺序一次性分配
    pub fn register(&self, node: HtmlElement, category: Category) {
        let mut registry = self.shared.registry.borrow_mut();
        let index = registry
            .states
            .iter()
            .filter(|s| s.category == category)
            .count();
        if category.is_float() {
            let slot = registry.nodes.len();
            registry.tech.push(slot);
        }
        registry.nodes.push(node);
        registry.states.push(ElementState::new(category, index));
    }

    /// 按描述表扫描文档，注册全部滚动目标并挂接悬停监听
    pub fn mount(&self, document: &Document) {
        for (selector, category) in SCROLL_DESCRIPTORS {
            let Ok(list) = document.query_selector_all(selector) else {
                continue;
            };
            for i in 0..list.length() {
                if let Some(node) = list.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                    self.register(node, *category);
                }
            }
        }

        for (selector, target) in HOVER_DESCRIPTORS {
            let Ok(list) = document.query_selector_all(selector) else {
                continue;
            };
            for i in 0..list.length() {
                if let Some(node) = list.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                    attach_hover(self.shared.reduced_motion, &node, *target);
                }
            }
        }
    }

    /// 启动：初始求值、滚动/缩放监听、浮动循环
    pub fn start(&self) {
        {
            let mut registry = self.shared.registry.borrow_mut();
            if registry.started {
                return;
            }
            registry.started = true;
        }

        evaluate(&self.shared);

        let Some(window) = web_sys::window() else {
            return;
        };

        // 滚动：节流求值
        {
            let shared = self.shared.clone();
            let closure = Closure::<dyn Fn()>::new(move || on_scroll(&shared));
            let _ = window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            // 泄漏闭包以保持监听器存活
            closure.forget();
        }

        // 缩放：低频事件，不节流
        {
            let shared = self.shared.clone();
            let closure = Closure::<dyn Fn()>::new(move || evaluate(&shared));
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let has_float = !self.shared.registry.borrow().tech.is_empty();
        if has_float && !self.shared.reduced_motion {
            self.start_float_loop();
        }
    }

    fn start_float_loop(&self) {
        let shared = self.shared.clone();
        let frame_loop = FrameLoop::start(move |timestamp| {
            let registry = &mut *shared.registry.borrow_mut();
            if !registry.float.tick(timestamp) {
                return;
            }
            for &slot in &registry.tech {
                let offset = registry.float.offset_for(registry.states[slot].index);
                let _ = registry.nodes[slot]
                    .style()
                    .set_property("transform", &format!("translateY({}px)", offset));
            }
        });
        *self.shared.float_loop.borrow_mut() = Some(frame_loop);
    }

    /// 停止浮动循环
    ///
    /// 幂等；页面卸载时调用一次。节流定时器不在此取消，
    /// 它触发的求值本身是幂等的。
    pub fn stop(&self) {
        if let Some(frame_loop) = self.shared.float_loop.borrow_mut().take() {
            frame_loop.cancel();
        }
    }
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================
// 内部工具函数
// =========================================================

fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

fn current_viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport { width, height })
}

fn bounding_rect(node: &HtmlElement) -> Rect {
    let rect = node.get_bounding_client_rect();
    Rect {
        top: rect.top(),
        bottom: rect.bottom(),
        left: rect.left(),
        right: rect.right(),
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// 对全部未动画化元素执行一次可见性求值并应用指派
fn evaluate(shared: &Rc<Shared>) {
    let Some(viewport) = current_viewport() else {
        return;
    };
    let registry = &mut *shared.registry.borrow_mut();
    let rects: Vec<Rect> = registry.nodes.iter().map(bounding_rect).collect();

    for assignment in rules::evaluate(
        &mut registry.states,
        &rects,
        viewport,
        shared.reduced_motion,
    ) {
        let node = &registry.nodes[assignment.target];
        if assignment.delay_secs > 0.0 {
            let _ = node
                .style()
                .set_property("animation-delay", &format!("{}s", assignment.delay_secs));
        }
        let _ = node.class_list().add_1(assignment.animation.class_name());
    }
}

fn on_scroll(shared: &Rc<Shared>) {
    let decision = shared.registry.borrow_mut().throttle.on_scroll(now_ms());
    if decision != ThrottleDecision::Evaluate {
        return;
    }
    evaluate(shared);

    // 窗口关闭后恰好补一次尾随求值
    let shared = shared.clone();
    Timeout::new(SCROLL_THROTTLE_MS as u32, move || {
        let trailing = shared.registry.borrow_mut().throttle.close_window();
        if trailing {
            evaluate(&shared);
        }
    })
    .forget();
}

fn apply_style(node: &HtmlElement, style: &HoverStyle) {
    let css = node.style();
    let _ = css.set_property("transform", style.transform);
    let _ = css.set_property("box-shadow", style.box_shadow);
    let _ = css.set_property("transition", style.transition);
}

fn attach_hover(reduced_motion: bool, node: &HtmlElement, target: HoverTarget) {
    {
        let enter_node = node.clone();
        let closure = Closure::<dyn Fn()>::new(move || {
            if !reduced_motion {
                apply_style(&enter_node, &target.enter_style());
            }
        });
        let _ = node
            .add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        // 离开时的还原无条件执行，不检查 reduced motion
        let leave_node = node.clone();
        let closure =
            Closure::<dyn Fn()>::new(move || apply_style(&leave_node, &target.leave_style()));
        let _ = node
            .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
