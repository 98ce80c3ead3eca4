//! 滚动动画规则模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 可见性判定、按类别的动画选择与延迟公式、一次性动画标记、
//! 滚动节流与浮动循环的状态机都定义在这里。

// =========================================================
// 常量定义
// =========================================================

/// 可见性判定在视口四周扩展的余量（像素）
pub const VIEWPORT_MARGIN: f64 = 100.0;
/// 推荐卡片的级联延迟步长（秒）
pub const TESTIMONIAL_STAGGER_STEP: f64 = 0.1;
/// 推荐卡片级联分组大小；延迟按组内序号回绕
pub const TESTIMONIAL_GROUP: usize = 3;
/// 英雄区段落的固定延迟（秒）
pub const HERO_PARAGRAPH_DELAY: f64 = 0.3;
/// 通用滚动触发元素的级联延迟步长（秒）
pub const SCROLL_STAGGER_STEP: f64 = 0.05;
/// 滚动求值的节流窗口（毫秒）
pub const SCROLL_THROTTLE_MS: f64 = 100.0;
/// 浮动计数器每个有效 tick 的增量
pub const FLOAT_INCREMENT: f64 = 0.01;
/// 浮动振幅（像素）
pub const FLOAT_AMPLITUDE: f64 = 6.0;
/// 相邻浮动元素之间的相位差，形成波浪效果
pub const FLOAT_PHASE_STEP: f64 = std::f64::consts::FRAC_PI_4;
/// 两次浮动 tick 之间的最小间隔（毫秒），把步进率封顶在约 60/秒
pub const FLOAT_MIN_TICK_MS: f64 = 16.0;

// =========================================================
// 元素类别与动画
// =========================================================

/// 被跟踪元素的类别，注册时一次性指定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// 客户评价卡片
    Testimonial,
    /// 区块标题
    SectionTitle,
    /// 英雄区主标题
    HeroHeading,
    /// 英雄区段落
    HeroParagraph,
    /// 技术图片（由浮动循环驱动）
    TechImage,
    /// 通用滚动触发元素
    ScrollTriggered,
}

/// 入场动画
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    FadeIn,
    SlideIn,
    SlideUp,
    Float,
}

impl Animation {
    /// 对应的 CSS class 名
    pub fn class_name(&self) -> &'static str {
        match self {
            Animation::FadeIn => "animate-fade-in",
            Animation::SlideIn => "animate-slide-in",
            Animation::SlideUp => "animate-slide-up",
            Animation::Float => "animate-float",
        }
    }
}

impl Category {
    /// 类别对应的入场动画
    pub fn animation(&self) -> Animation {
        match self {
            Category::Testimonial => Animation::SlideIn,
            Category::HeroHeading | Category::HeroParagraph => Animation::SlideUp,
            Category::TechImage => Animation::Float,
            Category::SectionTitle | Category::ScrollTriggered => Animation::FadeIn,
        }
    }

    /// 类别内序号对应的动画启动延迟（秒）
    pub fn delay_secs(&self, index: usize) -> f64 {
        match self {
            Category::Testimonial => {
                TESTIMONIAL_STAGGER_STEP * (index % TESTIMONIAL_GROUP) as f64
            }
            Category::HeroParagraph => HERO_PARAGRAPH_DELAY,
            Category::ScrollTriggered => SCROLL_STAGGER_STEP * index as f64,
            Category::HeroHeading | Category::SectionTitle | Category::TechImage => 0.0,
        }
    }

    /// 浮动类别由连续循环驱动，不做一次性入场动画
    pub fn is_float(&self) -> bool {
        matches!(self, Category::TechImage)
    }
}

// =========================================================
// 几何与可见性
// =========================================================

/// 元素包围盒（视口坐标）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// 视口尺寸
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// 包围盒是否与扩展了 margin 的视口相交
///
/// 必须以调用时的最新 bounds 与视口尺寸求值，不缓存：
/// 视口会因缩放变化，bounds 会因滚动与布局变化。
pub fn is_visible(rect: Rect, viewport: Viewport, margin: f64) -> bool {
    rect.top <= viewport.height + margin
        && rect.bottom >= -margin
        && rect.left <= viewport.width + margin
        && rect.right >= -margin
}

// =========================================================
// 元素状态与一次性求值
// =========================================================

/// 被跟踪元素的状态
#[derive(Debug, Clone)]
pub struct ElementState {
    pub category: Category,
    /// 类别内序号，注册时一次性分配
    pub index: usize,
    /// 单调 false→true；一旦为 true，动画与延迟不再重算
    pub animated: bool,
}

impl ElementState {
    pub fn new(category: Category, index: usize) -> Self {
        Self {
            category,
            index,
            animated: false,
        }
    }
}

/// 一次求值产生的动画指派
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// 注册表下标
    pub target: usize,
    pub animation: Animation,
    pub delay_secs: f64,
}

/// 对所有尚未动画化的元素求值可见性并产生指派
///
/// - reduced motion 时整体为 no-op，不改动任何状态；
/// - 浮动类别只做 animated 标记，不产生指派，表现由浮动循环接管；
/// - 幂等：已 animated 的元素不再产生任何效果。
pub fn evaluate(
    states: &mut [ElementState],
    rects: &[Rect],
    viewport: Viewport,
    reduced_motion: bool,
) -> Vec<Assignment> {
    if reduced_motion {
        return Vec::new();
    }

    let mut assignments = Vec::new();
    for (target, state) in states.iter_mut().enumerate() {
        if state.animated {
            continue;
        }
        let Some(rect) = rects.get(target) else {
            continue;
        };
        if !is_visible(*rect, viewport, VIEWPORT_MARGIN) {
            continue;
        }

        state.animated = true;
        if state.category.is_float() {
            continue;
        }
        assignments.push(Assignment {
            target,
            animation: state.category.animation(),
            delay_secs: state.category.delay_secs(state.index),
        });
    }
    assignments
}

// =========================================================
// 滚动节流
// =========================================================

/// 一次滚动调用的节流决策
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleDecision {
    /// 立即求值并开启节流窗口
    Evaluate,
    /// 窗口内到达，丢弃（只标记 pending，不排队）
    Dropped,
}

/// 100ms 滚动节流状态机
///
/// 前沿调用立即求值并开窗；窗口内的调用被丢弃而非排队；
/// 窗口关闭时若期间有滚动发生，恰好补一次尾随求值。
#[derive(Debug, Default)]
pub struct ScrollThrottle {
    window_started_at: Option<f64>,
    pending: bool,
}

impl ScrollThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, now_ms: f64) -> ThrottleDecision {
        match self.window_started_at {
            Some(start) if now_ms - start < SCROLL_THROTTLE_MS => {
                self.pending = true;
                ThrottleDecision::Dropped
            }
            _ => {
                self.window_started_at = Some(now_ms);
                self.pending = false;
                ThrottleDecision::Evaluate
            }
        }
    }

    /// 窗口到期时调用；返回是否需要尾随求值
    pub fn close_window(&mut self) -> bool {
        self.window_started_at = None;
        std::mem::take(&mut self.pending)
    }
}

// =========================================================
// 浮动循环
// =========================================================

/// 浮动循环状态（每个动画器单例）
#[derive(Debug, Default)]
pub struct FloatLoopState {
    counter: f64,
    last_tick_ms: Option<f64>,
}

impl FloatLoopState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 推进一帧；返回计数器是否前进
    ///
    /// 首帧只记录时间戳，不前进；间隔不足 16ms 的帧被忽略，
    /// 与底层回调频率无关。
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let Some(last) = self.last_tick_ms else {
            self.last_tick_ms = Some(now_ms);
            return false;
        };
        if now_ms - last < FLOAT_MIN_TICK_MS {
            return false;
        }
        self.last_tick_ms = Some(now_ms);
        self.counter += FLOAT_INCREMENT;
        true
    }

    pub fn counter(&self) -> f64 {
        self.counter
    }

    /// 类别内序号为 index 的元素的垂直位移（像素）
    pub fn offset_for(&self, index: usize) -> f64 {
        (self.counter + index as f64 * FLOAT_PHASE_STEP).sin() * FLOAT_AMPLITUDE
    }
}

// =========================================================
// 悬停规则
// =========================================================

/// 悬停反应目标的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    /// 客户评价卡片
    Card,
    /// 按钮
    Button,
}

/// 一组瞬时内联样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverStyle {
    pub transform: &'static str,
    pub box_shadow: &'static str,
    pub transition: &'static str,
}

impl HoverTarget {
    /// 指针进入时的抬升样式；是否应用由调用方按 reduced motion 把关
    pub fn enter_style(&self) -> HoverStyle {
        match self {
            HoverTarget::Card => HoverStyle {
                transform: "translateY(-5px)",
                box_shadow: "var(--shadow-lg)",
                transition: "transform 0.3s ease-out, box-shadow 0.3s ease",
            },
            HoverTarget::Button => HoverStyle {
                transform: "translateY(-2px) scale(1.02)",
                box_shadow: "var(--shadow-lg)",
                transition: "all 0.3s ease-out",
            },
        }
    }

    /// 指针离开时的还原样式；无条件应用，不检查 reduced motion
    pub fn leave_style(&self) -> HoverStyle {
        match self {
            HoverTarget::Card => HoverStyle {
                transform: "translateY(0)",
                box_shadow: "var(--shadow-md)",
                transition: "transform 0.3s ease, box-shadow 0.3s ease",
            },
            HoverTarget::Button => HoverStyle {
                transform: "translateY(0) scale(1)",
                box_shadow: "var(--shadow-md)",
                transition: "all 0.3s ease",
            },
        }
    }
}

#[cfg(test)]
mod tests;
