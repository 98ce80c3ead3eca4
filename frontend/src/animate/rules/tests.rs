use super::*;

// =========================================================
// 辅助函数
// =========================================================

const VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 720.0,
};

fn on_screen() -> Rect {
    Rect {
        top: 100.0,
        bottom: 300.0,
        left: 100.0,
        right: 400.0,
    }
}

fn below_fold() -> Rect {
    Rect {
        top: 2000.0,
        bottom: 2200.0,
        left: 100.0,
        right: 400.0,
    }
}

/// 按类别内序号依次注册
fn states(categories: &[Category]) -> Vec<ElementState> {
    let mut out: Vec<ElementState> = Vec::new();
    for &category in categories {
        let index = out.iter().filter(|s| s.category == category).count();
        out.push(ElementState::new(category, index));
    }
    out
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

// =========================================================
// 可见性判定
// =========================================================

#[test]
fn intersecting_rect_is_visible() {
    assert!(is_visible(on_screen(), VIEWPORT, VIEWPORT_MARGIN));
}

#[test]
fn rect_below_expanded_viewport_is_invisible() {
    let rect = Rect {
        top: 900.0,
        bottom: 1000.0,
        left: 100.0,
        right: 400.0,
    };
    assert!(!is_visible(rect, VIEWPORT, VIEWPORT_MARGIN));
}

#[test]
fn rect_inside_margin_band_is_visible() {
    // 刚好落在 720 + 100 的扩展边界上
    let below = Rect {
        top: 820.0,
        bottom: 900.0,
        left: 100.0,
        right: 400.0,
    };
    assert!(is_visible(below, VIEWPORT, VIEWPORT_MARGIN));

    // 底边刚好触到 -100
    let above = Rect {
        top: -200.0,
        bottom: -100.0,
        left: 100.0,
        right: 400.0,
    };
    assert!(is_visible(above, VIEWPORT, VIEWPORT_MARGIN));
}

#[test]
fn rect_outside_horizontal_band_is_invisible() {
    let right_of = Rect {
        top: 100.0,
        bottom: 300.0,
        left: 1381.0,
        right: 1500.0,
    };
    assert!(!is_visible(right_of, VIEWPORT, VIEWPORT_MARGIN));

    let left_of = Rect {
        top: 100.0,
        bottom: 300.0,
        left: -300.0,
        right: -101.0,
    };
    assert!(!is_visible(left_of, VIEWPORT, VIEWPORT_MARGIN));
}

// =========================================================
// 类别规则
// =========================================================

#[test]
fn category_animation_mapping() {
    assert_eq!(Category::Testimonial.animation(), Animation::SlideIn);
    assert_eq!(Category::HeroHeading.animation(), Animation::SlideUp);
    assert_eq!(Category::HeroParagraph.animation(), Animation::SlideUp);
    assert_eq!(Category::SectionTitle.animation(), Animation::FadeIn);
    assert_eq!(Category::ScrollTriggered.animation(), Animation::FadeIn);
    assert_eq!(Category::TechImage.animation(), Animation::Float);
}

#[test]
fn animation_class_names() {
    assert_eq!(Animation::FadeIn.class_name(), "animate-fade-in");
    assert_eq!(Animation::SlideIn.class_name(), "animate-slide-in");
    assert_eq!(Animation::SlideUp.class_name(), "animate-slide-up");
}

#[test]
fn testimonial_stagger_wraps_at_group_size() {
    assert_close(Category::Testimonial.delay_secs(0), 0.0);
    assert_close(Category::Testimonial.delay_secs(1), 0.1);
    assert_close(Category::Testimonial.delay_secs(2), 0.2);
    // 第四个回绕到组首
    assert_close(Category::Testimonial.delay_secs(3), 0.0);
}

#[test]
fn hero_paragraph_has_fixed_delay() {
    assert_close(Category::HeroParagraph.delay_secs(0), 0.3);
    assert_close(Category::HeroParagraph.delay_secs(5), 0.3);
}

#[test]
fn scroll_triggered_stagger_grows_with_index() {
    assert_close(Category::ScrollTriggered.delay_secs(0), 0.0);
    assert_close(Category::ScrollTriggered.delay_secs(1), 0.05);
    assert_close(Category::ScrollTriggered.delay_secs(4), 0.2);
}

#[test]
fn heading_and_title_have_no_delay() {
    assert_close(Category::HeroHeading.delay_secs(2), 0.0);
    assert_close(Category::SectionTitle.delay_secs(2), 0.0);
}

// =========================================================
// 一次性求值
// =========================================================

#[test]
fn visible_element_gets_one_assignment() {
    let mut elements = states(&[Category::Testimonial]);
    let assignments = evaluate(&mut elements, &[on_screen()], VIEWPORT, false);

    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].target, 0);
    assert_eq!(assignments[0].animation, Animation::SlideIn);
    assert_close(assignments[0].delay_secs, 0.0);
    assert!(elements[0].animated);
}

#[test]
fn offscreen_element_is_left_untouched() {
    let mut elements = states(&[Category::Testimonial]);
    let assignments = evaluate(&mut elements, &[below_fold()], VIEWPORT, false);

    assert!(assignments.is_empty());
    assert!(!elements[0].animated);
}

#[test]
fn evaluate_is_idempotent_after_first_visibility() {
    let mut elements = states(&[Category::Testimonial, Category::SectionTitle]);
    let rects = [on_screen(), on_screen()];

    let first = evaluate(&mut elements, &rects, VIEWPORT, false);
    assert_eq!(first.len(), 2);

    // 之后的任意次求值都不再产生效果
    for _ in 0..5 {
        let again = evaluate(&mut elements, &rects, VIEWPORT, false);
        assert!(again.is_empty());
    }
    assert!(elements.iter().all(|s| s.animated));
}

#[test]
fn element_animates_once_it_scrolls_into_view() {
    let mut elements = states(&[Category::SectionTitle]);

    let hidden = evaluate(&mut elements, &[below_fold()], VIEWPORT, false);
    assert!(hidden.is_empty());

    let shown = evaluate(&mut elements, &[on_screen()], VIEWPORT, false);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].animation, Animation::FadeIn);
}

#[test]
fn stagger_uses_index_within_category() {
    // 中间混入别的类别不影响推荐卡片的组内序号
    let mut elements = states(&[
        Category::Testimonial,
        Category::SectionTitle,
        Category::Testimonial,
        Category::Testimonial,
        Category::Testimonial,
    ]);
    let rects = vec![on_screen(); elements.len()];
    let assignments = evaluate(&mut elements, &rects, VIEWPORT, false);

    let delays: Vec<f64> = assignments
        .iter()
        .filter(|a| elements[a.target].category == Category::Testimonial)
        .map(|a| a.delay_secs)
        .collect();
    assert_eq!(delays.len(), 4);
    assert_close(delays[0], 0.0);
    assert_close(delays[1], 0.1);
    assert_close(delays[2], 0.2);
    assert_close(delays[3], 0.0);
}

#[test]
fn tech_image_is_marked_but_not_assigned() {
    let mut elements = states(&[Category::TechImage]);
    let assignments = evaluate(&mut elements, &[on_screen()], VIEWPORT, false);

    // 浮动循环接管表现，一次性求值只做标记
    assert!(assignments.is_empty());
    assert!(elements[0].animated);
}

#[test]
fn reduced_motion_suppresses_all_one_shot_animation() {
    let mut elements = states(&[Category::Testimonial, Category::HeroHeading]);
    let rects = [on_screen(), on_screen()];

    for _ in 0..10 {
        let assignments = evaluate(&mut elements, &rects, VIEWPORT, true);
        assert!(assignments.is_empty());
    }
    assert!(elements.iter().all(|s| !s.animated));
}

// =========================================================
// 滚动节流
// =========================================================

#[test]
fn first_scroll_evaluates_and_opens_window() {
    let mut throttle = ScrollThrottle::new();
    assert_eq!(throttle.on_scroll(0.0), ThrottleDecision::Evaluate);
}

#[test]
fn burst_collapses_to_leading_plus_trailing() {
    let mut throttle = ScrollThrottle::new();

    // 窗口内的 10 次滚动：1 次前沿求值，9 次丢弃
    let mut evaluations = 0;
    for i in 0..10 {
        if throttle.on_scroll(i as f64 * 10.0) == ThrottleDecision::Evaluate {
            evaluations += 1;
        }
    }
    assert_eq!(evaluations, 1);

    // 窗口关闭时恰好补一次尾随求值
    assert!(throttle.close_window());
    // 尾随只发一次
    assert!(!throttle.close_window());
}

#[test]
fn quiet_window_needs_no_trailing_evaluation() {
    let mut throttle = ScrollThrottle::new();
    assert_eq!(throttle.on_scroll(0.0), ThrottleDecision::Evaluate);
    assert!(!throttle.close_window());
}

#[test]
fn new_window_opens_after_close() {
    let mut throttle = ScrollThrottle::new();
    assert_eq!(throttle.on_scroll(0.0), ThrottleDecision::Evaluate);
    throttle.close_window();
    assert_eq!(throttle.on_scroll(200.0), ThrottleDecision::Evaluate);
}

#[test]
fn scroll_after_window_expiry_evaluates_again() {
    let mut throttle = ScrollThrottle::new();
    assert_eq!(throttle.on_scroll(0.0), ThrottleDecision::Evaluate);
    assert_eq!(throttle.on_scroll(99.0), ThrottleDecision::Dropped);
    // 窗口已过期，即使尚未显式关闭也重新开窗
    assert_eq!(throttle.on_scroll(150.0), ThrottleDecision::Evaluate);
}

// =========================================================
// 浮动循环
// =========================================================

#[test]
fn first_tick_only_primes_the_clock() {
    let mut float = FloatLoopState::new();
    assert!(!float.tick(0.0));
    assert_close(float.counter(), 0.0);
}

#[test]
fn counter_advances_by_fixed_increment_per_accepted_tick() {
    let mut float = FloatLoopState::new();
    float.tick(0.0);

    assert!(float.tick(16.0));
    assert_close(float.counter(), 0.01);
    assert!(float.tick(33.0));
    assert_close(float.counter(), 0.02);
    assert!(float.tick(50.0));
    assert_close(float.counter(), 0.03);
}

#[test]
fn sub_interval_ticks_are_ignored() {
    let mut float = FloatLoopState::new();
    float.tick(0.0);

    assert!(!float.tick(10.0));
    assert_close(float.counter(), 0.0);
    // 间隔从上一次 *接受* 的 tick 起算
    assert!(float.tick(16.0));
    assert_close(float.counter(), 0.01);
}

#[test]
fn offset_follows_phase_shifted_sine() {
    let mut float = FloatLoopState::new();
    float.tick(0.0);
    float.tick(16.0);

    let counter = float.counter();
    for index in 0..3 {
        let expected = (counter + index as f64 * FLOAT_PHASE_STEP).sin() * FLOAT_AMPLITUDE;
        assert_close(float.offset_for(index), expected);
    }
}

// =========================================================
// 悬停规则
// =========================================================

#[test]
fn card_hover_lifts_and_reverts() {
    let enter = HoverTarget::Card.enter_style();
    assert_eq!(enter.transform, "translateY(-5px)");
    assert_eq!(enter.box_shadow, "var(--shadow-lg)");

    let leave = HoverTarget::Card.leave_style();
    assert_eq!(leave.transform, "translateY(0)");
    assert_eq!(leave.box_shadow, "var(--shadow-md)");
    // 进入与离开使用不同的过渡曲线
    assert_ne!(enter.transition, leave.transition);
}

#[test]
fn button_hover_scales_slightly() {
    assert_eq!(
        HoverTarget::Button.enter_style().transform,
        "translateY(-2px) scale(1.02)"
    );
    assert_eq!(
        HoverTarget::Button.leave_style().transform,
        "translateY(0) scale(1)"
    );
}
