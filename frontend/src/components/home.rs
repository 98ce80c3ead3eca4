use crate::animate::engine::ScrollAnimator;
use crate::auth::use_auth;
use leptos::prelude::*;

/// 首页：英雄区、服务、技术与客户评价
///
/// 滚动动画器在挂载后基于渲染出的标记启动；
/// 卸载时停止浮动循环。
#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_auth();
    let state = ctx.state;

    // 动画器句柄存放在线程本地 arena 中，便于在 cleanup 回调里访问
    let animator = StoredValue::new_local(ScrollAnimator::new());
    Effect::new(move |_| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            animator.with_value(|animator| {
                animator.mount(&document);
                animator.start();
            });
        }
    });
    on_cleanup(move || animator.with_value(|animator| animator.stop()));

    view! {
        <div class="home">
            <section class="hero">
                <div class="tech-pattern-bg"></div>
                <h1>"We serve you the software solutions"</h1>
                <p>"Explore our services and products tailored for innovation and success."</p>
                <a class="btn btn-primary" href="#services">"Explore Services"</a>

                <Show when=move || state.get().identity.is_some()>
                    {move || {
                        state
                            .get()
                            .identity
                            .map(|identity| {
                                let is_admin = identity.role.is_admin();
                                view! {
                                    <div class="user-info">
                                        <h3>{format!("Welcome, {}!", identity.username)}</h3>
                                        <p>
                                            {format!("You are logged in as: {}", identity.role)}
                                        </p>
                                        {if is_admin {
                                            view! { <p>"You have admin privileges."</p> }
                                                .into_any()
                                        } else {
                                            view! { <p>"You have user privileges."</p> }
                                                .into_any()
                                        }}
                                    </div>
                                }
                            })
                    }}
                </Show>
            </section>

            <section id="services" class="services">
                <h2 class="section-title">"Our Services"</h2>
                <div class="service-container">
                    <div class="service-card animate-on-scroll">
                        <h3>"Custom Software"</h3>
                        <p>"Tailor-made applications designed around your business processes."</p>
                    </div>
                    <div class="service-card animate-on-scroll">
                        <h3>"Cloud Migration"</h3>
                        <p>"Move your workloads to the cloud without disrupting your teams."</p>
                    </div>
                    <div class="service-card animate-on-scroll">
                        <h3>"IT Consulting"</h3>
                        <p>"Strategic guidance from engineers who have shipped at scale."</p>
                    </div>
                </div>
            </section>

            <section class="technologies">
                <h2 class="section-title">"Technologies We Work With"</h2>
                <div class="tech-container">
                    <img class="tech-image" src="/images/tech-cloud.png" alt="Cloud platforms" />
                    <img class="tech-image" src="/images/tech-data.png" alt="Data engineering" />
                    <img class="tech-image" src="/images/tech-mobile.png" alt="Mobile development" />
                </div>
            </section>

            <section class="testimonials">
                <h2 class="section-title">"What Our Clients Say"</h2>
                <div class="testimonial-container">
                    <div class="testimonial-card">
                        <div class="testimonial-content">
                            <p>
                                "\"Acentrik Technology Solutions transformed our business with their \
                                innovative software. Their team's expertise and dedication exceeded \
                                our expectations.\""
                            </p>
                        </div>
                        <div class="testimonial-author">
                            <div class="author-info">
                                <h4>"John Smith"</h4>
                                <p>"CEO, TechInnovate Inc."</p>
                            </div>
                        </div>
                    </div>

                    <div class="testimonial-card">
                        <div class="testimonial-content">
                            <p>
                                "\"Working with Acentrik has been a game-changer for our company. \
                                Their solutions are not only cutting-edge but also user-friendly \
                                and reliable.\""
                            </p>
                        </div>
                        <div class="testimonial-author">
                            <div class="author-info">
                                <h4>"Sarah Johnson"</h4>
                                <p>"CTO, Digital Dynamics"</p>
                            </div>
                        </div>
                    </div>

                    <div class="testimonial-card">
                        <div class="testimonial-content">
                            <p>
                                "\"The team at Acentrik delivered our project on time and within \
                                budget. Their attention to detail and customer service is unmatched \
                                in the industry.\""
                            </p>
                        </div>
                        <div class="testimonial-author">
                            <div class="author-info">
                                <h4>"Michael Chen"</h4>
                                <p>"Director, Global Solutions"</p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
