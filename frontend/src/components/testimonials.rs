use leptos::*;

use crate::content::TESTIMONIALS;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="section section-alt">
            <div class="container">
                <div class="section-head">
                    <h2>"Отзывы клиентов"</h2>
                    <p>"Что говорят о нас наши клиенты"</p>
                </div>

                <div class="testimonial-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| view! {
                            <div class="card testimonial">
                                <div class="testimonial-stars">"★★★★★"</div>
                                <p class="testimonial-text">{format!("«{}»", t.text)}</p>
                                <div class="testimonial-author">
                                    <span class="avatar">{t.avatar}</span>
                                    <div>
                                        <strong>{t.name}</strong>
                                        <div class="muted">{t.role} ", " {t.company}</div>
                                        <div class="testimonial-route">{t.route}</div>
                                    </div>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
