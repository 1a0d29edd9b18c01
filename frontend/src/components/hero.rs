//! Hero section component

use leptos::*;

#[component]
pub fn Hero(#[prop(into)] on_order_click: Callback<()>) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-grid">
                <div>
                    <h1>"Грузоперевозки из ОАЭ и Турции в РФ"</h1>
                    <p class="subtitle">
                        "Надежная доставка под ключ с полным сопровождением на всех этапах"
                    </p>

                    <div class="hero-actions">
                        <button class="btn btn-accent btn-lg" on:click=move |_| on_order_click.call(())>
                            "Оставить заявку"
                        </button>
                        <a href="#features" class="btn btn-ghost btn-lg">"Узнать больше"</a>
                    </div>

                    <div class="hero-figures">
                        <div><strong>"5+"</strong><span>"лет опыта"</span></div>
                        <div><strong>"350+"</strong><span>"доставок"</span></div>
                        <div><strong>"24/7"</strong><span>"поддержка"</span></div>
                    </div>
                </div>

                <div class="hero-card">
                    <div class="hero-card-status">
                        <span class="status-dot"></span>
                        <div>
                            <div class="muted">"Статус груза"</div>
                            <strong>"В пути → Москва"</strong>
                        </div>
                    </div>
                    <div class="hero-card-grid">
                        <div><div class="muted">"Откуда"</div>"Дубай"</div>
                        <div><div class="muted">"Куда"</div>"Москва"</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
