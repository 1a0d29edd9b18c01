use leptos::*;

use crate::content::CTA_BENEFITS;

#[component]
pub fn Cta(#[prop(into)] on_order_click: Callback<()>) -> impl IntoView {
    view! {
        <section class="cta">
            <div class="container">
                <h2>"Готовы отправить груз?"</h2>
                <p>"Получите бесплатный расчет стоимости. Никаких скрытых платежей."</p>
                <button class="btn btn-accent btn-lg" on:click=move |_| on_order_click.call(())>
                    "📦 Рассчитать стоимость"
                </button>

                <div class="cta-benefits">
                    {CTA_BENEFITS
                        .iter()
                        .map(|(icon, text)| view! {
                            <div class="cta-benefit">
                                <div class="cta-benefit-icon">{*icon}</div>
                                <div>{*text}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
