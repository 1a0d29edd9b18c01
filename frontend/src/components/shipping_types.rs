//! Shipping modes with transit time and starting price.
//!
//! The hovered card is highlighted; the air card starts highlighted.

use leptos::*;

use crate::content::SHIPPING_TYPES;

#[component]
pub fn ShippingTypes(#[prop(into)] on_order_click: Callback<()>) -> impl IntoView {
    let (active, set_active) = create_signal("air");

    view! {
        <section id="pricing" class="section">
            <div class="container">
                <div class="section-head">
                    <h2>"Типы доставки"</h2>
                    <p>"Выберите оптимальный способ доставки для вашего груза"</p>
                </div>

                <div class="pricing-grid">
                    {SHIPPING_TYPES
                        .iter()
                        .map(|kind| {
                            let id = kind.id;
                            view! {
                                <div
                                    class="pricing-card"
                                    class:active=move || active.get() == id
                                    on:mouseenter=move |_| set_active.set(id)
                                >
                                    <div class="pricing-icon">{kind.icon}</div>
                                    <h3>{kind.title}</h3>
                                    <div class="pricing-meta">
                                        <span>"⏱️ " {kind.time}</span>
                                        <strong>{kind.price}</strong>
                                    </div>
                                    <ul>
                                        {kind
                                            .features
                                            .iter()
                                            .map(|f| view! { <li>"✓ " {*f}</li> })
                                            .collect_view()}
                                    </ul>
                                    <button class="btn btn-primary btn-block" on:click=move |_| on_order_click.call(())>
                                        "Рассчитать стоимость"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <p class="pricing-hint">
                    "💡 Не уверены какой тип доставки выбрать? Наши менеджеры помогут!"
                </p>
            </div>
        </section>
    }
}
