//! "Why us" cards and the two route cards.

use leptos::*;

use crate::content::{FEATURES, ROUTE_CARDS};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="section">
            <div class="container">
                <div class="section-head">
                    <h2>"Почему выбирают нас"</h2>
                    <p>"Профессиональный подход к международным грузоперевозкам"</p>
                </div>

                <div class="card-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| view! {
                            <div class="card feature-card">
                                <div class="feature-icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>

                <h3 class="routes-title">"Наши направления"</h3>
                <div class="routes-grid">
                    {ROUTE_CARDS
                        .iter()
                        .map(|card| view! {
                            <div class=format!("route-card route-{}", card.route.as_str())>
                                <div class="route-flag">{card.flag}</div>
                                <h4>{card.title}</h4>
                                <p>{card.cities}</p>
                                <ul>
                                    {card
                                        .highlights
                                        .iter()
                                        .map(|h| view! { <li>"✓ " {*h}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
