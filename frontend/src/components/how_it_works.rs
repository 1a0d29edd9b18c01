use leptos::*;

use crate::content::STEPS;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="section section-alt">
            <div class="container">
                <div class="section-head">
                    <h2>"Как мы работаем"</h2>
                    <p>"Простой и прозрачный процесс доставки вашего груза"</p>
                </div>

                <div class="card-grid">
                    {STEPS
                        .iter()
                        .map(|step| view! {
                            <div class="card step-card">
                                <span class="step-number">{step.number}</span>
                                <div class="step-icon">{step.icon}</div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
