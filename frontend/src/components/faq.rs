//! FAQ accordion. At most one answer is expanded.

use leptos::*;

use crate::content::FAQ;

#[component]
pub fn Faq() -> impl IntoView {
    let (expanded, set_expanded) = create_signal(None::<usize>);

    let toggle = move |index: usize| {
        set_expanded.update(|current| {
            *current = if *current == Some(index) { None } else { Some(index) };
        });
    };

    view! {
        <section id="faq" class="section">
            <div class="container faq">
                <div class="section-head">
                    <h2>"Частые вопросы"</h2>
                </div>

                {FAQ
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let is_open = move || expanded.get() == Some(index);
                        view! {
                            <div class="faq-item" class:open=is_open>
                                <button class="faq-question" on:click=move |_| toggle(index)>
                                    <span>{item.question}</span>
                                    <span class="faq-chevron">{move || if is_open() { "−" } else { "+" }}</span>
                                </button>
                                <Show when=is_open fallback=|| view! { }>
                                    <p class="faq-answer">{item.answer}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
