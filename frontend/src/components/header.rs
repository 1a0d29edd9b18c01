use leptos::*;

use crate::config::{APP_NAME, CONTACT_PHONE, CONTACT_PHONE_HREF};

#[component]
pub fn Header(#[prop(into)] on_order_click: Callback<()>) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container header-inner">
                <a href="#" class="logo">
                    <span class="logo-mark">"📦"</span>
                    {APP_NAME}
                </a>

                <nav class="header-nav">
                    <a href="#features">"Преимущества"</a>
                    <a href="#how-it-works">"Как это работает"</a>
                    <a href="#pricing">"Тарифы"</a>
                    <a href="#faq">"FAQ"</a>
                </nav>

                <div class="header-right">
                    <a href=CONTACT_PHONE_HREF class="header-phone">
                        "📞 " {CONTACT_PHONE}
                    </a>
                    <button class="btn btn-accent" on:click=move |_| on_order_click.call(())>
                        "Заявка"
                    </button>
                </div>
            </div>
        </header>
    }
}
