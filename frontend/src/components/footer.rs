//! Footer component

use leptos::*;

use crate::config::{APP_NAME, CONTACT_EMAIL, CONTACT_PHONE, CONTACT_PHONE_HREF};

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <div class="logo">{APP_NAME}</div>
                    <p class="muted">"Грузоперевозки из ОАЭ и Турции в Россию под ключ"</p>
                </div>
                <div class="footer-links">
                    <a href="#features">"Преимущества"</a>
                    <a href="#how-it-works">"Как это работает"</a>
                    <a href="#faq">"FAQ"</a>
                </div>
                <div class="footer-contacts">
                    <a href=CONTACT_PHONE_HREF>{CONTACT_PHONE}</a>
                    <a href=format!("mailto:{}", CONTACT_EMAIL)>{CONTACT_EMAIL}</a>
                </div>
            </div>
            <p class="footer-copy">
                {format!("© {} {}. Все права защищены.", year, APP_NAME)}
            </p>
        </footer>
    }
}
