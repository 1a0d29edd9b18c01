//! Shipment request modal.
//!
//! Renders an [`OrderFlow`] held in a signal owned by the page and hands
//! submit clicks to [`crate::flow::submit`] with the HTTP transport and a
//! browser timer.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::api_base_url;
use crate::flow::{submit, Delay, FlowStore, OrderFlow, SubmitOutcome};
use crate::services::HttpOrderApi;
use crate::types::{Field, Route, SubmitBlocked};

impl FlowStore for RwSignal<OrderFlow> {
    fn update_flow<R>(&self, f: impl FnOnce(&mut OrderFlow) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// `setTimeout`-backed [`Delay`].
pub struct BrowserDelay;

impl Delay for BrowserDelay {
    async fn wait(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}

#[component]
pub fn OrderForm(flow: RwSignal<OrderFlow>) -> impl IntoView {
    let close = move |_: ev::MouseEvent| flow.update(OrderFlow::close);

    // Escape closes the modal.
    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && flow.with_untracked(OrderFlow::is_open) {
            flow.update(OrderFlow::close);
        }
    });
    on_cleanup(move || keydown.remove());

    // Lock page scroll behind the modal.
    create_effect(move |_| {
        let open = flow.with(OrderFlow::is_open);
        if let Some(body) = document().body() {
            if let Err(e) = body.class_list().toggle_with_force("modal-open", open) {
                log::warn!("Could not toggle body class: {:?}", e);
            }
        }
    });

    view! {
        <Show when=move || flow.with(OrderFlow::is_open) fallback=|| view! { }>
            <div class="modal-backdrop" on:click=close></div>
            <div class="modal" role="dialog" aria-modal="true">
                <div class="modal-panel">
                    <div class="modal-header">
                        <h2>"Заявка на грузоперевозку"</h2>
                        <button class="modal-close" aria-label="Закрыть" on:click=close>"✕"</button>
                    </div>

                    <Show
                        when=move || flow.with(OrderFlow::is_submitted)
                        fallback=move || view! { <OrderFormBody flow=flow/> }
                    >
                        <SubmittedNotice/>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn SubmittedNotice() -> impl IntoView {
    view! {
        <div class="submitted">
            <div class="submitted-icon">"✓"</div>
            <h3>"Заявка отправлена!"</h3>
            <p class="muted">"Наш менеджер свяжется с вами в ближайшее время"</p>
        </div>
    }
}

#[component]
fn OrderFormBody(flow: RwSignal<OrderFlow>) -> impl IntoView {
    let api = HttpOrderApi::new(api_base_url());
    let submitting = move || flow.with(OrderFlow::is_submitting);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if flow.with_untracked(OrderFlow::is_submitting) {
            return;
        }

        let api = api.clone();
        spawn_local(async move {
            match submit(&flow, &api, &BrowserDelay).await {
                Ok(SubmitOutcome::Delivered) => log::info!("📨 Order flow completed"),
                Ok(SubmitOutcome::Failed(_)) => log::warn!("Order not delivered, visitor may retry"),
                Err(SubmitBlocked::Invalid(errors)) => {
                    log::info!("Order form has {} invalid field(s)", errors.len())
                }
                Err(SubmitBlocked::Busy) => log::debug!("Submit ignored, already in progress"),
            }
        });
    };

    view! {
        <form class="order-form" on:submit=on_submit novalidate=true>
            <fieldset>
                <legend>"Контактная информация"</legend>
                <div class="form-grid">
                    <TextField flow=flow field=Field::ClientName label="Имя" placeholder="Иван Иванов"/>
                    <TextField flow=flow field=Field::ClientPhone label="Телефон" placeholder="+7 (999) 123-45-67" input_type="tel"/>
                    <TextField flow=flow field=Field::ClientEmail label="Email" placeholder="email@example.com" input_type="email"/>
                    <TextField flow=flow field=Field::CompanyName label="Компания" placeholder="ООО Компания"/>
                </div>
            </fieldset>

            <fieldset>
                <legend>"Детали груза"</legend>
                <RouteSelect flow=flow/>
                <TextField flow=flow field=Field::CargoType label="Тип груза" placeholder="Например: электроника, одежда, мебель"/>
                <div class="form-grid">
                    <TextField flow=flow field=Field::CargoWeight label="Вес (кг)" placeholder="100" numeric=true/>
                    <TextField flow=flow field=Field::CargoVolume label="Объем (м³)" placeholder="1.5" numeric=true/>
                </div>
                <TextArea flow=flow field=Field::Description label="Описание груза" placeholder="Дополнительная информация о грузе"/>
                <TextField flow=flow field=Field::PickupAddress label="Адрес забора груза" placeholder="Город, улица, дом"/>
                <TextField flow=flow field=Field::DeliveryAddress label="Адрес доставки" placeholder="Город, улица, дом"/>
            </fieldset>

            {move || {
                flow.with(|f| f.submit_error().map(str::to_string))
                    .map(|msg| view! { <div class="form-error">{msg}</div> })
            }}

            <div class="form-actions">
                <button type="button" class="btn btn-outline" on:click=move |_| flow.update(OrderFlow::close)>
                    "Отмена"
                </button>
                <button type="submit" class="btn btn-primary" disabled=submitting>
                    {move || if submitting() { "Отправка..." } else { "Отправить заявку" }}
                </button>
            </div>
        </form>
    }
}

/// Label with a required marker.
#[component]
fn FieldLabel(field: Field, label: &'static str) -> impl IntoView {
    view! {
        <label for=field.as_str()>
            {label}
            {field.is_required().then(|| view! { <span class="required">" *"</span> })}
        </label>
    }
}

/// Inline error under an input, if any.
#[component]
fn FieldMessage(flow: RwSignal<OrderFlow>, field: Field) -> impl IntoView {
    move || {
        flow.with(|f| f.error_for(field).map(str::to_string))
            .map(|msg| view! { <p class="field-error">{msg}</p> })
    }
}

#[component]
fn TextField(
    flow: RwSignal<OrderFlow>,
    field: Field,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    /// Decimal keypad; accepts `,` as separator.
    #[prop(optional)]
    numeric: bool,
) -> impl IntoView {
    let has_error = move || flow.with(|f| f.error_for(field).is_some());
    let inputmode = if numeric { "decimal" } else { "text" };

    view! {
        <div class="form-field" class:has-error=has_error>
            <FieldLabel field=field label=label/>
            <input
                id=field.as_str()
                name=field.as_str()
                type=input_type
                inputmode=inputmode
                placeholder=placeholder
                prop:value=move || flow.with(|f| f.value(field).to_string())
                on:input=move |ev| flow.update(|f| f.set_value(field, event_target_value(&ev)))
            />
            <FieldMessage flow=flow field=field/>
        </div>
    }
}

#[component]
fn TextArea(
    flow: RwSignal<OrderFlow>,
    field: Field,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <FieldLabel field=field label=label/>
            <textarea
                id=field.as_str()
                name=field.as_str()
                rows=3
                placeholder=placeholder
                prop:value=move || flow.with(|f| f.value(field).to_string())
                on:input=move |ev| flow.update(|f| f.set_value(field, event_target_value(&ev)))
            ></textarea>
            <FieldMessage flow=flow field=field/>
        </div>
    }
}

#[component]
fn RouteSelect(flow: RwSignal<OrderFlow>) -> impl IntoView {
    let field = Field::Route;
    let selected = move || flow.with(|f| f.value(field).to_string());

    view! {
        <div class="form-field" class:has-error=move || flow.with(|f| f.error_for(field).is_some())>
            <FieldLabel field=field label="Направление"/>
            <select
                id=field.as_str()
                name=field.as_str()
                on:change=move |ev| flow.update(|f| f.set_value(field, event_target_value(&ev)))
            >
                <option value="" selected=move || selected().is_empty()>"Выберите направление"</option>
                {Route::ALL
                    .into_iter()
                    .map(|route| view! {
                        <option value=route.as_str() selected=move || selected() == route.as_str()>
                            {route.label()}
                        </option>
                    })
                    .collect_view()}
            </select>
            <FieldMessage flow=flow field=field/>
        </div>
    }
}
