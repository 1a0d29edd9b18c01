//! Lead submission flow.
//!
//! [`OrderFlow`] holds everything the order modal needs: visibility, raw
//! field values, inline errors and the submission phase. It is plain data
//! owned by the page view, so every transition can be exercised without a
//! browser.
//!
//! ```text
//!            begin_submit()            finish_submit(Ok)
//!   Idle ───────────────────▶ Submitting ─────────────────▶ Submitted
//!    ▲                            │                             │
//!    │   finish_submit(Err)       │          auto_close()       │
//!    └────────────────────────────┘◀────────────────────────────┘
//! ```
//!
//! [`submit`] drives one attempt end to end over an [`OrderApi`] and a
//! [`Delay`].

use std::cell::RefCell;
use std::time::Duration;

use crate::config::SUBMIT_SUCCESS_DELAY;
use crate::services::OrderApi;
use crate::types::{Field, FieldError, OrderFormValues, ShipmentRequest, SubmitBlocked, SubmitError};
use crate::validation::{validate_field, validate_order};

/// Shown for every transmission failure, whatever the cause.
pub const GENERIC_SUBMIT_ERROR: &str =
    "Произошла ошибка при отправке заявки. Пожалуйста, попробуйте еще раз.";

/// Where the current attempt stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Form is editable.
    #[default]
    Idle,
    /// Request in flight; submit is disabled.
    Submitting,
    /// Confirmation showing until the auto-close timer fires.
    Submitted,
}

/// How a started attempt ended.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Service accepted the order; the modal has since closed.
    Delivered,
    /// Transport failed; fields are kept for a retry.
    Failed(SubmitError),
}

/// State of the order modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderFlow {
    open: bool,
    values: OrderFormValues,
    errors: Vec<FieldError>,
    phase: SubmitPhase,
    submit_error: Option<String>,
    /// Set after the first submit click; enables live re-validation.
    attempted: bool,
}

impl OrderFlow {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Visibility
    // -------------------------------------------------------------------------

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hides the modal. An in-flight request keeps going.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    // -------------------------------------------------------------------------
    // Form state
    // -------------------------------------------------------------------------

    pub fn values(&self) -> &OrderFormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Store a raw value; once the visitor has tried to submit, the field is
    /// re-checked right away.
    pub fn set_value(&mut self, field: Field, value: String) {
        self.values.set(field, value);

        if self.attempted {
            self.errors.retain(|e| e.field != field);
            if let Err(err) = validate_field(field, self.values.get(field)) {
                self.errors.push(err);
                self.errors.sort_by_key(|e| e.field);
            }
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SubmitPhase::Submitted
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Validate and, if everything passes, enter `Submitting`.
    ///
    /// Refused while another attempt is in flight or its confirmation is
    /// still up. On validation failure the per-field errors are stored and
    /// also returned.
    pub fn begin_submit(&mut self) -> Result<ShipmentRequest, SubmitBlocked> {
        if self.phase != SubmitPhase::Idle {
            return Err(SubmitBlocked::Busy);
        }

        self.attempted = true;
        match validate_order(&self.values) {
            Ok(request) => {
                self.errors.clear();
                self.submit_error = None;
                self.phase = SubmitPhase::Submitting;
                Ok(request)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitBlocked::Invalid(errors))
            }
        }
    }

    /// Apply the transport result of the attempt started by `begin_submit`.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        if self.phase != SubmitPhase::Submitting {
            log::warn!("Ignoring submission result outside of an attempt");
            return;
        }

        match result {
            Ok(()) => {
                self.values = OrderFormValues::default();
                self.errors.clear();
                self.attempted = false;
                self.submit_error = None;
                self.phase = SubmitPhase::Submitted;
            }
            Err(_) => {
                self.submit_error = Some(GENERIC_SUBMIT_ERROR.to_string());
                self.phase = SubmitPhase::Idle;
            }
        }
    }

    /// Success timer fired: close the modal and drop the confirmation.
    pub fn auto_close(&mut self) {
        if self.phase == SubmitPhase::Submitted {
            self.phase = SubmitPhase::Idle;
        }
        self.open = false;
    }
}

// =============================================================================
// Driver
// =============================================================================

/// Somewhere an [`OrderFlow`] lives and can be mutated in place.
///
/// Returns `None` when the owner is gone (e.g. a disposed signal).
pub trait FlowStore {
    fn update_flow<R>(&self, f: impl FnOnce(&mut OrderFlow) -> R) -> Option<R>;
}

impl FlowStore for RefCell<OrderFlow> {
    fn update_flow<R>(&self, f: impl FnOnce(&mut OrderFlow) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Suspends for a fixed time.
#[allow(async_fn_in_trait)]
pub trait Delay {
    async fn wait(&self, duration: Duration);
}

/// Run one submission attempt.
///
/// Nothing is sent when the attempt is blocked. After a delivered order the
/// confirmation is held for [`SUBMIT_SUCCESS_DELAY`] before the modal
/// closes. Failures are terminal for this attempt.
pub async fn submit<S, A, D>(store: &S, api: &A, delay: &D) -> Result<SubmitOutcome, SubmitBlocked>
where
    S: FlowStore,
    A: OrderApi,
    D: Delay,
{
    let request = match store.update_flow(OrderFlow::begin_submit) {
        Some(started) => started?,
        None => return Err(SubmitBlocked::Busy),
    };

    log::info!("📦 Submitting order for route {}", request.route);
    let result = api.create_order(&request).await;

    let outcome = match &result {
        Ok(()) => {
            log::info!("✅ Order accepted");
            SubmitOutcome::Delivered
        }
        Err(e) => {
            log::error!("❌ Order submission failed: {}", e);
            SubmitOutcome::Failed(e.clone())
        }
    };
    store.update_flow(|flow| flow.finish_submit(result));

    if outcome == SubmitOutcome::Delivered {
        delay.wait(SUBMIT_SUCCESS_DELAY).await;
        store.update_flow(OrderFlow::auto_close);
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{MSG_BAD_PHONE, MSG_REQUIRED};
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    /// Returns `Pending` once, waking itself, so concurrent futures interleave.
    struct YieldNow(bool);

    impl Future for YieldNow {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    struct MockApi {
        calls: Cell<usize>,
        fail_with: Option<SubmitError>,
        last: RefCell<Option<ShipmentRequest>>,
    }

    impl MockApi {
        fn ok() -> Self {
            Self {
                calls: Cell::new(0),
                fail_with: None,
                last: RefCell::new(None),
            }
        }

        fn failing(err: SubmitError) -> Self {
            Self {
                fail_with: Some(err),
                ..Self::ok()
            }
        }
    }

    impl OrderApi for MockApi {
        async fn create_order(&self, request: &ShipmentRequest) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(request.clone());
            YieldNow(false).await;
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    #[derive(Default)]
    struct RecordingDelay {
        waited: RefCell<Vec<Duration>>,
    }

    impl Delay for RecordingDelay {
        async fn wait(&self, duration: Duration) {
            self.waited.borrow_mut().push(duration);
        }
    }

    fn filled_flow() -> OrderFlow {
        let mut flow = OrderFlow::new();
        flow.open();
        flow.set_value(Field::ClientName, "Алексей Петров".into());
        flow.set_value(Field::ClientPhone, "+7 (999) 123-45-67".into());
        flow.set_value(Field::Route, "turkey_to_rf".into());
        flow.set_value(Field::CargoType, "Одежда".into());
        flow.set_value(Field::CargoWeight, "250".into());
        flow
    }

    #[test]
    fn test_open_and_close_only_touch_visibility() {
        let mut flow = filled_flow();
        let before = flow.values().clone();

        flow.close();
        assert!(!flow.is_open());
        flow.open();
        assert!(flow.is_open());
        assert_eq!(flow.values(), &before);
        assert_eq!(flow.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_invalid_form_sends_nothing() {
        let store = RefCell::new(OrderFlow::new());
        let api = MockApi::ok();
        let delay = RecordingDelay::default();

        let result = block_on(submit(&store, &api, &delay));

        match result {
            Err(SubmitBlocked::Invalid(errors)) => assert_eq!(errors.len(), 4),
            other => panic!("expected validation failure, got {:?}", other),
        }
        assert_eq!(api.calls.get(), 0);

        let flow = store.borrow();
        assert_eq!(flow.phase(), SubmitPhase::Idle);
        for field in [Field::ClientName, Field::ClientPhone, Field::Route, Field::CargoType] {
            assert_eq!(flow.error_for(field), Some(MSG_REQUIRED));
        }
    }

    #[test]
    fn test_success_clears_form_then_closes_after_delay() {
        let store = RefCell::new(filled_flow());
        let api = MockApi::ok();
        let delay = RecordingDelay::default();

        let result = block_on(submit(&store, &api, &delay));

        assert_eq!(result, Ok(SubmitOutcome::Delivered));
        assert_eq!(api.calls.get(), 1);
        assert_eq!(*delay.waited.borrow(), vec![SUBMIT_SUCCESS_DELAY]);

        let sent = api.last.borrow().clone().unwrap();
        assert_eq!(sent.client_name, "Алексей Петров");
        assert_eq!(sent.cargo_weight, Some(250.0));

        let flow = store.borrow();
        assert_eq!(*flow, OrderFlow::new());
    }

    #[test]
    fn test_submitted_state_before_timer() {
        let mut flow = filled_flow();
        flow.begin_submit().unwrap();
        assert!(flow.is_submitting());

        flow.finish_submit(Ok(()));
        assert!(flow.is_submitted());
        assert!(flow.is_open());
        assert!(flow.values().is_empty());

        flow.auto_close();
        assert_eq!(flow.phase(), SubmitPhase::Idle);
        assert!(!flow.is_open());
    }

    #[test]
    fn test_failure_keeps_fields_and_shows_generic_message() {
        let store = RefCell::new(filled_flow());
        let api = MockApi::failing(SubmitError::Rejected {
            status: 500,
            body: "boom".into(),
        });
        let delay = RecordingDelay::default();
        let before = store.borrow().values().clone();

        let result = block_on(submit(&store, &api, &delay));

        assert!(matches!(result, Ok(SubmitOutcome::Failed(SubmitError::Rejected { status: 500, .. }))));
        assert!(delay.waited.borrow().is_empty());

        let flow = store.borrow();
        assert_eq!(flow.submit_error(), Some(GENERIC_SUBMIT_ERROR));
        assert_eq!(flow.values(), &before);
        assert_eq!(flow.phase(), SubmitPhase::Idle);
        assert!(flow.is_open());
    }

    #[test]
    fn test_network_and_server_failures_look_the_same() {
        for err in [
            SubmitError::Network("offline".into()),
            SubmitError::Rejected { status: 422, body: String::new() },
        ] {
            let mut flow = filled_flow();
            flow.begin_submit().unwrap();
            flow.finish_submit(Err(err));
            assert_eq!(flow.submit_error(), Some(GENERIC_SUBMIT_ERROR));
        }
    }

    #[test]
    fn test_retry_after_failure_clears_message() {
        let mut flow = filled_flow();
        flow.begin_submit().unwrap();
        flow.finish_submit(Err(SubmitError::Network("offline".into())));

        flow.begin_submit().unwrap();
        assert_eq!(flow.submit_error(), None);
        assert!(flow.is_submitting());
    }

    #[test]
    fn test_double_submit_sends_once() {
        let store = RefCell::new(filled_flow());
        let api = MockApi::ok();
        let delay = RecordingDelay::default();

        let (first, second) = block_on(async {
            futures::join!(submit(&store, &api, &delay), submit(&store, &api, &delay))
        });

        assert_eq!(first, Ok(SubmitOutcome::Delivered));
        assert_eq!(second, Err(SubmitBlocked::Busy));
        assert_eq!(api.calls.get(), 1);
    }

    #[test]
    fn test_begin_submit_refused_while_in_flight() {
        let mut flow = filled_flow();
        flow.begin_submit().unwrap();
        assert_eq!(flow.begin_submit(), Err(SubmitBlocked::Busy));

        flow.finish_submit(Ok(()));
        assert_eq!(flow.begin_submit(), Err(SubmitBlocked::Busy));
    }

    #[test]
    fn test_closing_mid_flight_does_not_cancel() {
        let mut flow = filled_flow();
        flow.begin_submit().unwrap();
        flow.close();
        assert!(flow.is_submitting());

        flow.finish_submit(Ok(()));
        assert!(flow.is_submitted());

        flow.auto_close();
        assert_eq!(flow, OrderFlow::new());
    }

    #[test]
    fn test_live_revalidation_after_first_attempt() {
        let mut flow = OrderFlow::new();
        flow.set_value(Field::ClientPhone, "abc".into());
        assert!(flow.errors().is_empty());

        assert!(flow.begin_submit().is_err());
        assert_eq!(flow.error_for(Field::ClientPhone), Some(MSG_BAD_PHONE));

        flow.set_value(Field::ClientPhone, "+971 50 123 4567".into());
        assert_eq!(flow.error_for(Field::ClientPhone), None);

        flow.set_value(Field::ClientName, "".into());
        assert_eq!(flow.error_for(Field::ClientName), Some(MSG_REQUIRED));
    }

    #[test]
    fn test_stray_result_is_ignored() {
        let mut flow = filled_flow();
        flow.finish_submit(Ok(()));
        assert_eq!(flow.phase(), SubmitPhase::Idle);
        assert!(!flow.values().is_empty());
    }
}
