//! Runs a [`TapSession`] in the browser.
//!
//! Scheduled timers become `gloo` timeouts, submissions go through the
//! [`ApiClient`] and every batch of effects ends with a change notification
//! so the page can re-render from a fresh snapshot.

use crate::api::ApiClient;
use crate::dom;
use crate::pages::tap_play::TapView;
use crate::router::Route;
use crate::storage::BrowserStore;
use gloo::timers::callback::Timeout;
use policyplay_core::{ApiError, TAP_RESULTS_KEY, TapEffect, TapSession, Timer, stash_results};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

struct Inner {
    session: RefCell<TapSession>,
    timers: RefCell<Vec<(u64, Timeout)>>,
    client: ApiClient,
    on_change: Callback<()>,
    on_navigate: Callback<Route>,
    on_api_error: Callback<ApiError>,
    alive: Cell<bool>,
}

/// Cheap handle; clones drive the same session.
#[derive(Clone)]
pub struct TapDriver {
    inner: Rc<Inner>,
}

impl TapDriver {
    #[must_use]
    pub fn new(
        session: TapSession,
        client: ApiClient,
        on_change: Callback<()>,
        on_navigate: Callback<Route>,
        on_api_error: Callback<ApiError>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                session: RefCell::new(session),
                timers: RefCell::new(Vec::new()),
                client,
                on_change,
                on_navigate,
                on_api_error,
                alive: Cell::new(true),
            }),
        }
    }

    pub fn start(&self) {
        let effects = self.inner.session.borrow_mut().start(dom::now_ms());
        run(&self.inner, effects);
    }

    pub fn tap(&self, ball_id: usize) {
        let effects = self.inner.session.borrow_mut().tap(ball_id, dom::now_ms());
        run(&self.inner, effects);
    }

    pub fn retry(&self) {
        let effects = self.inner.session.borrow_mut().retry_submit();
        run(&self.inner, effects);
    }

    #[must_use]
    pub fn snapshot(&self) -> TapView {
        TapView::from(&*self.inner.session.borrow())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.inner.session.borrow().is_finished()
    }

    /// Cancel every pending timer and ignore late responses.
    pub fn shutdown(&self) {
        self.inner.alive.set(false);
        self.inner.timers.borrow_mut().clear();
    }
}

fn fire(inner: &Rc<Inner>, timer: Timer) {
    if !inner.alive.get() {
        return;
    }
    let effects = inner.session.borrow_mut().fire(timer, dom::now_ms());
    run(inner, effects);
}

fn schedule(inner: &Rc<Inner>, timer: Timer, delay_ms: u64) {
    let current = inner.session.borrow().epoch();
    let weak: Weak<Inner> = Rc::downgrade(inner);
    let millis = u32::try_from(delay_ms).unwrap_or(u32::MAX);
    let handle = Timeout::new(millis, move || {
        if let Some(inner) = weak.upgrade() {
            fire(&inner, timer);
        }
    });
    let mut timers = inner.timers.borrow_mut();
    timers.retain(|(epoch, _)| *epoch >= current);
    timers.push((timer.epoch, handle));
}

fn submit(inner: &Rc<Inner>, submission: policyplay_core::TapSubmission) {
    let weak = Rc::downgrade(inner);
    let client = inner.client.clone();
    spawn_local(async move {
        let outcome = client.tap_submit(&submission).await;
        let Some(inner) = weak.upgrade().filter(|i| i.alive.get()) else {
            return;
        };
        let index = submission.question_index;
        let effects = match outcome {
            Ok(response) => inner
                .session
                .borrow_mut()
                .submit_succeeded(index, &response),
            Err(err) => {
                inner.on_api_error.emit(err.clone());
                inner.session.borrow_mut().submit_errored(index, &err)
            }
        };
        run(&inner, effects);
    });
}

fn finalize(inner: &Rc<Inner>, request: policyplay_core::FinishTapRequest) {
    let weak = Rc::downgrade(inner);
    let client = inner.client.clone();
    spawn_local(async move {
        let outcome = client.tap_finish(&request).await;
        let Some(inner) = weak.upgrade().filter(|i| i.alive.get()) else {
            return;
        };
        let effects = match outcome {
            Ok(results) => inner.session.borrow_mut().finalize_succeeded(results),
            Err(err) => inner
                .session
                .borrow_mut()
                .finalize_failed(&err.to_string()),
        };
        run(&inner, effects);
    });
}

fn run(inner: &Rc<Inner>, effects: Vec<TapEffect>) {
    if effects.is_empty() {
        return;
    }
    for effect in effects {
        match effect {
            TapEffect::Schedule { timer, delay_ms } => schedule(inner, timer, delay_ms),
            TapEffect::Submit(submission) => submit(inner, submission),
            TapEffect::Finalize(request) => finalize(inner, request),
            TapEffect::StoreResults(results) => {
                if let Err(err) = stash_results(&BrowserStore::Session, TAP_RESULTS_KEY, &results)
                {
                    log::error!("could not store tap results: {err}");
                }
            }
            TapEffect::NavigateToResults { attempt_id } => {
                inner.on_navigate.emit(Route::TapResults { attempt_id });
            }
            TapEffect::Alert(message) => dom::alert(&message),
        }
    }
    inner.on_change.emit(());
}
