//! A policy may order values by their raw form while comparing them for
//! equality through a normalizer. The two relations are allowed to disagree.

use std::{
    cmp::Ordering,
    fmt,
    sync::{Arc, Mutex},
};

use tracing::{
    field::{Field, Visit},
    Event, Level, Subscriber,
};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    Layer,
};

use crate::{Label, Token};

#[derive(Debug)]
struct Recorded {
    level: Level,
    fields: Vec<(&'static str, String)>,
}

#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<Recorded>>>,
}

impl Recorder {
    fn count(&self, level: Level) -> usize {
        let events = self.events.lock().unwrap();
        events.iter().filter(|e| e.level == level).count()
    }

    /// Runs `f` with this recorder installed as the thread's subscriber
    fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::with_default(subscriber, f)
    }
}

#[derive(Default)]
struct FieldValues(Vec<(&'static str, String)>);

impl Visit for FieldValues {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name(), value.to_owned()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name(), format!("{:?}", value)));
    }
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = FieldValues::default();
        event.record(&mut fields);
        self.events.lock().unwrap().push(Recorded {
            level: *event.metadata().level(),
            fields: fields.0,
        });
    }
}

#[test]
fn equal_values_may_still_be_ordered() {
    let upper = Label::from_static("B");
    let lower = Label::from_static("b");

    assert_eq!(upper, lower);
    assert!(upper < lower);
    assert_eq!(Ordering::Greater, lower.cmp(&upper));
}

#[test]
fn identical_values_compare_equal() {
    let a = Label::from_static("same");
    let b = Label::from_static("same");
    assert_eq!(a, b);
    assert_eq!(Ordering::Equal, a.cmp(&b));
}

#[test]
fn sorting_uses_raw_order() {
    let mut labels = vec![
        Label::from_static("b"),
        Label::from_static("A"),
        Label::from_static("a"),
        Label::from_static("B"),
    ];
    labels.sort();

    let sorted: Vec<&str> = labels.iter().map(Label::as_str).collect();
    assert_eq!(vec!["A", "B", "a", "b"], sorted);
}

#[test]
fn disagreement_is_reported_once_in_debug_builds() {
    let recorder = Recorder::default();
    let less = recorder.capture(|| Label::from_static("B") < Label::from_static("b"));

    assert!(less);
    let expected = if cfg!(debug_assertions) { 1 } else { 0 };
    assert_eq!(expected, recorder.count(Level::WARN));
}

#[test]
fn agreeing_values_are_not_reported() {
    let recorder = Recorder::default();
    let less = recorder.capture(|| {
        Label::from_static("a") < Label::from_static("b")
            && Label::from_static("a") == Label::from_static("a")
            && Label::from_static("a").cmp(&Label::from_static("a")) == Ordering::Equal
    });

    assert!(less);
    assert_eq!(0, recorder.count(Level::WARN));
}

#[test]
fn rejection_logs_policy_without_input() {
    let recorder = Recorder::default();
    let rejected = recorder.capture(|| Token::new("Secret Value!"));

    assert!(rejected.is_none());
    assert_eq!(1, recorder.count(Level::DEBUG));

    let events = recorder.events.lock().unwrap();
    let event = events.iter().find(|e| e.level == Level::DEBUG).unwrap();
    assert!(
        event.fields.iter().any(|(name, value)| *name == "policy" && value == "Token"),
        "{:?}",
        event
    );
    assert!(
        event.fields.iter().all(|(_, value)| !value.contains("Secret")),
        "{:?}",
        event
    );
}
