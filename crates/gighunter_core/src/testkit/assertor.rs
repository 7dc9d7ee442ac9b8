//! Field-wise equality assertors for domain models.
//!
//! Usage follows one builder protocol for every model:
//! `SourceAssertor::new().expected(&a).actual(&b).do_assert()`.

use crate::model::gig::Gig;
use crate::model::source::Source;
use std::fmt::Debug;

/// Common "set expected, set actual, assert" protocol.
pub trait ModelAssertor<'a>: Sized {
    type Model: 'a;

    /// Starts an assertion with nothing set.
    fn new() -> Self;

    /// Sets the reference value.
    fn expected(self, expected: &'a Self::Model) -> Self;

    /// Sets the value under test. `None` fails the assertion.
    fn actual(self, actual: impl Into<Option<&'a Self::Model>>) -> Self;

    /// Panics on the first field that differs, naming model and field.
    fn do_assert(self);
}

/// Holds both sides until `do_assert`.
#[derive(Debug)]
struct Sides<'a, T> {
    expected: Option<&'a T>,
    actual: Option<&'a T>,
}

impl<'a, T> Default for Sides<'a, T> {
    fn default() -> Self {
        Self {
            expected: None,
            actual: None,
        }
    }
}

impl<'a, T> Sides<'a, T> {
    fn resolve(self, model: &str) -> (&'a T, &'a T) {
        let Some(expected) = self.expected else {
            panic!("{model} assertor: expected value was never set");
        };
        let Some(actual) = self.actual else {
            panic!("{model} assertor: actual value is missing");
        };
        (expected, actual)
    }
}

fn assert_field<V: PartialEq + Debug + ?Sized>(model: &str, field: &str, expected: &V, actual: &V) {
    assert!(
        expected == actual,
        "{model}.{field} mismatch\n  expected: {expected:?}\n    actual: {actual:?}"
    );
}

// Values are withheld so credentials never reach test output.
fn assert_secret_field(model: &str, field: &str, expected: &str, actual: &str) {
    assert!(expected == actual, "{model}.{field} mismatch (value withheld)");
}

/// Assertor for `Source`.
#[derive(Debug, Default)]
pub struct SourceAssertor<'a> {
    sides: Sides<'a, Source>,
}

impl<'a> ModelAssertor<'a> for SourceAssertor<'a> {
    type Model = Source;

    fn new() -> Self {
        Self::default()
    }

    fn expected(mut self, expected: &'a Source) -> Self {
        self.sides.expected = Some(expected);
        self
    }

    fn actual(mut self, actual: impl Into<Option<&'a Source>>) -> Self {
        self.sides.actual = actual.into();
        self
    }

    fn do_assert(self) {
        const MODEL: &str = "Source";
        let (expected, actual) = self.sides.resolve(MODEL);

        assert_field(MODEL, "id", &expected.id, &actual.id);
        assert_field(MODEL, "name", &expected.name, &actual.name);
        assert_field(MODEL, "base_url", &expected.base_url, &actual.base_url);
        assert_field(MODEL, "client_id", &expected.client_id, &actual.client_id);
        assert_secret_field(
            MODEL,
            "client_secret",
            &expected.client_secret,
            &actual.client_secret,
        );
        assert_secret_field(MODEL, "api_token", &expected.api_token, &actual.api_token);
        assert_field(
            MODEL,
            "token_expiry_date",
            &expected.token_expiry_date,
            &actual.token_expiry_date,
        );
    }
}

/// Assertor for `Gig`.
#[derive(Debug, Default)]
pub struct GigAssertor<'a> {
    sides: Sides<'a, Gig>,
}

impl<'a> ModelAssertor<'a> for GigAssertor<'a> {
    type Model = Gig;

    fn new() -> Self {
        Self::default()
    }

    fn expected(mut self, expected: &'a Gig) -> Self {
        self.sides.expected = Some(expected);
        self
    }

    fn actual(mut self, actual: impl Into<Option<&'a Gig>>) -> Self {
        self.sides.actual = actual.into();
        self
    }

    fn do_assert(self) {
        const MODEL: &str = "Gig";
        let (expected, actual) = self.sides.resolve(MODEL);

        assert_field(MODEL, "id", &expected.id, &actual.id);
        assert_field(MODEL, "artist", &expected.artist, &actual.artist);
        assert_field(MODEL, "venue", &expected.venue, &actual.venue);
        assert_field(MODEL, "date", &expected.date, &actual.date);
        assert_field(MODEL, "ticket_uri", &expected.ticket_uri, &actual.ticket_uri);
    }
}

#[cfg(test)]
mod tests {
    use super::{GigAssertor, ModelAssertor, SourceAssertor};
    use crate::model::gig::Gig;
    use crate::model::source::Source;

    #[test]
    fn identical_sources_pass() {
        let source = Source::new("SeeTickets", "https://www.seetickets.com");
        let copy = source.clone();
        SourceAssertor::new().expected(&source).actual(&copy).do_assert();
    }

    #[test]
    #[should_panic(expected = "Source.base_url mismatch")]
    fn differing_source_field_is_named() {
        let expected = Source::new("SeeTickets", "https://www.seetickets.com");
        let actual = Source::new("SeeTickets", "https://www.seetickets.co.uk");
        SourceAssertor::new().expected(&expected).actual(&actual).do_assert();
    }

    #[test]
    #[should_panic(expected = "Source.api_token mismatch (value withheld)")]
    fn differing_secret_is_reported_without_value() {
        let expected = Source::new("SeeTickets", "https://www.seetickets.com");
        let mut actual = expected.clone();
        actual.api_token = "leaked".to_string();
        SourceAssertor::new().expected(&expected).actual(&actual).do_assert();
    }

    #[test]
    #[should_panic(expected = "actual value is missing")]
    fn missing_actual_fails() {
        let expected = Gig::new("Idles", "O2 Academy");
        GigAssertor::new().expected(&expected).actual(None::<&Gig>).do_assert();
    }

    #[test]
    #[should_panic(expected = "Gig.venue mismatch")]
    fn differing_gig_field_is_named() {
        let expected = Gig::new("Idles", "O2 Academy");
        let actual = Gig::new("Idles", "Rock City");
        GigAssertor::new().expected(&expected).actual(&actual).do_assert();
    }
}
