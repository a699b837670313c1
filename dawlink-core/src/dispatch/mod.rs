//! Routing of `address value` notifications into the model mirror.
//!
//! Addresses are consumed depth-first: the first segment picks a category,
//! handlers pop further segments until they reach a leaf, then coerce the
//! payload and write it. A notification is either applied completely or
//! dropped; failures never escape a single line.

mod browser;
mod device;
mod session;
mod track;
mod transport;

use dawlink_model::ModelMirror;

use crate::address::{tokenize, Segments};
use crate::error::DispatchError;
use crate::value::ValueRange;

/// Outcome of dispatching a block of lines.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BatchReport {
    /// Non-empty lines seen
    pub lines: usize,
    /// Lines that were dropped, in order
    pub errors: Vec<DispatchError>,
}

impl BatchReport {
    pub fn applied(&self) -> usize {
        self.lines - self.errors.len()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn merge(&mut self, other: BatchReport) {
        self.lines += other.lines;
        self.errors.extend(other.errors);
    }
}

/// Stateless router from notifications to mirror mutations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    range: ValueRange,
}

impl Dispatcher {
    pub fn new(range: ValueRange) -> Self {
        Self { range }
    }

    /// Apply one notification. Errors are logged here and returned so
    /// callers can count them; the mirror is left untouched on error.
    pub fn dispatch(
        &self,
        model: &mut ModelMirror,
        address: &str,
        value: Option<&str>,
    ) -> Result<(), DispatchError> {
        let result = self.route(model, address, value);
        if let Err(e) = &result {
            log::error!(target: "dispatch", "{}", e);
        }
        result
    }

    /// Apply one `address value` line. Blank lines are ignored.
    pub fn dispatch_line(&self, model: &mut ModelMirror, line: &str) -> Result<(), DispatchError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }
        match line.split_once(' ') {
            Some((address, value)) => self.dispatch(model, address, Some(value)),
            None => self.dispatch(model, line, None),
        }
    }

    /// Apply every line of a newline-separated burst.
    pub fn dispatch_batch(&self, model: &mut ModelMirror, text: &str) -> BatchReport {
        let mut report = BatchReport::default();
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            report.lines += 1;
            if let Err(e) = self.dispatch_line(model, line) {
                report.errors.push(e);
            }
        }
        log::debug!(
            target: "dispatch",
            "batch: {} lines, {} dropped",
            report.lines,
            report.errors.len()
        );
        report
    }

    fn route(
        &self,
        model: &mut ModelMirror,
        address: &str,
        value: Option<&str>,
    ) -> Result<(), DispatchError> {
        let Some(segments) = tokenize(address) else {
            return Ok(());
        };
        let mut route = Route {
            address,
            value,
            segments,
        };
        let Some(category) = route.next() else {
            return Ok(());
        };
        match category {
            "click" | "preroll" | "prerollClick" | "play" | "stop" | "repeat" | "loop"
            | "record" | "tempo" | "time" | "beat" | "numerator" | "denominator" => {
                transport::dispatch_transport(category, &mut route, &mut model.transport)
            }
            "project" => session::dispatch_project(&mut route, &mut model.project),
            "track" => track::dispatch_track(&mut route, model, &self.range),
            "master" => track::dispatch_master(&mut route, model, &self.range),
            "device" => device::dispatch_device(&mut route, &mut model.device, &self.range),
            "clip" => session::dispatch_clip(&mut route, &mut model.clip),
            "browser" => browser::dispatch_browser(&mut route, &mut model.browser),
            "groove" => session::dispatch_groove(&mut route, &mut model.groove),
            "quantize" => session::dispatch_quantize(&mut route, &mut model.quantize),
            _ => Err(route.unhandled()),
        }
    }
}

/// A notification being routed: the remaining segments plus the payload.
pub(crate) struct Route<'a> {
    address: &'a str,
    value: Option<&'a str>,
    segments: Segments<'a>,
}

impl<'a> Route<'a> {
    fn next(&mut self) -> Option<&'a str> {
        self.segments.next()
    }

    fn peek(&self) -> Option<&'a str> {
        self.segments.peek()
    }

    fn unhandled(&self) -> DispatchError {
        DispatchError::Routing {
            address: self.address.to_string(),
        }
    }

    fn coercion(&self, reason: impl Into<String>) -> DispatchError {
        DispatchError::Coercion {
            address: self.address.to_string(),
            value: self.value.map(str::to_string),
            reason: reason.into(),
        }
    }

    /// A leaf must be the last segment.
    fn finish(&self) -> Result<(), DispatchError> {
        if self.segments.is_empty() {
            Ok(())
        } else {
            Err(self.unhandled())
        }
    }

    fn raw(&self) -> Result<&'a str, DispatchError> {
        self.finish()?;
        self.value
            .map(str::trim)
            .ok_or_else(|| self.coercion("missing value"))
    }

    fn number(&self) -> Result<f64, DispatchError> {
        let raw = self.raw()?;
        let number = raw.parse::<f64>().map_err(|e| self.coercion(e.to_string()))?;
        if !number.is_finite() {
            return Err(self.coercion("not a finite number"));
        }
        Ok(number)
    }

    /// Threshold semantics: any value above zero is on.
    fn flag(&self) -> Result<bool, DispatchError> {
        Ok(self.number()? > 0.0)
    }

    fn integer(&self) -> Result<i32, DispatchError> {
        let raw = self.raw()?;
        raw.parse::<i32>().map_err(|e| self.coercion(e.to_string()))
    }

    /// A bank count; negative counts advertise an empty bank.
    fn count(&self) -> Result<usize, DispatchError> {
        Ok(usize::try_from(self.integer()?).unwrap_or(0))
    }

    /// String payload with one pair of enclosing double quotes removed.
    fn text(&self) -> Result<String, DispatchError> {
        self.finish()?;
        let raw = self.value.ok_or_else(|| self.coercion("missing value"))?;
        Ok(unquote(raw).to_string())
    }

    /// Like `text`, but a missing or empty payload is `None`.
    fn optional_text(&self) -> Result<Option<String>, DispatchError> {
        self.finish()?;
        Ok(self
            .value
            .map(unquote)
            .filter(|s| !s.is_empty())
            .map(str::to_string))
    }

    /// Log an update that targets a slot outside the advertised range.
    fn dropped(&self) {
        log::debug!(target: "dispatch", "no such slot for {}, update dropped", self.address);
    }
}

fn unquote(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw)
}

/// Index or keyword, decided by attempting a numeric parse.
enum Selector<'a> {
    /// 0-based slot, or `None` for a number that can never be a slot
    Slot(Option<usize>),
    Keyword(&'a str),
}

fn selector(segment: &str) -> Selector<'_> {
    match segment.parse::<i64>() {
        Ok(number) => Selector::Slot(
            number
                .checked_sub(1)
                .and_then(|i| usize::try_from(i).ok()),
        ),
        Err(_) => Selector::Keyword(segment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Dispatcher, ModelMirror) {
        (Dispatcher::default(), ModelMirror::default())
    }

    #[test]
    fn unknown_category_is_a_routing_error() {
        let (dispatcher, mut model) = setup();
        let before = model.clone();
        let err = dispatcher.dispatch(&mut model, "/bogus/1", Some("1")).unwrap_err();
        assert!(matches!(err, DispatchError::Routing { .. }));
        assert_eq!(model, before);
    }

    #[test]
    fn address_without_route_is_ignored() {
        let (dispatcher, mut model) = setup();
        let before = model.clone();
        assert!(dispatcher.dispatch(&mut model, "play", Some("1")).is_ok());
        assert_eq!(model, before);
    }

    #[test]
    fn line_splits_at_first_space() {
        let (dispatcher, mut model) = setup();
        dispatcher
            .dispatch_line(&mut model, "/track/1/color 255 128 0")
            .unwrap();
        let color = model.track(0).unwrap().color;
        assert_eq!(color.red, 1.0);
        assert!((color.green - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(color.blue, 0.0);
    }

    #[test]
    fn quoted_string_payload_is_unquoted() {
        let (dispatcher, mut model) = setup();
        dispatcher
            .dispatch_line(&mut model, "/track/3/volume/str \"-6.2 dB\"")
            .unwrap();
        assert_eq!(model.track(2).unwrap().volume_str, "-6.2 dB");
    }

    #[test]
    fn blank_lines_are_not_counted() {
        let (dispatcher, mut model) = setup();
        let report = dispatcher.dispatch_batch(&mut model, "/play 1\n\n   \n/record 1\n");
        assert_eq!(report.lines, 2);
        assert!(report.is_clean());
        assert!(model.transport.play);
        assert!(model.transport.record);
    }

    #[test]
    fn selector_prefers_numbers() {
        assert!(matches!(selector("3"), Selector::Slot(Some(2))));
        assert!(matches!(selector("0"), Selector::Slot(None)));
        assert!(matches!(selector("-4"), Selector::Slot(None)));
        assert!(matches!(selector("count"), Selector::Keyword("count")));
        assert!(matches!(selector("3a"), Selector::Keyword("3a")));
    }

    #[test]
    fn segments_past_a_leaf_are_unhandled() {
        let (dispatcher, mut model) = setup();
        let before = model.clone();
        for address in [
            "/play/bogus",
            "/track/1/mute/x",
            "/track/1/mute/extra/stuff",
            "/track/1/volume/str/x",
            "/track/1/send/1/name/x",
            "/device/param/1/value/str/x",
            "/clip/loopStart/x",
            "/browser/selected/x",
            "/track/count/x",
        ] {
            let err = dispatcher.dispatch(&mut model, address, Some("1")).unwrap_err();
            assert!(matches!(err, DispatchError::Routing { .. }), "{address}");
        }
        let err = dispatcher
            .dispatch(&mut model, "/track/1/color/x", Some("1 2 3"))
            .unwrap_err();
        assert!(matches!(err, DispatchError::Routing { .. }));
        assert_eq!(model, before);
    }

    #[test]
    fn missing_text_keeps_previous_value() {
        let (dispatcher, mut model) = setup();
        dispatcher.dispatch_line(&mut model, "/track/1/name Kick").unwrap();
        let err = dispatcher.dispatch(&mut model, "/track/1/name", None).unwrap_err();
        assert!(matches!(err, DispatchError::Coercion { value: None, .. }));
        assert_eq!(model.track(0).unwrap().name, "Kick");
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let (dispatcher, mut model) = setup();
        for value in ["inf", "-Infinity", "NaN"] {
            let err = dispatcher.dispatch(&mut model, "/tempo", Some(value)).unwrap_err();
            assert!(matches!(err, DispatchError::Coercion { .. }), "{value}");
        }
        assert_eq!(model.transport.tempo, 120.0);
    }

    #[test]
    fn missing_value_is_a_coercion_error() {
        let (dispatcher, mut model) = setup();
        let err = dispatcher.dispatch(&mut model, "/tempo", None).unwrap_err();
        assert!(matches!(err, DispatchError::Coercion { value: None, .. }));
    }
}
