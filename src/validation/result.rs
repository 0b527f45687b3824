// src/validation/result.rs
//
// Typed, exception-free outcome model.
//
// Every user-facing failure is a value: a CatalogResult carrying the
// accumulated validation events. The infrastructure error channel
// (AppError) never transports business outcomes.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};

/// How severe a reported event is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warn,
    Error,
}

/// One structured fact about a validation or operation outcome.
///
/// Events are pure values: a machine-readable, entity-prefixed code
/// (e.g. `MOVIE_YEAR_NOT_VALID`) plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub severity: Severity,
    pub code: String,
    pub message: String,
}

impl Event {
    pub fn new(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn info(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, code, message)
    }

    pub fn warn(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warn, code, message)
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}: {}", self.severity, self.code, self.message)
    }
}

/// Outcome of a catalog operation.
///
/// Invariant: the error variant always carries at least one event, so
/// `status == ERROR` exactly when the event list is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogResult<T> {
    Ok(T),
    Err(Vec<Event>),
}

impl<T> CatalogResult<T> {
    /// OK result with no events.
    pub fn success(data: T) -> Self {
        Self::Ok(data)
    }

    /// ERROR result with a single error event.
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Err(vec![Event::error(code, message)])
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ok(data) => Some(data),
            Self::Err(_) => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Ok(data) => Some(data),
            Self::Err(_) => None,
        }
    }

    pub fn events(&self) -> &[Event] {
        match self {
            Self::Ok(_) => &[],
            Self::Err(events) => events,
        }
    }
}

impl CatalogResult<()> {
    /// OK when the event list is empty, ERROR carrying the events otherwise.
    pub fn from_events(events: Vec<Event>) -> Self {
        if events.is_empty() {
            Self::Ok(())
        } else {
            Self::Err(events)
        }
    }

    /// Combines two results; event order reproduces invocation order.
    pub fn merge(self, other: CatalogResult<()>) -> CatalogResult<()> {
        let mut events = match self {
            Self::Ok(()) => Vec::new(),
            Self::Err(events) => events,
        };
        match other {
            Self::Ok(()) => {}
            Self::Err(more) => events.extend(more),
        }
        Self::from_events(events)
    }
}

impl<T: Serialize> Serialize for CatalogResult<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("CatalogResult", 3)?;
        match self {
            Self::Ok(data) => {
                state.serialize_field("status", "OK")?;
                state.serialize_field("data", data)?;
                state.serialize_field("events", &[] as &[Event])?;
            }
            Self::Err(events) => {
                state.serialize_field("status", "ERROR")?;
                state.serialize_field("data", &Option::<()>::None)?;
                state.serialize_field("events", events)?;
            }
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_has_no_events() {
        let result = CatalogResult::success(42);
        assert!(result.is_ok());
        assert_eq!(result.data(), Some(&42));
        assert!(result.events().is_empty());
    }

    #[test]
    fn test_error_has_single_error_event() {
        let result: CatalogResult<()> = CatalogResult::error("MOVIE_NULL", "Movie mustn't be null.");
        assert!(result.is_error());
        assert_eq!(result.data(), None);
        assert_eq!(
            result.events(),
            &[Event::error("MOVIE_NULL", "Movie mustn't be null.")]
        );
    }

    #[test]
    fn test_status_is_error_iff_events_non_empty() {
        let ok = CatalogResult::from_events(Vec::new());
        assert!(ok.is_ok());
        assert!(ok.events().is_empty());

        let err = CatalogResult::from_events(vec![Event::error("X_NULL", "X mustn't be null.")]);
        assert!(err.is_error());
        assert!(!err.events().is_empty());
    }

    #[test]
    fn test_merge_keeps_invocation_order() {
        let first = CatalogResult::from_events(vec![Event::error("SHOW_NOT_EXIST", "Show doesn't exist.")]);
        let second =
            CatalogResult::from_events(vec![Event::error("SEASON_NUMBER_NOT_POSITIVE", "Number of season must be positive number.")]);

        let merged = first.merge(second);
        assert!(merged.is_error());
        let codes: Vec<&str> = merged.events().iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["SHOW_NOT_EXIST", "SEASON_NUMBER_NOT_POSITIVE"]);
    }

    #[test]
    fn test_merge_of_ok_results_is_ok() {
        let merged = CatalogResult::success(()).merge(CatalogResult::success(()));
        assert!(merged.is_ok());
    }

    #[test]
    fn test_merge_with_one_error_is_error() {
        let merged = CatalogResult::success(())
            .merge(CatalogResult::error("GENRE_NAME_NULL", "Name mustn't be null."));
        assert!(merged.is_error());
        assert_eq!(merged.events().len(), 1);
    }

    #[test]
    fn test_wire_shape() {
        let ok = CatalogResult::success(1);
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            serde_json::json!({"status": "OK", "data": 1, "events": []})
        );

        let err: CatalogResult<i32> = CatalogResult::error("BOOK_NOTE_NULL", "Note mustn't be null.");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({
                "status": "ERROR",
                "data": null,
                "events": [{"severity": "ERROR", "code": "BOOK_NOTE_NULL", "message": "Note mustn't be null."}]
            })
        );
    }
}
