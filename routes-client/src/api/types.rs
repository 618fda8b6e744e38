//! Wire types for the routing service API.

use serde::{Deserialize, Serialize};

/// A searchable place (station) returned by the search endpoint.
///
/// Immutable once received; selecting a place copies the value into the
/// selection state rather than mutating it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Place {
    /// Opaque identifier, passed back verbatim in route lookups.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Country code (e.g., "FR").
    pub country_code: String,

    /// Providers serving this place. May be absent in the response.
    #[serde(default)]
    pub providers: Vec<String>,
}

impl Place {
    /// Canonical display form: `"{name} ({country_code})"`.
    ///
    /// This is the text written into the input field when the place is
    /// selected, and the string a manual edit is compared against when
    /// deciding whether the selection still stands.
    pub fn display(&self) -> String {
        format!("{} ({})", self.name, self.country_code)
    }
}

/// One provider-operated leg of a route. Always nested inside a
/// [`Route`]; never exists independently.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Segment {
    /// Name of the leg's origin place.
    pub origin_name: String,

    /// Name of the leg's destination place.
    pub destination_name: String,

    /// Leg distance in kilometres.
    pub distance: f64,

    /// Operator of this leg.
    pub provider: String,
}

/// A route from origin to destination, read-only for display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Route {
    /// Legs in origin-to-destination order.
    pub segments: Vec<Segment>,

    /// Total distance in kilometres.
    pub total_distance: f64,
}

/// Body for `POST /routes/find`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindRoutesRequest {
    /// Selected origin place id.
    pub origin_id: String,

    /// Selected destination place id.
    pub destination_id: String,

    /// Upper bound on the number of routes returned.
    pub max_routes: u32,
}

/// Response from `POST /routes/find`. `routes` may be empty.
#[derive(Debug, Deserialize)]
pub struct FindRoutesResponse {
    pub routes: Vec<Route>,
}

/// Error body the service may return on a non-success status.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    /// Human-readable explanation of the failure.
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_display_is_canonical() {
        let place = Place {
            id: "p1".to_string(),
            name: "Paris Gare du Nord".to_string(),
            country_code: "FR".to_string(),
            providers: vec!["Benerail".to_string()],
        };
        assert_eq!(place.display(), "Paris Gare du Nord (FR)");
    }

    #[test]
    fn place_deserializes_without_providers() {
        let json = r#"{"id": "p1", "name": "Berlin Hbf", "country_code": "DE"}"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.name, "Berlin Hbf");
        assert!(place.providers.is_empty());
    }

    #[test]
    fn find_routes_request_serializes() {
        let request = FindRoutesRequest {
            origin_id: "a".to_string(),
            destination_id: "b".to_string(),
            max_routes: 5,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["origin_id"], "a");
        assert_eq!(json["destination_id"], "b");
        assert_eq!(json["max_routes"], 5);
    }

    #[test]
    fn response_parses_nested_routes() {
        let json = r#"{
            "routes": [{
                "segments": [{
                    "origin_name": "Berlin Hbf",
                    "destination_name": "Köln Hbf",
                    "distance": 477.3,
                    "provider": "Benerail"
                }],
                "total_distance": 477.3
            }]
        }"#;
        let response: FindRoutesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.routes.len(), 1);
        assert_eq!(response.routes[0].segments[0].provider, "Benerail");
    }

    #[test]
    fn error_body_detail_is_optional() {
        let with: ErrorBody = serde_json::from_str(r#"{"detail": "graph not ready"}"#).unwrap();
        assert_eq!(with.detail.as_deref(), Some("graph not ready"));

        let without: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(without.detail.is_none());
    }
}
