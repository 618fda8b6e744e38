//! Display formatting helpers.
//!
//! Pure and stateless: no I/O, no failure modes. Malformed numeric input
//! is not defended against.

use crate::api::Segment;

/// Default badge colour for providers without a dedicated one.
const DEFAULT_PROVIDER_COLOR: &str = "#333";

/// Format a distance in kilometres, rounded to the nearest whole km.
pub fn format_distance(km: f64) -> String {
    format!("{} km", km.round() as i64)
}

/// Badge colour token for a provider.
pub fn provider_color(provider: &str) -> &'static str {
    match provider {
        "Trainline" => "#1976d2",
        "Benerail" => "#dc004e",
        _ => DEFAULT_PROVIDER_COLOR,
    }
}

/// Provider names appearing in `segments`, first-seen order, no repeats.
pub fn unique_providers(segments: &[Segment]) -> Vec<&str> {
    let mut providers: Vec<&str> = Vec::new();
    for segment in segments {
        if !providers.contains(&segment.provider.as_str()) {
            providers.push(&segment.provider);
        }
    }
    providers
}
