/// Marker trait for intents.
///
/// Intents are either user actions (change a filter, clear a banner) or
/// completions of repository calls (rows loaded, mutation failed).
pub trait Intent: Send + 'static {}
