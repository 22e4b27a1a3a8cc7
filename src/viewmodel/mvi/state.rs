/// Marker trait for snapshots.
///
/// Snapshots are replaced, never mutated in place: `Clone` to publish,
/// `PartialEq` so receivers can skip identical frames.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
