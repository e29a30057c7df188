/// Marker for a dialog state value.
///
/// A state carries everything needed to draw the dialog and is replaced
/// wholesale on every transition, never mutated in place by views.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
