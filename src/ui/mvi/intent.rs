/// Marker for something the user (or the host) asks a dialog to do.
pub trait Intent: Send + 'static {}
