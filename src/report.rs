//! Spin-state rendering.

use crate::model::SpinModel;

/// One symbol per node in ascending index order: `+` for spin up,
/// `-` for spin down.
pub fn render(model: &SpinModel) -> String {
    model
        .nodes()
        .iter()
        .map(|n| if n.spin() > 0 { '+' } else { '-' })
        .collect()
}

/// The same symbols separated by single spaces, the form the CLI prints.
pub fn render_spaced(model: &SpinModel) -> String {
    render(model)
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
