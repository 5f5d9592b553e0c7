/// The shared time state container.
pub mod container;
/// Container lookup for consumers.
pub mod scope;
/// Light and dark theme palettes.
pub mod theme;
