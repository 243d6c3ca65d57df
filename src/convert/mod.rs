pub(crate) mod opts;
pub(crate) mod pipeline;
pub(crate) mod presets;
