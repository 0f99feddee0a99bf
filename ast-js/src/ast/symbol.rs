use serde::Serialize;

/// Opaque handle to a declared or global symbol. Resolution lives outside the
/// node model; only equality matters here.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Ref(pub u32);
