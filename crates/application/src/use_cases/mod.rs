pub mod dns;

pub use dns::{
    ExtractNextNameserversUseCase, IterativeResolveSettings, RecursiveLookupUseCase,
    ResolveIterativelyUseCase,
};
