mod extract_next_nameservers;
mod recursive_lookup;
mod resolve_iteratively;

pub use extract_next_nameservers::ExtractNextNameserversUseCase;
pub use recursive_lookup::RecursiveLookupUseCase;
pub use resolve_iteratively::{IterativeResolveSettings, ResolveIterativelyUseCase};
