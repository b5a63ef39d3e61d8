use ferrous_walk_application::use_cases::{
    ExtractNextNameserversUseCase, IterativeResolveSettings, RecursiveLookupUseCase,
    ResolveIterativelyUseCase,
};
use ferrous_walk_domain::Config;
use ferrous_walk_infrastructure::dns::UdpTransport;
use ferrous_walk_infrastructure::system::SystemRecordResolver;
use std::sync::Arc;

pub struct UseCases {
    pub resolve_iteratively: Arc<ResolveIterativelyUseCase>,
    pub recursive_lookup: Arc<RecursiveLookupUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let transport = Arc::new(UdpTransport::from_config(&config.resolver));
        let record_resolver = Arc::new(SystemRecordResolver::new(config.resolver.query_timeout()));
        let extractor = Arc::new(ExtractNextNameserversUseCase::new(record_resolver.clone()));

        Self {
            resolve_iteratively: Arc::new(ResolveIterativelyUseCase::new(
                transport,
                extractor,
                IterativeResolveSettings::from(&config.resolver),
            )),
            recursive_lookup: Arc::new(RecursiveLookupUseCase::new(record_resolver)),
        }
    }
}
