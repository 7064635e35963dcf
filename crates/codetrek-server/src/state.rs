use codetrek_client::{GfgExtractor, LeetCodeExtractor, ReqwestFetcher};
use codetrek_core::{
    Account, AccountService, AppError, MemoryStore, PendingSignup, ProviderConfig, StatsService,
};

pub type Stats = StatsService<ReqwestFetcher, GfgExtractor, LeetCodeExtractor>;
pub type Accounts = AccountService<MemoryStore<Account>, MemoryStore<PendingSignup>>;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub stats: Stats,
    /// Demo accounts; lives as long as the server process.
    pub accounts: Accounts,
}

impl AppState {
    pub fn new(config: ProviderConfig) -> Result<Self, AppError> {
        let stats = StatsService::new(
            ReqwestFetcher::new()?,
            GfgExtractor::new()?,
            LeetCodeExtractor::new(),
            config,
        );

        Ok(Self {
            stats,
            accounts: AccountService::new(MemoryStore::new(), MemoryStore::new()),
        })
    }
}
