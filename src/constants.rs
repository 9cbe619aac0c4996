// Stacks mainnet account prefixes: SP (single-sig) and SM (multi-sig)
pub const STANDARD_ADDRESS_PREFIX: &str = "SP";
pub const MULTISIG_ADDRESS_PREFIX: &str = "SM";
pub const ADDRESS_PREFIXES: [&str; 2] = [STANDARD_ADDRESS_PREFIX, MULTISIG_ADDRESS_PREFIX];

pub const ADDRESS_MIN_LEN: usize = 39;
pub const ADDRESS_MAX_LEN: usize = 41;

/// micro-STX per STX
pub const MICRO_UNITS_PER_STX: u128 = 1_000_000;

pub const STACKS_MAINNET_API: &str = "https://stacks-node-api.mainnet.stacks.co";

pub const DEFAULT_PAGE_LIMIT: usize = 50;
pub const DEFAULT_MAX_ATTEMPTS: usize = 2;
pub const DEFAULT_BASE_RETRY_DELAY_MS: u64 = 1_000;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

pub const INDEXER_URL_ENV: &str = "TABAYYUN_INDEXER_URL";
