// src/config/consts.rs

// Net config
pub const DATA_HOST: &str = "www.employer-directory.org";
pub const DATA_PREFIX: &str = "/";

// Remote query API (search service; separate host from the datasets)
pub const API_HOST: &str = "employer-search-api-dnaqgeekeubtdsgq.westus3-01.azurewebsites.net";

// Datasets
pub const DATA_DIR: &str = "data";
pub const REGION_SHARDS: u32 = 10;

// Local state
pub const STORE_DIR: &str = ".store";
pub const CART_FILE: &str = "cart.json";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms

// UI
pub const COPY_ACK_MS: u64 = 1500;
pub const GALLERY_BATCH: usize = 25;
