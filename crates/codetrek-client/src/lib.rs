pub mod fetcher;
pub mod gfg;
pub mod leetcode;
mod text;

pub use fetcher::ReqwestFetcher;
pub use gfg::GfgExtractor;
pub use leetcode::LeetCodeExtractor;
