//! # gene-screen
//!
//! 基于后缀自动机（DAWG）的基因面板筛查工具。
//!
//! 给定一条参考 DNA 序列，以及若干"疾病"（每个疾病包含若干"基因"序列），
//! 本 crate 判断每个基因是否被参考序列中足够长的精确匹配覆盖（>= 90% 视为检出），
//! 再按检出比例对疾病排序。
//!
//! - **自动机构建**：在线构建后缀自动机，时间与状态数线性于参考长度
//! - **贪心扫描**：从根出发尽量延伸，达到最短长度阈值的段计入覆盖长度
//! - **排名**：整数四舍五入的检出百分比，降序排列，同分保持输入顺序
//!
//! ## 快速示例
//!
//! ```rust
//! use gene_screen::index::sam::SuffixAutomaton;
//! use gene_screen::screen::{self, Collection, ScreenOpt};
//!
//! let sam = SuffixAutomaton::build(b"ACGTACGGTTCA").unwrap();
//! assert_eq!(screen::score(&sam, b"ACGT", 1).unwrap(), 4);
//!
//! let diseases = vec![
//!     Collection { name: "D1".to_string(), genes: vec![b"ACGT".to_vec(), b"AAAA".to_vec()] },
//!     Collection { name: "D2".to_string(), genes: vec![b"CGGTTC".to_vec()] },
//! ];
//! let opt = ScreenOpt { min_match_len: 2, ..ScreenOpt::default() };
//! let ranked = screen::rank(&diseases, &sam, &opt).unwrap();
//! assert_eq!(ranked[0].name, "D2");
//! assert_eq!(ranked[0].percent, 100);
//! assert_eq!(ranked[1].percent, 50);
//! ```
//!
//! ## 模块说明
//!
//! - [`io`] — 输入面板解析、报告输出（文本 / JSON）
//! - [`index`] — 后缀自动机构建
//! - [`screen`] — 贪心匹配评分、检出判定与排名
//! - [`util`] — DNA 字母表编码
//! - [`error`] — 错误类型

pub mod error;
pub mod io;
pub mod index;
pub mod util;
pub mod screen;

pub use error::ScreenError;
