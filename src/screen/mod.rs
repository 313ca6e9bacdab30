use anyhow::{Context, Result};
use std::io::Write;
use std::time::Instant;
use tracing::info;

use crate::index::sam::SuffixAutomaton;
use crate::io::panel::{self, Panel};
use crate::io::report::{self, ReportFormat, ReportMeta};

pub mod matcher;
pub mod rank;

pub use matcher::{detect, is_detected, score, score_codes, DETECTION_PERCENT};
pub use rank::{percentage, rank, Collection, RankedCollection};

/// 筛查参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenOpt {
    /// 一段精确匹配计入覆盖长度所需的最短长度
    pub min_match_len: usize,
    /// 评分线程数，1 为串行
    pub threads: usize,
    /// 严格模式：空基因 / 空疾病直接报错，而不是按 0 处理
    pub strict: bool,
}

impl Default for ScreenOpt {
    fn default() -> Self {
        Self { min_match_len: 1, threads: 1, strict: false }
    }
}

/// 单次筛查的产出：排名结果与构建出的自动机规模
#[derive(Debug, Clone)]
pub struct ScreenOutcome {
    pub results: Vec<RankedCollection>,
    pub reference_len: usize,
    pub states: usize,
}

/// 内存中的完整流程：构建自动机 -> 评分 -> 排名。
pub fn screen_panel(panel: &Panel, opt: &ScreenOpt) -> Result<ScreenOutcome> {
    let t0 = Instant::now();
    let sam = SuffixAutomaton::build(&panel.reference).context("invalid reference sequence")?;
    info!(
        reference_len = panel.reference.len(),
        states = sam.len(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "suffix automaton built"
    );

    let t1 = Instant::now();
    let results = rank(&panel.collections, &sam, opt).context("cannot screen gene panel")?;
    info!(
        diseases = results.len(),
        threads = opt.threads,
        elapsed_ms = t1.elapsed().as_millis() as u64,
        "panel ranked"
    );

    Ok(ScreenOutcome { results, reference_len: sam.reference_len(), states: sam.len() })
}

/// 读取输入文件，筛查并写出报告（out_path 为空时写到 stdout）。
/// `min_match_override` 优先于文件中的阈值。
pub fn screen_file(
    input_path: &str,
    out_path: Option<&str>,
    format: ReportFormat,
    min_match_override: Option<usize>,
    threads: usize,
    strict: bool,
) -> Result<()> {
    let start = Instant::now();
    let fh = std::fs::File::open(input_path)
        .with_context(|| format!("cannot open input '{}'", input_path))?;
    let panel = panel::read_panel(std::io::BufReader::new(fh))
        .with_context(|| format!("cannot parse input '{}'", input_path))?;

    let opt = ScreenOpt {
        min_match_len: min_match_override.unwrap_or(panel.min_match_len),
        threads,
        strict,
    };
    let outcome = screen_panel(&panel, &opt)?;

    let mut out_box: Box<dyn Write> = if let Some(p) = out_path {
        let f = std::fs::File::create(p).with_context(|| format!("cannot create output '{}'", p))?;
        Box::new(std::io::BufWriter::new(f))
    } else {
        Box::new(std::io::BufWriter::new(std::io::stdout()))
    };
    let meta = ReportMeta::now(opt.min_match_len, outcome.reference_len, outcome.states);
    report::write_report(&mut out_box, format, &meta, &outcome.results)?;
    out_box.flush()?;

    info!(elapsed_s = start.elapsed().as_secs_f64(), "total time");
    Ok(())
}
