use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ScreenError;
use crate::index::sam::SuffixAutomaton;
use crate::util::dna;

use super::matcher::{is_detected, score_codes};
use super::ScreenOpt;

/// 一个疾病：名称原样保留，基因按输入顺序排列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub name: String,
    pub genes: Vec<Vec<u8>>,
}

/// 排名结果。`ordinal` 为疾病在输入中的位置，用于同分时的稳定排序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCollection {
    pub name: String,
    pub percent: u32,
    #[serde(skip)]
    pub ordinal: usize,
}

/// 整数四舍五入：(detected * 100 + n / 2) / n。n 为 0 时返回 0。
#[inline]
pub fn percentage(detected: usize, n: usize) -> u32 {
    if n == 0 {
        return 0;
    }
    ((detected * 100 + n / 2) / n) as u32
}

/// 对所有疾病评分并排名：百分比降序，同分按输入顺序升序。
///
/// 所有基因在评分前统一编码校验，任何非法字符都会使整个调用失败。
/// `opt.threads > 1` 时在 rayon 线程池中并行评分，结果与串行完全一致。
pub fn rank(
    collections: &[Collection],
    sam: &SuffixAutomaton,
    opt: &ScreenOpt,
) -> Result<Vec<RankedCollection>, ScreenError> {
    let encoded = encode_collections(collections, opt.strict)?;

    let verdicts: Vec<Vec<bool>> = if opt.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(opt.threads)
            .build()
            .map_err(|e| ScreenError::ThreadPool(e.to_string()))?;
        pool.install(|| {
            encoded
                .iter()
                .map(|genes| {
                    genes
                        .par_iter()
                        .map(|g| gene_verdict(sam, g, opt.min_match_len))
                        .collect::<Vec<bool>>()
                })
                .collect()
        })
    } else {
        encoded
            .iter()
            .map(|genes| {
                genes
                    .iter()
                    .map(|g| gene_verdict(sam, g, opt.min_match_len))
                    .collect::<Vec<bool>>()
            })
            .collect()
    };

    let mut results: Vec<RankedCollection> = collections
        .iter()
        .zip(&verdicts)
        .enumerate()
        .map(|(ordinal, (col, v))| {
            let detected = v.iter().filter(|&&d| d).count();
            if v.is_empty() {
                warn!(collection = %col.name, "collection has no genes, reporting 0%");
            }
            debug!(collection = %col.name, detected, genes = v.len(), "collection screened");
            RankedCollection {
                name: col.name.clone(),
                percent: percentage(detected, v.len()),
                ordinal,
            }
        })
        .collect();

    results.sort_by(|a, b| b.percent.cmp(&a.percent).then(a.ordinal.cmp(&b.ordinal)));
    Ok(results)
}

#[inline]
fn gene_verdict(sam: &SuffixAutomaton, codes: &[u8], min_match_len: usize) -> bool {
    is_detected(score_codes(sam, codes, min_match_len), codes.len())
}

fn encode_collections(collections: &[Collection], strict: bool) -> Result<Vec<Vec<Vec<u8>>>, ScreenError> {
    let mut out = Vec::with_capacity(collections.len());
    for col in collections {
        if col.genes.is_empty() && strict {
            return Err(ScreenError::EmptyCollection { collection: col.name.clone() });
        }
        let mut genes = Vec::with_capacity(col.genes.len());
        for (index, gene) in col.genes.iter().enumerate() {
            if gene.is_empty() {
                if strict {
                    return Err(ScreenError::EmptyQuery { collection: col.name.clone(), index });
                }
                warn!(collection = %col.name, index, "empty gene counted as not detected");
            }
            genes.push(dna::encode(gene)?);
        }
        out.push(genes);
    }
    Ok(out)
}
