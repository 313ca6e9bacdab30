use crate::error::ScreenError;
use crate::index::sam::SuffixAutomaton;
use crate::util::dna;

/// 基因被判定为"检出"所需的最低覆盖百分比
pub const DETECTION_PERCENT: usize = 90;

/// 贪心扫描：从游标 i 出发，在自动机上从根尽量延伸；
/// 若本段长度 >= min_match_len，累加并从段尾继续（不重叠），
/// 否则游标右移一位并从根重新开始。
///
/// 长度为 0 的段永不接受，因此 min_match_len = 0 与 1 等价。
pub fn score_codes(sam: &SuffixAutomaton, codes: &[u8], min_match_len: usize) -> usize {
    let m = codes.len();
    let mut total = 0usize;
    let mut i = 0usize;
    while i < m {
        let mut cur = sam.root();
        let mut j = i;
        while j < m {
            match sam.transition(cur, codes[j]) {
                Some(next) => {
                    cur = next;
                    j += 1;
                }
                None => break,
            }
        }
        let run = j - i;
        if run > 0 && run >= min_match_len {
            total += run;
            i = j;
        } else {
            i += 1;
        }
    }
    total
}

/// 对原始基因序列评分，非法字符在扫描开始前即返回错误。
pub fn score(sam: &SuffixAutomaton, query: &[u8], min_match_len: usize) -> Result<usize, ScreenError> {
    let codes = dna::encode(query)?;
    Ok(score_codes(sam, &codes, min_match_len))
}

/// 检出判定：floor(total * 100 / len) >= 90。空基因视为未检出。
#[inline]
pub fn is_detected(total: usize, query_len: usize) -> bool {
    if query_len == 0 {
        return false;
    }
    total * 100 / query_len >= DETECTION_PERCENT
}

pub fn detect(sam: &SuffixAutomaton, query: &[u8], min_match_len: usize) -> Result<bool, ScreenError> {
    let total = score(sam, query, min_match_len)?;
    Ok(is_detected(total, query.len()))
}
