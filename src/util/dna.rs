use crate::error::ScreenError;

pub const SIGMA: usize = 4; // {0:A, 1:C, 2:G, 3:T}

#[inline]
pub fn to_code(b: u8) -> Option<u8> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// 将序列编码为 0..SIGMA 的整数；遇到第一个非法字符即返回错误，不产生部分结果。
pub fn encode(seq: &[u8]) -> Result<Vec<u8>, ScreenError> {
    let mut out = Vec::with_capacity(seq.len());
    for (position, &b) in seq.iter().enumerate() {
        match to_code(b) {
            Some(c) => out.push(c),
            None => return Err(ScreenError::InvalidSymbol { symbol: char::from(b), position }),
        }
    }
    Ok(out)
}
