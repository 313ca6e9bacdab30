use anyhow::Result;
use std::io::Read;

use crate::error::ScreenError;
use crate::screen::rank::Collection;

/// Parsed screening input: threshold, reference and the disease panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub min_match_len: usize,
    pub reference: Vec<u8>,
    pub collections: Vec<Collection>,
}

/// Reads a whitespace-tokenized panel:
///
/// ```text
/// threshold reference n_diseases
/// name n_genes gene gene ...
/// ...
/// ```
///
/// Line breaks carry no meaning; only token order does.
pub fn read_panel<R: Read>(mut reader: R) -> Result<Panel> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_panel(&text)?)
}

pub fn parse_panel(text: &str) -> Result<Panel, ScreenError> {
    let mut tokens = Tokens { iter: text.split_whitespace(), pos: 0 };

    let min_match_len = tokens.count("threshold")?;
    let reference = tokens.word("reference")?.as_bytes().to_vec();
    let n_collections = tokens.count("disease count")?;

    let mut collections = Vec::with_capacity(n_collections.min(1 << 16));
    for _ in 0..n_collections {
        let name = tokens.word("disease name")?.to_string();
        let n_genes = tokens.count("gene count")?;
        let mut genes = Vec::with_capacity(n_genes.min(1 << 16));
        for _ in 0..n_genes {
            genes.push(tokens.word("gene")?.as_bytes().to_vec());
        }
        collections.push(Collection { name, genes });
    }

    if let Some(extra) = tokens.iter.next() {
        tracing::warn!(token = tokens.pos + 1, extra, "ignoring trailing input");
    }

    Ok(Panel { min_match_len, reference, collections })
}

struct Tokens<'a> {
    iter: std::str::SplitWhitespace<'a>,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn word(&mut self, what: &str) -> Result<&'a str, ScreenError> {
        self.pos += 1;
        self.iter.next().ok_or_else(|| ScreenError::Parse {
            token: self.pos,
            message: format!("expected {}, found end of input", what),
        })
    }

    /// Non-negative number; fractional values are floor-truncated.
    fn count(&mut self, what: &str) -> Result<usize, ScreenError> {
        let tok = self.word(what)?;
        if let Ok(v) = tok.parse::<usize>() {
            return Ok(v);
        }
        match tok.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => Ok(v.floor() as usize),
            _ => Err(ScreenError::Parse {
                token: self.pos,
                message: format!("expected non-negative number for {}, found '{}'", what, tok),
            }),
        }
    }
}
