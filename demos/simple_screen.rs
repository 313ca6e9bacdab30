//! 演示如何在 library 模式下使用 gene-screen 进行筛查。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_screen
//! ```

use gene_screen::index::sam::SuffixAutomaton;
use gene_screen::io::report;
use gene_screen::screen::{self, Collection, ScreenOpt};

fn main() -> anyhow::Result<()> {
    // 1. 参考序列
    let reference = b"ACGTACGTAGCTGATCGTAGCTAGCTAGCTGATCGTAGCTAGCTAGCTGAT";
    println!("参考序列: {}", String::from_utf8_lossy(reference));
    println!("参考长度: {} bp", reference.len());

    // 2. 构建后缀自动机
    let sam = SuffixAutomaton::build(reference)?;
    println!("后缀自动机构建完成：状态数={}, 转移数={}", sam.len(), sam.transition_count());

    // 3. 单个基因评分
    let gene = b"GCTGATCGTAGTTTT";
    let total = screen::score(&sam, gene, 4)?;
    println!(
        "基因 {} 覆盖 {}/{} bp，检出={}",
        String::from_utf8_lossy(gene),
        total,
        gene.len(),
        screen::is_detected(total, gene.len())
    );

    // 4. 疾病排名
    let diseases = vec![
        Collection {
            name: "DISEASE_A".to_string(),
            genes: vec![b"GCTGATCGTAG".to_vec(), b"TTTTTTTT".to_vec(), b"AGCTAGCTAG".to_vec()],
        },
        Collection {
            name: "DISEASE_B".to_string(),
            genes: vec![b"ACGTACGTAG".to_vec()],
        },
        Collection {
            name: "DISEASE_C".to_string(),
            genes: vec![b"CCCCGGGG".to_vec(), b"AAAATTTT".to_vec()],
        },
    ];
    let opt = ScreenOpt { min_match_len: 4, ..ScreenOpt::default() };
    let ranked = screen::rank(&diseases, &sam, &opt)?;

    println!("\n排名结果：");
    report::write_text(&mut std::io::stdout(), &ranked)?;
    Ok(())
}
