use gene_screen::index::sam::SuffixAutomaton;
use gene_screen::io::panel::parse_panel;
use gene_screen::screen::{self, Collection, ScreenOpt};
use gene_screen::ScreenError;

fn make_seq(len: usize, seed: u32) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut x: u32 = seed;
    let mut v = Vec::with_capacity(len);
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        v.push(bases[(x >> 16) as usize % 4]);
    }
    v
}

#[test]
fn end_to_end_acgt_reference() {
    let sam = SuffixAutomaton::build(b"ACGT").unwrap();
    let cols = vec![Collection { name: "D1".into(), genes: vec![b"ACGT".to_vec()] }];
    let ranked = screen::rank(&cols, &sam, &ScreenOpt::default()).unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].name, "D1");
    assert_eq!(ranked[0].percent, 100);

    // 每个 A 单独匹配一步：阈值 1 时仍然全覆盖
    assert_eq!(screen::score(&sam, b"AAAA", 1).unwrap(), 4);
    assert!(screen::detect(&sam, b"AAAA", 1).unwrap());
}

#[test]
fn rounding_convention_over_three_genes() {
    let sam = SuffixAutomaton::build(b"ACGTACGT").unwrap();
    let opt = ScreenOpt { min_match_len: 3, ..ScreenOpt::default() };
    let cols = vec![
        Collection { name: "one".into(), genes: vec![b"ACGT".to_vec(), b"AAAA".to_vec(), b"CCCC".to_vec()] },
        Collection { name: "two".into(), genes: vec![b"ACGT".to_vec(), b"GTAC".to_vec(), b"CCCC".to_vec()] },
    ];
    let ranked = screen::rank(&cols, &sam, &opt).unwrap();
    assert_eq!(ranked[0].name, "two");
    assert_eq!(ranked[0].percent, 67);
    assert_eq!(ranked[1].name, "one");
    assert_eq!(ranked[1].percent, 33);
}

#[test]
fn score_is_bounded_and_deterministic() {
    let reference = make_seq(2_000, 5);
    let sam = SuffixAutomaton::build(&reference).unwrap();
    for k in 0..40u32 {
        let q = make_seq(50 + k as usize, 77 + k);
        for t in [1usize, 4, 8, 16] {
            let a = screen::score(&sam, &q, t).unwrap();
            let b = screen::score(&sam, &q, t).unwrap();
            assert_eq!(a, b);
            assert!(a <= q.len());
        }
    }
}

#[test]
fn raising_threshold_can_raise_score() {
    // t=3: "GCT" 成段后从 3 继续，后面只剩短段
    // t=4: "GCT" 不够长，右移一位得到 "CTGC"
    let sam = SuffixAutomaton::build(b"GTCTGCT").unwrap();
    assert_eq!(screen::score(&sam, b"GCTGCGATTG", 3).unwrap(), 3);
    assert_eq!(screen::score(&sam, b"GCTGCGATTG", 4).unwrap(), 4);
}

#[test]
fn every_reference_substring_is_detected() {
    let reference = make_seq(500, 9);
    let sam = SuffixAutomaton::build(&reference).unwrap();
    for (i, len) in [(0usize, 30usize), (123, 64), (400, 100), (499, 1)] {
        let gene = &reference[i..i + len];
        assert_eq!(screen::score(&sam, gene, len).unwrap(), len);
        assert!(screen::detect(&sam, gene, len).unwrap());
    }
}

#[test]
fn ties_keep_input_order() {
    let sam = SuffixAutomaton::build(b"ACGTTGCA").unwrap();
    let cols: Vec<Collection> = ["Z", "Y", "X", "W"]
        .iter()
        .map(|n| Collection { name: n.to_string(), genes: vec![b"GTTG".to_vec()] })
        .collect();
    let ranked = screen::rank(&cols, &sam, &ScreenOpt { min_match_len: 2, ..ScreenOpt::default() }).unwrap();
    let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Z", "Y", "X", "W"]);
}

#[test]
fn panel_to_ranking() {
    let panel = parse_panel("4 ACGTTGCAACGGTACC 2 weak 2 ACGTAAAA GGTACC strong 1 TGCAACGG").unwrap();
    let sam = SuffixAutomaton::build(&panel.reference).unwrap();
    let opt = ScreenOpt { min_match_len: panel.min_match_len, threads: 2, strict: true };
    let ranked = screen::rank(&panel.collections, &sam, &opt).unwrap();
    let got: Vec<(&str, u32)> = ranked.iter().map(|r| (r.name.as_str(), r.percent)).collect();
    assert_eq!(got, vec![("strong", 100), ("weak", 50)]);
}

#[test]
fn invalid_reference_is_rejected() {
    assert_eq!(
        SuffixAutomaton::build(b"acgt").unwrap_err(),
        ScreenError::InvalidSymbol { symbol: 'a', position: 0 }
    );
}
