use crate::error::ScreenError;
use crate::util::dna;

/// 参考序列最大长度：保证 2n+1 个状态的下标都能放进 u32
pub const MAX_REFERENCE_LEN: usize = (u32::MAX as usize - 1) / 2;

/// 后缀自动机的一个状态。
/// `len` 为到达该状态的最长串长度；`link` 为后缀链接（根状态为 None）；
/// `next[c]` 为字符 c 的转移目标。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub len: u32,
    pub link: Option<u32>,
    pub next: [Option<u32>; dna::SIGMA],
}

impl State {
    fn root() -> Self {
        Self { len: 0, link: None, next: [None; dna::SIGMA] }
    }
}

/// 后缀自动机（DAWG）：
/// - 在线构建，逐字符扩展，时间与状态数均为线性；
/// - 状态存放在连续数组中，下标 0 为根，构建完成后只读；
/// - 状态总数不超过 2n+1（n 为参考长度）。
#[derive(Debug, Clone)]
pub struct SuffixAutomaton {
    states: Vec<State>,
    last: u32,
}

impl SuffixAutomaton {
    /// 从原始参考序列（仅允许大写 A/C/G/T）构建。
    /// 先整体校验，出现非法字符时直接返回错误，不会留下构建了一半的自动机。
    pub fn build(reference: &[u8]) -> Result<Self, ScreenError> {
        check_reference_len(reference.len())?;
        let codes = dna::encode(reference)?;
        Ok(Self::build_from_codes(&codes))
    }

    /// 从已编码（0..SIGMA）的序列构建。
    ///
    /// # Panics
    /// 长度超过 [`MAX_REFERENCE_LEN`] 时 panic。
    pub fn build_from_codes(codes: &[u8]) -> Self {
        assert!(codes.len() <= MAX_REFERENCE_LEN, "reference too long: {} bases", codes.len());
        let mut sam = Self {
            states: Vec::with_capacity(2 * codes.len() + 1),
            last: 0,
        };
        sam.states.push(State::root());
        for &c in codes {
            sam.extend(c);
        }
        assert!(
            sam.states.len() <= 2 * codes.len() + 1,
            "suffix automaton exceeded 2n+1 states"
        );
        sam
    }

    fn push_state(&mut self, state: State) -> u32 {
        let id = self.states.len() as u32;
        self.states.push(state);
        id
    }

    /// 在线追加一个字符
    fn extend(&mut self, c: u8) {
        let ci = c as usize;
        debug_assert!(ci < dna::SIGMA);

        let last = self.last;
        let cur = self.push_state(State {
            len: self.states[last as usize].len + 1,
            link: None,
            next: [None; dna::SIGMA],
        });

        // 沿后缀链接回溯，补上缺失的 c 转移
        let mut p = Some(last);
        while let Some(pi) = p {
            let st = &mut self.states[pi as usize];
            if st.next[ci].is_some() {
                break;
            }
            st.next[ci] = Some(cur);
            p = st.link;
        }

        match p {
            None => self.states[cur as usize].link = Some(0),
            Some(pi) => {
                let p_len = self.states[pi as usize].len;
                let q = match self.states[pi as usize].next[ci] {
                    Some(q) => q,
                    None => unreachable!("suffix-link walk stopped on a state without transition"),
                };
                if self.states[q as usize].len == p_len + 1 {
                    self.states[cur as usize].link = Some(q);
                } else {
                    // 拆分 q：克隆出长度为 len(p)+1 的新状态，转移表按值复制
                    let q_state = self.states[q as usize];
                    let clone = self.push_state(State {
                        len: p_len + 1,
                        link: q_state.link,
                        next: q_state.next,
                    });

                    let mut p = Some(pi);
                    while let Some(pi) = p {
                        let st = &mut self.states[pi as usize];
                        if st.next[ci] != Some(q) {
                            break;
                        }
                        st.next[ci] = Some(clone);
                        p = st.link;
                    }

                    self.states[q as usize].link = Some(clone);
                    self.states[cur as usize].link = Some(clone);
                }
            }
        }

        self.last = cur;
    }

    #[inline]
    pub fn root(&self) -> u32 {
        0
    }

    /// 状态总数（含根）
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// 是否只含根状态（即参考序列为空）
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.len() == 1
    }

    #[inline]
    pub fn state(&self, id: u32) -> &State {
        &self.states[id as usize]
    }

    #[inline]
    pub fn transition(&self, id: u32, c: u8) -> Option<u32> {
        self.states[id as usize].next[c as usize]
    }

    /// 转移边总数
    pub fn transition_count(&self) -> usize {
        self.states
            .iter()
            .map(|s| s.next.iter().filter(|t| t.is_some()).count())
            .sum()
    }

    /// 参考序列长度（即最后一个非克隆状态的 len）
    pub fn reference_len(&self) -> usize {
        self.states[self.last as usize].len as usize
    }

    /// 精确子串判定，pattern 为已编码序列
    pub fn contains(&self, pattern: &[u8]) -> bool {
        pattern
            .iter()
            .try_fold(self.root(), |s, &c| self.transition(s, c))
            .is_some()
    }
}

fn check_reference_len(len: usize) -> Result<(), ScreenError> {
    if len > MAX_REFERENCE_LEN {
        return Err(ScreenError::ReferenceTooLong { len, max: MAX_REFERENCE_LEN });
    }
    Ok(())
}
